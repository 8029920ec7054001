//! Reusable dialog frame and instruction bar components

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Widget},
};

use super::key_hints::{render_key_hints, KeyHintBarStyle};

/// A centered dialog frame with title and border
pub struct DialogFrame<'a> {
    title: &'a str,
    width: u16,
    height: u16,
    border_color: Color,
}

impl<'a> DialogFrame<'a> {
    pub fn new(title: &'a str, width: u16, height: u16) -> Self {
        Self {
            title,
            width,
            height,
            border_color: Color::Cyan,
        }
    }

    pub fn border_color(mut self, color: Color) -> Self {
        self.border_color = color;
        self
    }

    /// Clear a centered box, draw the border, and return the area inside it
    pub fn render(&self, area: Rect, buf: &mut Buffer) -> Rect {
        let frame_area = centered(area, self.width, self.height);
        Clear.render(frame_area, buf);

        let block = Block::default()
            .title(format!(" {} ", self.title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.border_color));
        let inner = block.inner(frame_area);
        block.render(frame_area, buf);
        inner
    }
}

/// `width` x `height` box centered in `area`, shrunk to leave a margin on small screens
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(4));
    let height = height.min(area.height.saturating_sub(2));
    Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    }
}

/// An instruction bar showing keyboard shortcuts
pub struct InstructionBar<'a> {
    instructions: Vec<(&'a str, &'a str)>,
}

impl<'a> InstructionBar<'a> {
    pub fn new(instructions: Vec<(&'a str, &'a str)>) -> Self {
        Self { instructions }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        render_key_hints(
            area,
            buf,
            &self.instructions,
            KeyHintBarStyle::instruction_bar(),
        );
    }
}

/// Number of wrapped lines `text` needs inside a dialog of `width`
pub(crate) fn wrapped_line_count(text: &str, width: u16) -> u16 {
    if text.is_empty() {
        return 0;
    }
    // Account for border and padding on each side
    let available_width = width.saturating_sub(6) as usize;
    if available_width == 0 {
        return 1;
    }
    text.lines()
        .map(|line| line.chars().count().div_ceil(available_width).max(1) as u16)
        .sum::<u16>()
        .max(1)
}
