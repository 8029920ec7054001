//! Single-line text input state with cursor management

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthChar;

/// Text input state. `cursor` counts characters, not bytes.
#[derive(Debug, Clone, Default)]
pub struct TextInputState {
    input: String,
    cursor: usize,
}

impl TextInputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with initial value
    pub fn with_value(value: &str) -> Self {
        let mut state = Self::new();
        state.set(value);
        state
    }

    /// Set the input value and move cursor to end
    pub fn set(&mut self, value: &str) {
        self.input = value.to_string();
        self.cursor = self.char_count();
    }

    pub fn clear(&mut self) {
        self.input.clear();
        self.cursor = 0;
    }

    pub fn value(&self) -> &str {
        &self.input
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.input.is_empty()
    }

    fn char_count(&self) -> usize {
        self.input.chars().count()
    }

    /// Byte offset of the character at `char_index`
    fn byte_index(&self, char_index: usize) -> usize {
        self.input
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.input.len())
    }

    /// Insert a character at cursor position
    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.input.insert(at, c);
        self.cursor += 1;
    }

    /// Delete character before cursor (backspace)
    pub fn delete_char(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.input.remove(at);
        }
    }

    /// Delete character at cursor (delete)
    pub fn delete_forward(&mut self) {
        if self.cursor < self.char_count() {
            let at = self.byte_index(self.cursor);
            self.input.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Delete from cursor to start of line (Ctrl+U)
    pub fn delete_to_start(&mut self) {
        let at = self.byte_index(self.cursor);
        self.input.drain(..at);
        self.cursor = 0;
    }

    /// Delete from cursor to end of line (Ctrl+K)
    pub fn delete_to_end(&mut self) {
        let at = self.byte_index(self.cursor);
        self.input.truncate(at);
    }

    /// Delete word before cursor (Ctrl+W)
    pub fn delete_word_back(&mut self) {
        let chars: Vec<char> = self.input.chars().collect();
        let mut start = self.cursor;
        while start > 0 && chars[start - 1] == ' ' {
            start -= 1;
        }
        while start > 0 && chars[start - 1] != ' ' {
            start -= 1;
        }
        let from = self.byte_index(start);
        let to = self.byte_index(self.cursor);
        self.input.drain(from..to);
        self.cursor = start;
    }

    /// First character to draw so the cursor stays inside `width` columns
    fn scroll_start(&self, width: usize) -> usize {
        let mut columns = 1; // the cursor cell itself
        let mut start = self.cursor;
        let before: Vec<char> = self.input.chars().take(self.cursor).collect();
        for c in before.iter().rev() {
            columns += c.width().unwrap_or(0);
            if columns > width {
                break;
            }
            start -= 1;
        }
        start
    }

    /// Render with placeholder text when empty. The cursor is drawn only when focused.
    pub fn render_with_placeholder(
        &self,
        area: Rect,
        buf: &mut Buffer,
        style: Style,
        placeholder: &str,
        placeholder_style: Style,
        focused: bool,
    ) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let start = self.scroll_start(area.width as usize);
        if self.input.is_empty() {
            Paragraph::new(Span::styled(placeholder, placeholder_style)).render(area, buf);
        } else {
            let visible: String = self.input.chars().skip(start).collect();
            Paragraph::new(Span::styled(visible, style)).render(area, buf);
        }

        if focused {
            let offset: usize = self
                .input
                .chars()
                .skip(start)
                .take(self.cursor - start)
                .map(|c| c.width().unwrap_or(0))
                .sum();
            let cursor_x = area.x + (offset as u16).min(area.width.saturating_sub(1));
            buf[(cursor_x, area.y)].set_style(Style::default().add_modifier(Modifier::REVERSED));
        }
    }
}

impl std::fmt::Display for TextInputState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.input)
    }
}
