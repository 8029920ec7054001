//! One-line bars of `key action` hints.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::theme::{ACCENT_PRIMARY, TEXT_FAINT, TEXT_MUTED, TEXT_SECONDARY};

#[derive(Debug, Clone, Copy)]
pub struct KeyHintBarStyle {
    pub key_style: Style,
    pub action_style: Style,
    /// Text placed between hints
    pub divider: (&'static str, Style),
    /// Pad keys with a space on each side, for keys drawn on a background
    pub pad_keys: bool,
    pub alignment: Alignment,
    pub background: Option<Color>,
}

impl KeyHintBarStyle {
    /// Centered hints separated by a faint bar, for dialogs
    pub fn instruction_bar() -> Self {
        Self {
            key_style: Style::default().fg(ACCENT_PRIMARY),
            action_style: Style::default().fg(TEXT_SECONDARY),
            divider: (" │ ", Style::default().fg(TEXT_FAINT)),
            pad_keys: false,
            alignment: Alignment::Center,
            background: None,
        }
    }

    /// Left-aligned hints with keys on `key_bg`, for the screen footer
    pub fn footer_bar(key_bg: Color, footer_bg: Color) -> Self {
        Self {
            key_style: Style::default().fg(TEXT_SECONDARY).bg(key_bg),
            action_style: Style::default().fg(TEXT_MUTED),
            divider: ("   ", Style::default()),
            pad_keys: true,
            alignment: Alignment::Left,
            background: Some(footer_bg),
        }
    }

    fn hint_spans<'a>(&self, key: &'a str, action: &'a str) -> [Span<'a>; 2] {
        let key = if self.pad_keys {
            Span::styled(format!(" {key} "), self.key_style)
        } else {
            Span::styled(key, self.key_style)
        };
        [key, Span::styled(format!(" {action}"), self.action_style)]
    }
}

pub fn render_key_hints(
    area: Rect,
    buf: &mut Buffer,
    hints: &[(&str, &str)],
    style: KeyHintBarStyle,
) {
    let (divider, divider_style) = style.divider;
    let mut spans = Vec::with_capacity(hints.len() * 3 + 1);
    if style.pad_keys {
        spans.push(Span::raw(" "));
    }

    for (i, (key, action)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(divider, divider_style));
        }
        spans.extend(style.hint_spans(key, action));
    }

    let mut paragraph = Paragraph::new(Line::from(spans)).alignment(style.alignment);
    if let Some(bg) = style.background {
        paragraph = paragraph.style(Style::default().bg(bg));
    }
    paragraph.render(area, buf);
}
