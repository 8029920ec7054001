//! Dismissable notice dialog for export results and failures

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use super::dialog::{wrapped_line_count, DialogFrame, InstructionBar};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NoticeKind {
    #[default]
    Info,
    Error,
}

impl NoticeKind {
    fn color(self) -> Color {
        match self {
            NoticeKind::Info => Color::Cyan,
            NoticeKind::Error => Color::Red,
        }
    }
}

/// State for the notice dialog
#[derive(Debug, Clone, Default)]
pub struct NoticeDialogState {
    pub visible: bool,
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
}

impl NoticeDialogState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show_info(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.show(NoticeKind::Info, title, message);
    }

    pub fn show_error(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.show(NoticeKind::Error, title, message);
    }

    fn show(&mut self, kind: NoticeKind, title: impl Into<String>, message: impl Into<String>) {
        self.visible = true;
        self.kind = kind;
        self.title = title.into();
        self.message = message.into();
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

/// Notice dialog widget
pub struct NoticeDialog<'a> {
    state: &'a NoticeDialogState,
}

impl<'a> NoticeDialog<'a> {
    pub fn new(state: &'a NoticeDialogState) -> Self {
        Self { state }
    }
}

impl Widget for NoticeDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !self.state.visible {
            return;
        }

        let dialog_width: u16 = 56;
        let message_lines = wrapped_line_count(&self.state.message, dialog_width);
        let color = self.state.kind.color();

        let inner = DialogFrame::new(&self.state.title, dialog_width, 8 + message_lines)
            .border_color(color)
            .render(area, buf);

        if inner.height < 5 {
            return;
        }

        Paragraph::new(self.state.message.as_str())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(
                Rect {
                    x: inner.x + 1,
                    y: inner.y + 1,
                    width: inner.width.saturating_sub(2),
                    height: message_lines.min(inner.height.saturating_sub(1)),
                },
                buf,
            );

        let button_style = Style::default()
            .fg(Color::Black)
            .bg(color)
            .add_modifier(Modifier::BOLD);
        Paragraph::new(Line::from(Span::styled("  OK  ", button_style)))
            .alignment(Alignment::Center)
            .render(
                Rect {
                    x: inner.x,
                    y: inner.y + inner.height.saturating_sub(3),
                    width: inner.width,
                    height: 1,
                },
                buf,
            );

        InstructionBar::new(vec![("Enter/Esc", "Dismiss")]).render(
            Rect {
                x: inner.x,
                y: inner.y + inner.height.saturating_sub(1),
                width: inner.width,
                height: 1,
            },
            buf,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_and_hide() {
        let mut state = NoticeDialogState::new();
        state.show_error("Export failed", "disk full");
        assert!(state.is_visible());
        assert_eq!(state.kind, NoticeKind::Error);

        state.hide();
        assert!(!state.is_visible());
    }

    #[test]
    fn test_renders_message_and_button() {
        let mut state = NoticeDialogState::new();
        state.show_info("Export", "Saved 2 rows");

        let area = Rect::new(0, 0, 70, 20);
        let mut buf = Buffer::empty(area);
        NoticeDialog::new(&state).render(area, &mut buf);

        let text: String = (0..area.height)
            .flat_map(|y| (0..area.width).map(move |x| (x, y)))
            .map(|(x, y)| buf[(x, y)].symbol().to_string())
            .collect();
        assert!(text.contains("Saved 2 rows"));
        assert!(text.contains("OK"));
        assert!(text.contains("Dismiss"));
    }
}
