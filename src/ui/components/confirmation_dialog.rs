//! Confirmation dialog for destructive actions

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use super::dialog::{wrapped_line_count, DialogFrame, InstructionBar};

/// Border and confirm-button color; every confirmation here guards data loss
const DANGER: Color = Color::Red;

/// What the confirmation dialog is asking about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmationContext {
    /// Clearing every recorded response
    ResetProgress,
}

/// State for the confirmation dialog
#[derive(Debug, Clone)]
pub struct ConfirmationDialogState {
    pub visible: bool,
    pub title: String,
    pub message: String,
    pub confirm_text: String,
    pub cancel_text: String,
    /// Currently selected button (0 = Cancel, 1 = Confirm)
    pub selected: usize,
    pub context: Option<ConfirmationContext>,
}

impl Default for ConfirmationDialogState {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfirmationDialogState {
    pub fn new() -> Self {
        Self {
            visible: false,
            title: String::new(),
            message: String::new(),
            confirm_text: "Confirm".to_string(),
            cancel_text: "Cancel".to_string(),
            selected: 0,
            context: None,
        }
    }

    /// Show the dialog. Cancel is selected initially.
    pub fn show(
        &mut self,
        title: impl Into<String>,
        message: impl Into<String>,
        confirm_text: impl Into<String>,
        context: ConfirmationContext,
    ) {
        self.visible = true;
        self.title = title.into();
        self.message = message.into();
        self.confirm_text = confirm_text.into();
        self.selected = 0;
        self.context = Some(context);
    }

    /// Hide the dialog and hand back what it was confirming
    pub fn hide(&mut self) -> Option<ConfirmationContext> {
        self.visible = false;
        self.context.take()
    }

    pub fn toggle_selection(&mut self) {
        self.selected = if self.selected == 0 { 1 } else { 0 };
    }

    pub fn is_confirm_selected(&self) -> bool {
        self.selected == 1
    }

    pub fn is_cancel_selected(&self) -> bool {
        self.selected == 0
    }
}

/// Confirmation dialog widget
pub struct ConfirmationDialog<'a> {
    state: &'a ConfirmationDialogState,
}

impl<'a> ConfirmationDialog<'a> {
    pub fn new(state: &'a ConfirmationDialogState) -> Self {
        Self { state }
    }

    fn calculate_height(&self, dialog_width: u16) -> u16 {
        // borders, padding, buttons and instructions
        let base_height: u16 = 8;
        base_height + wrapped_line_count(&self.state.message, dialog_width)
    }
}

impl Widget for ConfirmationDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !self.state.visible {
            return;
        }

        let dialog_width: u16 = 56;
        let dialog_height = self.calculate_height(dialog_width);
        let border = DANGER;

        let frame =
            DialogFrame::new(&self.state.title, dialog_width, dialog_height).border_color(border);
        let inner = frame.render(area, buf);

        if inner.height < 5 {
            return;
        }

        let message_lines = wrapped_line_count(&self.state.message, dialog_width);
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

        let buttons_y = inner.y + inner.height.saturating_sub(3);
        let cancel_style = if self.state.is_cancel_selected() {
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let confirm_style = if self.state.is_confirm_selected() {
            Style::default()
                .fg(Color::Black)
                .bg(border)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(border)
        };

        let buttons_line = Line::from(vec![
            Span::styled(format!(" {} ", self.state.cancel_text), cancel_style),
            Span::raw("    "),
            Span::styled(format!(" {} ", self.state.confirm_text), confirm_style),
        ]);
        Paragraph::new(buttons_line)
            .alignment(Alignment::Center)
            .render(
                Rect {
                    x: inner.x,
                    y: buttons_y,
                    width: inner.width,
                    height: 1,
                },
                buf,
            );

        let instructions = InstructionBar::new(vec![
            ("←/→", "Select"),
            ("Enter", "Confirm"),
            ("Esc", "Cancel"),
            ("y/n", "Quick"),
        ]);
        instructions.render(
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
