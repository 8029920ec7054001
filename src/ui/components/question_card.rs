//! The current question with its date, comment box, verdict buttons and date jump

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use super::text_input::TextInputState;
use super::theme::{
    ACCENT_ERROR, ACCENT_PRIMARY, ACCENT_SUCCESS, BORDER_DEFAULT, BORDER_FOCUSED, TEXT_FAINT,
    TEXT_MUTED, TEXT_PRIMARY, TEXT_SECONDARY,
};
use crate::review::{ReviewSession, Verdict};

pub const COMMENT_PLACEHOLDER: &str = "Optional comment";
pub const JUMP_PLACEHOLDER: &str = "MM-DD";

/// Which input inside the card owns the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardFocus {
    #[default]
    None,
    Comment,
    Jump,
}

pub struct QuestionCard<'a> {
    session: &'a ReviewSession,
    comment: &'a TextInputState,
    jump: &'a TextInputState,
    focus: CardFocus,
}

impl<'a> QuestionCard<'a> {
    pub fn new(
        session: &'a ReviewSession,
        comment: &'a TextInputState,
        jump: &'a TextInputState,
    ) -> Self {
        Self {
            session,
            comment,
            jump,
            focus: CardFocus::None,
        }
    }

    pub fn focus(mut self, focus: CardFocus) -> Self {
        self.focus = focus;
        self
    }

    fn render_jump_row(&self, area: Rect, buf: &mut Buffer) {
        let [label_area, input_area, action_area] = Layout::horizontal([
            Constraint::Length(14),
            Constraint::Length(8),
            Constraint::Min(0),
        ])
        .areas(area);

        let label_style = if self.focus == CardFocus::Jump {
            Style::default().fg(ACCENT_PRIMARY)
        } else {
            Style::default().fg(TEXT_SECONDARY)
        };
        Paragraph::new(Span::styled("Jump to date: ", label_style)).render(label_area, buf);

        self.jump.render_with_placeholder(
            input_area,
            buf,
            Style::default().fg(TEXT_PRIMARY),
            JUMP_PLACEHOLDER,
            Style::default().fg(TEXT_FAINT),
            self.focus == CardFocus::Jump,
        );

        Paragraph::new(Line::from(vec![
            Span::styled(" u", Style::default().fg(ACCENT_PRIMARY)),
            Span::styled(" Next Unanswered", Style::default().fg(TEXT_MUTED)),
        ]))
        .render(action_area, buf);
    }

    fn render_comment(&self, area: Rect, buf: &mut Buffer) {
        let focused = self.focus == CardFocus::Comment;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(if focused {
                BORDER_FOCUSED
            } else {
                BORDER_DEFAULT
            }));
        let inner = block.inner(area);
        block.render(area, buf);

        self.comment.render_with_placeholder(
            inner,
            buf,
            Style::default().fg(TEXT_PRIMARY),
            COMMENT_PLACEHOLDER,
            Style::default().fg(TEXT_FAINT),
            focused,
        );
    }

    fn render_buttons(&self, area: Rect, buf: &mut Buffer) {
        let verdict = self.session.current_verdict();
        let button = |label: &'static str, color: Color, selected: bool| {
            if selected {
                Span::styled(
                    label,
                    Style::default()
                        .fg(Color::Black)
                        .bg(color)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Span::styled(label, Style::default().fg(color))
            }
        };

        Paragraph::new(Line::from(vec![
            button(
                " [n] Dislike ",
                ACCENT_ERROR,
                verdict == Some(Verdict::Disliked),
            ),
            Span::raw("   "),
            button(" [y] Like ", ACCENT_SUCCESS, verdict == Some(Verdict::Liked)),
        ]))
        .render(area, buf);
    }
}

impl Widget for QuestionCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!(
            " Question {} of {} ",
            self.session.cursor() + 1,
            self.session.len()
        );
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(BORDER_DEFAULT));
        let inner = block.inner(area);
        block.render(area, buf);

        let [jump_area, _, date_area, question_area, comment_area, buttons_area] =
            Layout::vertical([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(2),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .areas(inner.inner(Margin::new(1, 0)));

        self.render_jump_row(jump_area, buf);

        let question = self.session.current_question();
        Paragraph::new(Span::styled(
            question.date_label(),
            Style::default()
                .fg(ACCENT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ))
        .render(date_area, buf);

        Paragraph::new(question.question.as_str())
            .style(Style::default().fg(TEXT_PRIMARY))
            .wrap(Wrap { trim: true })
            .render(question_area, buf);

        self.render_comment(comment_area, buf);
        self.render_buttons(buttons_area, buf);
    }
}
