//! Progress gauge and the completion banner

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Gauge, Paragraph, Widget, Wrap},
};

use super::theme::{ACCENT_PRIMARY, ACCENT_SUCCESS, BG_SURFACE, TEXT_PRIMARY};

pub const COMPLETION_MESSAGE: &str =
    "You've reviewed all questions! You can now export questions that need attention.";

/// Horizontal gauge labelled "N% Complete"
pub struct ProgressBar {
    percent: u16,
}

impl ProgressBar {
    pub fn new(percent: u16) -> Self {
        Self {
            percent: percent.min(100),
        }
    }
}

impl Widget for ProgressBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Gauge::default()
            .gauge_style(Style::default().fg(ACCENT_PRIMARY).bg(BG_SURFACE))
            .percent(self.percent)
            .label(Span::styled(
                format!("{}% Complete", self.percent),
                Style::default()
                    .fg(TEXT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ))
            .render(area, buf);
    }
}

/// Success banner shown once every question has a verdict
pub struct CompletionBanner;

impl Widget for CompletionBanner {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Span::styled(
            COMPLETION_MESSAGE,
            Style::default().fg(ACCENT_SUCCESS),
        ))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(ACCENT_SUCCESS)),
        )
        .render(area, buf);
    }
}
