//! Title and review instructions shown above the question card

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use super::theme::{ACCENT_PRIMARY, BORDER_DEFAULT, TEXT_MUTED, TEXT_PRIMARY, TEXT_SECONDARY};

pub const APP_TITLE: &str = "Now & Then Question Review Tool";

const INSTRUCTIONS: [&str; 5] = [
    "1. Read each question",
    "2. Add optional comments for suggestions or concerns",
    "3. Press 'y' (Like) if the question is good as is",
    "4. Press 'n' (Dislike) if the question needs improvement",
    "5. Once you have reviewed all the questions, export your feedback and send it on",
];

const SEASONAL_NOTE: &str =
    "Keep in mind that some of the questions are relevant to the time of year they are being asked.";

const NAVIGATION_TIP: &str = "Press 'g' to jump to any date using the MM-DD format, or 'u' to find questions you haven't reviewed yet. Your progress is saved automatically, so you can return later to continue where you left off.";

/// Rows the header needs at full size
pub const HEADER_HEIGHT: u16 = 14;

pub struct ReviewHeader;

impl Widget for ReviewHeader {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = vec![
            Line::from(Span::styled(
                APP_TITLE,
                Style::default()
                    .fg(ACCENT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            Line::from(Span::styled(
                "How to Review:",
                Style::default()
                    .fg(TEXT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )),
        ];
        lines.extend(
            INSTRUCTIONS
                .iter()
                .map(|step| Line::from(Span::styled(*step, Style::default().fg(TEXT_SECONDARY)))),
        );
        lines.push(Line::from(Span::styled(
            SEASONAL_NOTE,
            Style::default().fg(TEXT_SECONDARY),
        )));
        lines.push(Line::from(Span::styled(
            NAVIGATION_TIP,
            Style::default().fg(TEXT_MUTED),
        )));

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::BOTTOM)
                    .border_style(Style::default().fg(BORDER_DEFAULT)),
            )
            .render(area, buf);
    }
}
