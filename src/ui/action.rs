//! Actions that can be triggered from the review screen
//!
//! Keys are only mapped to actions in [`InputMode::Normal`]; text entry modes
//! consume keys directly.
//!
//! [`InputMode::Normal`]: crate::ui::InputMode::Normal

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Quit,
    Like,
    Dislike,
    PreviousQuestion,
    NextQuestion,
    /// Focus the comment box
    EditComment,
    /// Focus the MM-DD jump box
    JumpToDate,
    NextUnanswered,
    /// Ask before clearing all responses
    ResetProgress,
    Export,
}

impl Action {
    /// Map a key pressed in normal mode
    pub fn from_key(key: &KeyEvent) -> Option<Self> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => Some(Action::Quit),
                _ => None,
            };
        }

        match key.code {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('y') => Some(Action::Like),
            KeyCode::Char('n') => Some(Action::Dislike),
            KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('p') => {
                Some(Action::PreviousQuestion)
            }
            KeyCode::Right | KeyCode::Char('l') => Some(Action::NextQuestion),
            KeyCode::Char('c') | KeyCode::Char('i') | KeyCode::Enter => Some(Action::EditComment),
            KeyCode::Char('g') | KeyCode::Char('/') => Some(Action::JumpToDate),
            KeyCode::Char('u') => Some(Action::NextUnanswered),
            KeyCode::Char('R') => Some(Action::ResetProgress),
            KeyCode::Char('x') => Some(Action::Export),
            _ => None,
        }
    }
}
