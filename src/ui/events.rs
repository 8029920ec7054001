use crate::review::ReviewSession;

/// Application-level events delivered over the app channel
#[derive(Debug)]
pub enum AppEvent {
    /// Questions and saved responses are ready
    SessionLoaded(Box<ReviewSession>),
    /// The startup load failed; the message is already logged
    LoadFailed(String),
}

/// Which part of the screen owns the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Waiting for the question list
    #[default]
    Loading,
    /// Reviewing: verdict keys, navigation and actions
    Normal,
    /// Typing into the comment box
    Comment,
    /// Typing an MM-DD date to jump to
    JumpToDate,
    /// A confirmation dialog is open
    Confirming,
    /// A notice dialog is open
    Notice,
}
