mod confirmation_dialog;
mod dialog;
mod footer;
mod header;
mod key_hints;
mod notice_dialog;
mod progress;
mod question_card;
mod text_input;
pub mod theme;

pub use confirmation_dialog::{ConfirmationContext, ConfirmationDialog, ConfirmationDialogState};
pub use dialog::{DialogFrame, InstructionBar};
pub use footer::GlobalFooter;
pub use header::{ReviewHeader, APP_TITLE, HEADER_HEIGHT};
pub use key_hints::{render_key_hints, KeyHintBarStyle};
pub use notice_dialog::{NoticeDialog, NoticeDialogState, NoticeKind};
pub use progress::{CompletionBanner, ProgressBar, COMPLETION_MESSAGE};
pub use question_card::{CardFocus, QuestionCard, COMMENT_PLACEHOLDER, JUMP_PLACEHOLDER};
pub use text_input::TextInputState;
