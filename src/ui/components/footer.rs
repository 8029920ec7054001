use ratatui::{buffer::Buffer, layout::Rect};

use super::key_hints::{render_key_hints, KeyHintBarStyle};
use super::theme::{FOOTER_BG, KEY_HINT_BG};
use crate::ui::events::InputMode;

/// Footer showing keyboard shortcuts for the active input mode
pub struct GlobalFooter {
    hints: Vec<(&'static str, &'static str)>,
}

impl GlobalFooter {
    /// Footer for `mode`. Export is only offered once the review is complete.
    pub fn for_mode(mode: InputMode, complete: bool) -> Self {
        let hints = match mode {
            InputMode::Loading => vec![("q", "quit")],
            InputMode::Normal => {
                let mut hints = vec![
                    ("y/n", "vote"),
                    ("←/→", "move"),
                    ("c", "comment"),
                    ("g", "jump"),
                    ("u", "unanswered"),
                    ("R", "reset"),
                ];
                if complete {
                    hints.push(("x", "export"));
                }
                hints.push(("q", "quit"));
                hints
            }
            InputMode::Comment => vec![("enter/esc", "done"), ("C-w", "delete word")],
            InputMode::JumpToDate => vec![("enter", "jump"), ("esc", "cancel")],
            InputMode::Confirming => vec![("←/→", "select"), ("enter", "confirm")],
            InputMode::Notice => vec![("enter/esc", "dismiss")],
        };
        Self { hints }
    }

    pub fn hints(&self) -> &[(&'static str, &'static str)] {
        &self.hints
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        render_key_hints(
            area,
            buf,
            &self.hints,
            KeyHintBarStyle::footer_bar(KEY_HINT_BG, FOOTER_BG),
        );
    }
}
