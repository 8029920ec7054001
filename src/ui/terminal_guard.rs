//! Terminal state guard for guaranteed cleanup.
//!
//! Restores the terminal when the review screen exits, whether normally,
//! via early return, or panic.

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

/// Guard that restores terminal state when dropped.
pub struct TerminalGuard {
    active: bool,
}

impl TerminalGuard {
    /// Enter raw mode and the alternate screen.
    pub fn enter() -> anyhow::Result<Self> {
        enable_raw_mode()?;
        let mut guard = Self { active: true };
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            guard.cleanup()?;
            return Err(e.into());
        }
        Ok(guard)
    }

    /// Perform manual cleanup. After calling this, Drop becomes a no-op.
    pub fn cleanup(&mut self) -> anyhow::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        restore_terminal()
    }
}

fn restore_terminal() -> anyhow::Result<()> {
    disable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, LeaveAlternateScreen)?;
    stdout.flush()?;
    Ok(())
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.active {
            if let Err(e) = restore_terminal() {
                tracing::debug!(error = %e, "Terminal cleanup failed in Drop");
            }
        }
    }
}

/// Install a panic hook that restores terminal state before printing the panic message.
///
/// Call this before any terminal setup.
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        if let Err(e) = disable_raw_mode() {
            tracing::debug!(error = %e, "Failed to disable raw mode in panic hook");
        }
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, LeaveAlternateScreen) {
            tracing::debug!(error = %e, "Failed to restore terminal screen in panic hook");
        }
        if let Err(e) = stdout.flush() {
            tracing::debug!(error = %e, "Failed to flush stdout after panic cleanup");
        }

        original_hook(panic_info);
    }));
}
