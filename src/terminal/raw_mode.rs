//! Raw mode RAII guard.

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use std::io;

/// Raw mode with a hidden cursor until dropped.
pub struct RawModeGuard {
    was_enabled: bool,
}

impl RawModeGuard {
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        let _ = execute!(io::stdout(), Hide);
        Ok(Self { was_enabled: true })
    }

    /// For line-editing prompts that need a visible caret.
    pub fn show_cursor(&self) {
        let _ = execute!(io::stdout(), Show);
    }

    /// Manually disable raw mode (also happens on drop).
    pub fn disable(&mut self) {
        if self.was_enabled {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), Show);
            self.was_enabled = false;
        }
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        self.disable();
    }
}
