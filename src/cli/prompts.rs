//! Centralized warning and status messages for CLI output.

use super::quiet;
use crate::terminal::{GREEN, RED, RESET, YELLOW};

/// Print a warning message to stderr (yellow) - suppressed in quiet mode
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Print an error message to stderr (red) - NOT suppressed (errors are always shown)
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

/// Print a confirmation to stderr (green) - suppressed in quiet mode
pub fn info(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{GREEN}{msg}{RESET}");
    }
}

pub fn clipboard_copied(count: usize) {
    if count == 1 {
        info("*** -COPIED TO CLIPBOARD- ***");
    } else {
        info(&format!("*** -{count} PASSWORDS COPIED TO CLIPBOARD- ***"));
    }
}

pub fn clipboard_fallback(err: &str) {
    warn(&format!("Clipboard unavailable ({err}); printing instead."));
}

pub fn history_failed(err: &str) {
    warn(&format!("Warning: could not update history: {err}"));
}
