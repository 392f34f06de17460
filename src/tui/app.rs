//! Interactive screen state and key actions.

use log::{debug, warn};

use crate::clipboard::Clipboard;
use crate::history::{History, HistoryStore};
use crate::pass::{self, CharClass, MAX_LENGTH, Password, Strength};
use crate::settings::Settings;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Info(String),
    Error(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Generate,
    Copy,
    ToggleMask,
    Toggle(CharClass),
    ToggleAmbiguous,
    Longer,
    Shorter,
    /// Prompt for a length; handled by the event loop.
    EnterLength,
    /// Zero-based history slot.
    UseHistory(usize),
    ClearHistory,
    Save,
    Help,
    Quit,
}

pub use LoopAction::*;
pub enum LoopAction {
    Break,
    Continue,
}

pub struct App<S: HistoryStore, C: Clipboard> {
    pub settings: Settings,
    pub history: History<S>,
    pub current: Option<Password>,
    pub status: Option<Status>,
    pub show_help: bool,
    /// Shown in clear despite `masked`, after a failed copy.
    pub revealed: bool,
    clipboard: C,
}

impl<S: HistoryStore, C: Clipboard> App<S, C> {
    pub fn new(settings: Settings, history: History<S>, clipboard: C) -> Self {
        Self {
            settings,
            history,
            current: None,
            status: None,
            show_help: false,
            revealed: false,
            clipboard,
        }
    }

    pub fn strength(&self) -> Strength {
        pass::estimate(self.current.as_ref().map_or("", Password::as_str))
    }

    /// Current password as it should be displayed.
    pub fn display_password(&self) -> Option<String> {
        self.current.as_ref().map(|p| {
            if self.settings.masked && !self.revealed {
                p.masked()
            } else {
                p.to_string()
            }
        })
    }

    pub fn set_length(&mut self, length: usize) {
        self.settings.config.length = length.clamp(1, MAX_LENGTH);
    }

    pub fn apply(&mut self, action: Action) -> LoopAction {
        self.show_help = false;
        match action {
            Action::Generate => self.generate(),
            Action::Copy => self.copy(),
            Action::ToggleMask => {
                self.settings.masked = !self.settings.masked;
                self.revealed = false;
            }
            Action::Toggle(class) => self.settings.config.toggle(class),
            Action::ToggleAmbiguous => {
                self.settings.config.exclude_ambiguous = !self.settings.config.exclude_ambiguous;
            }
            Action::Longer => self.set_length(self.settings.config.length + 1),
            Action::Shorter => self.set_length(self.settings.config.length.saturating_sub(1)),
            Action::EnterLength => {}
            Action::UseHistory(index) => self.use_history(index),
            Action::ClearHistory => match self.history.clear() {
                Ok(()) => self.info("History cleared."),
                Err(e) => self.error(format!("Could not clear history: {e}")),
            },
            Action::Save => match self.settings.save_to_file() {
                Ok(()) => self.info("Settings saved."),
                Err(e) => self.error(format!("Error saving settings: {e}")),
            },
            Action::Help => self.show_help = true,
            Action::Quit => return Break,
        }
        Continue
    }

    fn generate(&mut self) {
        match pass::generate(&self.settings.config) {
            Ok(p) => {
                self.revealed = false;
                let recorded = if self.settings.keep_history {
                    self.history.push(p.as_str())
                } else {
                    Ok(())
                };
                self.current = Some(p);
                match recorded {
                    Ok(()) => self.info("Password generated."),
                    Err(e) => {
                        warn!("history update failed: {}", e);
                        self.error(format!("Password generated; history not saved: {e}"));
                    }
                }
            }
            Err(e) => {
                debug!("rejected config {:?}: {}", self.settings.config, e);
                self.error(e.to_string());
            }
        }
    }

    fn copy(&mut self) {
        let Some(p) = self.current.as_ref() else {
            self.error("Generate a password first.");
            return;
        };
        match self.clipboard.copy(p.as_str()) {
            Ok(()) => self.info("Copied to clipboard."),
            Err(e) => {
                self.revealed = true;
                self.error(format!("{e}; password shown instead."));
            }
        }
    }

    fn use_history(&mut self, index: usize) {
        match self.history.get(index) {
            Some(entry) => {
                self.current = Some(Password::from(entry));
                self.revealed = false;
                self.info("Password restored from history.");
            }
            None => self.error(format!("No history entry #{}.", index + 1)),
        }
    }

    fn info(&mut self, msg: impl Into<String>) {
        self.status = Some(Status::Info(msg.into()));
    }

    fn error(&mut self, msg: impl Into<String>) {
        self.status = Some(Status::Error(msg.into()));
    }
}
