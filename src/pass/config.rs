//! Generation configuration and its validation.

use super::charset::CharClass;
use crate::error::ConfigError;

pub const MIN_LENGTH: usize = 4;
pub const MAX_LENGTH: usize = 1024;

/// Per-call generation options. Not persisted here; see `settings`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationConfig {
    pub length: usize,
    pub upper: bool,
    pub lower: bool,
    pub digits: bool,
    pub symbols: bool,
    pub exclude_ambiguous: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            length: 16,
            upper: true,
            lower: true,
            digits: true,
            symbols: true,
            exclude_ambiguous: true,
        }
    }
}

impl GenerationConfig {
    pub fn is_enabled(&self, class: CharClass) -> bool {
        match class {
            CharClass::Upper => self.upper,
            CharClass::Lower => self.lower,
            CharClass::Digits => self.digits,
            CharClass::Symbols => self.symbols,
        }
    }

    pub fn toggle(&mut self, class: CharClass) {
        let flag = match class {
            CharClass::Upper => &mut self.upper,
            CharClass::Lower => &mut self.lower,
            CharClass::Digits => &mut self.digits,
            CharClass::Symbols => &mut self.symbols,
        };
        *flag = !*flag;
    }

    /// Enabled classes in seeding order.
    pub fn classes(&self) -> Vec<CharClass> {
        CharClass::ALL
            .into_iter()
            .filter(|c| self.is_enabled(*c))
            .collect()
    }

    /// Check the constraints, in order, and return the enabled classes.
    pub fn validate(&self) -> Result<Vec<CharClass>, ConfigError> {
        if self.length < MIN_LENGTH {
            return Err(ConfigError::BelowMinimum);
        }
        let classes = self.classes();
        if classes.is_empty() {
            return Err(ConfigError::NoCategory);
        }
        if self.length < classes.len() {
            return Err(ConfigError::FewerThanCategories(classes.len()));
        }
        if self.length > MAX_LENGTH {
            return Err(ConfigError::AboveMaximum);
        }
        Ok(classes)
    }
}
