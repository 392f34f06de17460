//! Error types.

use thiserror::Error;

use crate::pass::{MAX_LENGTH, MIN_LENGTH};

/// Rejected generation configuration. Never retried: the caller must fix it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("length below minimum of {}", MIN_LENGTH)]
    BelowMinimum,

    #[error("at least one character category must be enabled")]
    NoCategory,

    #[error("length too small: minimum = {0}")]
    FewerThanCategories(usize),

    #[error("length above maximum of {}", MAX_LENGTH)]
    AboveMaximum,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("history file error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("clipboard error: {0}")]
    Clipboard(String),

    #[error("no history entry #{0}")]
    NoEntry(usize),
}

pub type Result<T> = std::result::Result<T, Error>;
