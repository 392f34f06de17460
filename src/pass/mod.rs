//! Password generation and strength estimation.

pub mod charset;
mod config;
mod generate;
mod password;
pub mod strength;

pub use charset::CharClass;
pub use config::{GenerationConfig, MAX_LENGTH, MIN_LENGTH};
pub use generate::{generate, generate_batch};
pub use password::Password;
pub use strength::{Strength, estimate};
