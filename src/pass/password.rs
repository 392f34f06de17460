//! Generated password value.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

/// An immutable password. The backing buffer is wiped when dropped.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Password(String);

impl Password {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    /// Same width, every character replaced by a bullet.
    pub fn masked(&self) -> String {
        "\u{2022}".repeat(self.len())
    }
}

impl From<String> for Password {
    fn from(s: String) -> Self {
        Password(s)
    }
}

impl From<&str> for Password {
    fn from(s: &str) -> Self {
        Password(s.to_string())
    }
}

impl FromIterator<char> for Password {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Password(iter.into_iter().collect())
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Keep secrets out of debug output and logs.
impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Password({} chars)", self.len())
    }
}
