//! Character classes used for password generation.

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()-_=+[]{};:,.?/";

/// Characters easily confused with one another in common fonts.
pub const AMBIGUOUS: &[char] = &['O', '0', 'I', 'l', '1', '|', '`', '\'', '"', '\\'];

/// One semantic category of characters. Declaration order is the order
/// categories are seeded into a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Upper,
    Lower,
    Digits,
    Symbols,
}

impl CharClass {
    pub const ALL: [CharClass; 4] = [
        CharClass::Upper,
        CharClass::Lower,
        CharClass::Digits,
        CharClass::Symbols,
    ];

    fn base(self) -> &'static str {
        match self {
            CharClass::Upper => UPPERCASE,
            CharClass::Lower => LOWERCASE,
            CharClass::Digits => DIGITS,
            CharClass::Symbols => SYMBOLS,
        }
    }

    /// Characters of this class, with ambiguous ones removed on request.
    pub fn alphabet(self, exclude_ambiguous: bool) -> Vec<char> {
        self.base()
            .chars()
            .filter(|c| !exclude_ambiguous || !is_ambiguous(*c))
            .collect()
    }

    pub fn name(self) -> &'static str {
        match self {
            CharClass::Upper => "uppercase",
            CharClass::Lower => "lowercase",
            CharClass::Digits => "digits",
            CharClass::Symbols => "symbols",
        }
    }
}

#[inline]
pub fn is_ambiguous(c: char) -> bool {
    AMBIGUOUS.contains(&c)
}
