//! Password generation.

use log::debug;

use super::config::GenerationConfig;
use super::password::Password;
use crate::error::ConfigError;
use crate::rand::{self, Rand, RandomSource};

/// Generate a password from the OS random source.
pub fn generate(config: &GenerationConfig) -> Result<Password, ConfigError> {
    generate_with(config, &mut Rand::os())
}

/// Generate a password drawing from `rng`.
///
/// One character from each enabled class is placed first (in class order),
/// the remainder is drawn from the union of all enabled classes, and the
/// whole buffer is then shuffled so the seeded characters do not sit at
/// predictable positions.
pub fn generate_with(
    config: &GenerationConfig,
    rng: &mut impl RandomSource,
) -> Result<Password, ConfigError> {
    let classes = config.validate()?;

    let alphabets: Vec<Vec<char>> = classes
        .iter()
        .map(|c| c.alphabet(config.exclude_ambiguous))
        .collect();

    let mut chars: Vec<char> = Vec::with_capacity(config.length);
    for alphabet in &alphabets {
        chars.push(rand::choice(alphabet, rng));
    }

    let combined: Vec<char> = alphabets.concat();
    while chars.len() < config.length {
        chars.push(rand::choice(&combined, rng));
    }

    rand::shuffle(&mut chars, rng);

    debug!(
        "generated {} chars from [{}] ({}-char alphabet)",
        chars.len(),
        classes.iter().map(|c| c.name()).collect::<Vec<_>>().join(", "),
        combined.len()
    );

    let password: Password = chars.iter().copied().collect();
    zeroize::Zeroize::zeroize(&mut chars);
    Ok(password)
}

/// Generate `count` passwords with one shared random source.
pub fn generate_batch(config: &GenerationConfig, count: usize) -> Result<Vec<Password>, ConfigError> {
    let mut rng = Rand::os();
    (0..count).map(|_| generate_with(config, &mut rng)).collect()
}
