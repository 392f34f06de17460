//! Random integer source for password generation.
//!
//! Everything downstream asks for one thing: a uniform-ish integer in
//! `[0, max)`. Each draw consumes one 32-bit word from a cryptographic
//! generator and reduces it with `%`. For `max` that does not divide 2^32
//! the low residues are very slightly favoured; this is kept on purpose so
//! output matches the `getRandomValues() % max` distribution.

use ::rand::rngs::OsRng;
use ::rand::{CryptoRng, RngCore};

/// Source of random integers in `[0, max)`.
pub trait RandomSource {
    fn random_int(&mut self, max: usize) -> usize;
}

/// Modulo-reducing adapter over any cryptographic RNG.
pub struct Rand<R = OsRng>(R);

impl Rand<OsRng> {
    /// Operating system CSPRNG (getrandom / /dev/urandom).
    pub fn os() -> Self {
        Rand(OsRng)
    }
}

#[cfg(test)]
impl<R: RngCore + CryptoRng> Rand<R> {
    pub fn new(rng: R) -> Self {
        Rand(rng)
    }
}

impl<R: RngCore + CryptoRng> RandomSource for Rand<R> {
    #[inline]
    fn random_int(&mut self, max: usize) -> usize {
        debug_assert!(max > 0, "random_int called with empty range");
        if max == 0 {
            return 0;
        }
        self.0.next_u32() as usize % max
    }
}

/// Pick one element uniformly from a non-empty slice.
#[inline]
pub fn choice<T: Copy>(items: &[T], rng: &mut impl RandomSource) -> T {
    items[rng.random_int(items.len())]
}

/// Fisher-Yates, last index down to 1, swap with `j` in `[0, i]`.
#[inline]
pub fn shuffle<T>(items: &mut [T], rng: &mut impl RandomSource) {
    for i in (1..items.len()).rev() {
        let j = rng.random_int(i + 1);
        items.swap(i, j);
    }
}


#[cfg(test)]
mod tests {
    use super::testing::Scripted;
    use super::*;
    use ::rand::SeedableRng;
    use ::rand::rngs::StdRng;

    #[test]
    fn random_int_stays_in_range() {
        let mut rng = Rand::os();
        for max in [1, 2, 3, 7, 10, 62, 85, 1000] {
            for _ in 0..500 {
                assert!(rng.random_int(max) < max);
            }
        }
    }

    #[test]
    fn max_of_one_is_always_zero() {
        let mut rng = Rand::new(StdRng::seed_from_u64(7));
        assert!((0..100).all(|_| rng.random_int(1) == 0));
    }

    #[test]
    fn shuffle_walks_from_last_index_down() {
        let mut rng = Scripted::new(&[0, 0, 0, 0]);
        let mut items = ['a', 'b', 'c', 'd', 'e'];
        shuffle(&mut items, &mut rng);
        assert_eq!(rng.requested, vec![5, 4, 3, 2]);
        // each step swaps position i with 0
        assert_eq!(items, ['b', 'c', 'd', 'e', 'a']);
    }

    #[test]
    fn shuffle_with_self_swaps_is_identity() {
        // j == i at every step
        let mut rng = Scripted::new(&[4, 3, 2, 1]);
        let mut items = [1, 2, 3, 4, 5];
        shuffle(&mut items, &mut rng);
        assert_eq!(items, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn shuffle_keeps_all_elements() {
        let mut rng = Rand::new(StdRng::seed_from_u64(42));
        let mut items: Vec<u32> = (0..50).collect();
        shuffle(&mut items, &mut rng);
        let mut sorted = items.clone();
        sorted.sort();
        assert_eq!(sorted, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn shuffle_of_short_slices_draws_nothing() {
        let mut rng = Scripted::new(&[]);
        let mut one = ['x'];
        shuffle(&mut one, &mut rng);
        let mut none: [char; 0] = [];
        shuffle(&mut none, &mut rng);
        assert!(rng.requested.is_empty());
    }

    #[test]
    fn choice_uses_slice_length_as_range() {
        let mut rng = Scripted::new(&[12]);
        assert_eq!(choice(&['a', 'b', 'c', 'd', 'e'], &mut rng), 'c');
        assert_eq!(rng.requested, vec![5]);
    }
}
