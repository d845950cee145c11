//! Deterministic random number generation for deck shuffling.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces the same sequence of decks
//! - **Seedable from entropy**: Normal play gets a fresh board every run
//!
//! ## Usage
//!
//! ```
//! use memory_match::core::GameRng;
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//!
//! let mut left = vec![1, 2, 3, 4, 5, 6];
//! let mut right = left.clone();
//! a.shuffle(&mut left);
//! b.shuffle(&mut right);
//!
//! assert_eq!(left, right);
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG backing every shuffle in a game session.
///
/// Uses ChaCha8 for speed while keeping a uniform shuffle.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a new RNG seeded from OS entropy.
    ///
    /// The chosen seed is still recorded so a session can be replayed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Shuffle a slice in place (uniform Fisher-Yates).
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..20 {
            let mut a: Vec<u32> = (0..16).collect();
            let mut b = a.clone();
            rng1.shuffle(&mut a);
            rng2.shuffle(&mut b);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let mut a: Vec<u32> = (0..16).collect();
        let mut b = a.clone();
        rng1.shuffle(&mut a);
        rng2.shuffle(&mut b);

        assert_ne!(a, b);
    }

    #[test]
    fn test_shuffle_preserves_elements() {
        let mut rng = GameRng::new(42);
        let mut data = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let original = data.clone();

        rng.shuffle(&mut data);

        // Same elements, different order (very likely)
        assert_ne!(data, original);

        data.sort();
        assert_eq!(data, original);
    }

    #[test]
    fn test_successive_shuffles_differ() {
        let mut rng = GameRng::new(7);
        let mut a: Vec<u32> = (0..16).collect();
        let mut b = a.clone();

        rng.shuffle(&mut a);
        rng.shuffle(&mut b);

        assert_ne!(a, b);
    }

    #[test]
    fn test_seed_is_recorded() {
        assert_eq!(GameRng::new(99).seed(), 99);

        let rng = GameRng::from_entropy();
        let mut replay = GameRng::new(rng.seed());
        let mut original = rng.clone();

        let mut a: Vec<u32> = (0..8).collect();
        let mut b = a.clone();
        original.shuffle(&mut a);
        replay.shuffle(&mut b);
        assert_eq!(a, b);
    }
}
