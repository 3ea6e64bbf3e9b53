//! Deterministic random number generation for deck layout.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces the identical deck
//! - **Uniform**: Shuffles are Fisher-Yates, so every permutation is equally likely
//! - **Seed capture**: An entropy-seeded RNG still reports its seed, so any
//!   dealt layout can be reproduced
//!
//! ```
//! use rust_memo::core::GameRng;
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//!
//! let mut left = vec![1, 2, 3, 4, 5, 6];
//! let mut right = left.clone();
//! a.shuffle(&mut left);
//! b.shuffle(&mut right);
//! assert_eq!(left, right);
//! ```

use rand::seq::{index, SliceRandom};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG used to deal decks.
///
/// Uses ChaCha8 for speed while keeping high quality randomness.
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

    /// Create an RNG from a fresh OS-provided seed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }

    /// Pick `amount` distinct indices from `0..pool`, in random order.
    ///
    /// Panics if `amount > pool`; callers validate sizes first.
    pub fn sample_distinct(&mut self, pool: usize, amount: usize) -> Vec<usize> {
        index::sample(&mut self.inner, pool, amount).into_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        assert_eq!(rng1.sample_distinct(30, 10), rng2.sample_distinct(30, 10));
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let mut seq1: Vec<u32> = (0..20).collect();
        let mut seq2 = seq1.clone();
        rng1.shuffle(&mut seq1);
        rng2.shuffle(&mut seq2);

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_shuffle() {
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
    fn test_sample_distinct() {
        let mut rng = GameRng::new(7);
        let mut picked = rng.sample_distinct(15, 15);

        picked.sort();
        assert_eq!(picked, (0..15).collect::<Vec<_>>());

        let few = rng.sample_distinct(15, 3);
        assert_eq!(few.len(), 3);
        assert!(few.iter().all(|&i| i < 15));
    }

    #[test]
    fn test_entropy_reports_seed() {
        let rng = GameRng::from_entropy();
        let mut replay = GameRng::new(rng.seed());
        let mut original = rng.clone();

        assert_eq!(original.sample_distinct(100, 5), replay.sample_distinct(100, 5));
    }
}
