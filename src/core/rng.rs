//! Seeded random streams for dice, strategy coin flips and workers.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Forkable**: Each tournament game draws from its own fork of the worker stream
//! - **Indexed streams**: Independent sequences per tournament worker
//!
//! ## Worker Usage
//!
//! ```
//! use pig_tournament::core::GameRng;
//!
//! let root = GameRng::new(42);
//!
//! // Each worker gets a private stream keyed by its index
//! let mut worker0 = root.for_stream(0);
//! let mut worker1 = root.for_stream(1);
//! assert_ne!(worker0.seed(), worker1.seed());
//!
//! // Streams are reproducible from the same root seed
//! let mut again = GameRng::new(42).for_stream(0);
//! assert_eq!(worker0.roll_die(), again.roll_die());
//! # let _ = worker1.roll_die();
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const STREAM_MIX: u64 = 0x9E37_79B9_7F4A_7C15;

/// Deterministic RNG with forking and indexed streams.
///
/// Uses ChaCha8 for speed while keeping good statistical quality. A `GameRng`
/// is never shared between threads: workers derive their own with
/// [`GameRng::for_stream`].
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Create an RNG seeded from operating system entropy.
    ///
    /// Runs built this way are not reproducible.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(STREAM_MIX));
        Self::new(fork_seed)
    }

    /// Create an independent stream for a numbered consumer.
    ///
    /// Does not advance `self`, so the result depends only on the seed and
    /// `index`, never on how many other streams were handed out first.
    #[must_use]
    pub fn for_stream(&self, index: u64) -> Self {
        // splitmix64 finalizer over seed and index
        let mut z = self.seed ^ index.wrapping_add(1).wrapping_mul(STREAM_MIX);
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        Self::new(z ^ (z >> 31))
    }

    /// Roll a six-sided die, uniform in 1..=6.
    pub fn roll_die(&mut self) -> u32 {
        self.inner.gen_range(1..=6)
    }

    /// Generate a random boolean with given probability of true.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability)
    }

    /// Fair coin flip.
    pub fn coin_flip(&mut self) -> bool {
        self.gen_bool(0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.roll_die(), rng2.roll_die());
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..20).map(|_| rng1.roll_die()).collect();
        let seq2: Vec<_> = (0..20).map(|_| rng2.roll_die()).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_die_range_and_faces() {
        let mut rng = GameRng::new(7);
        let mut seen = [false; 7];

        for _ in 0..1000 {
            let face = rng.roll_die();
            assert!((1..=6).contains(&face));
            seen[face as usize] = true;
        }

        assert!(seen[1..].iter().all(|&s| s), "every face should appear");
    }

    #[test]
    fn test_fork_produces_different_sequence() {
        let mut rng = GameRng::new(42);
        let mut forked = rng.fork();

        let seq1: Vec<_> = (0..20).map(|_| rng.roll_die()).collect();
        let seq2: Vec<_> = (0..20).map(|_| forked.roll_die()).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_fork_is_deterministic() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        let forked1 = rng1.fork();
        let forked2 = rng2.fork();

        assert_eq!(forked1.seed, forked2.seed);
        assert_eq!(rng1.fork_counter, 1);
    }

    #[test]
    fn test_streams_are_independent() {
        let root = GameRng::new(42);
        let seeds: Vec<_> = (0..64).map(|i| root.for_stream(i).seed()).collect();

        let mut unique = seeds.clone();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(unique.len(), seeds.len());
    }

    #[test]
    fn test_stream_ignores_fork_history() {
        let mut root = GameRng::new(9);
        let before = root.for_stream(3).seed();
        let _ = root.fork();
        let _ = root.roll_die();

        assert_eq!(root.for_stream(3).seed(), before);
    }

    #[test]
    fn test_coin_flip_is_roughly_fair() {
        let mut rng = GameRng::new(11);
        let heads = (0..10_000).filter(|_| rng.coin_flip()).count();

        assert!((4_700..=5_300).contains(&heads), "heads = {}", heads);
    }
}
