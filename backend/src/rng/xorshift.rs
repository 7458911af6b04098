//! xorshift64* random number generator
//!
//! Fast, deterministic PRNG used to shuffle candidate receiver sequences.
//!
//! # Algorithm
//!
//! xorshift64* is a variant of xorshift that passes TestU01's BigCrush
//! statistical tests. It uses 64-bit state and produces 64-bit output.
//! It is not cryptographically strong, and a draw does not need it to be.
//!
//! # Determinism
//!
//! Same seed → same sequence of random numbers → same draw. This is what
//! makes a [`DrawRecord`](crate::record::DrawRecord) replayable.

use serde::{Deserialize, Serialize};

/// Deterministic random number generator using xorshift64*
///
/// # Example
/// ```
/// use secret_santa_core_rs::RngManager;
///
/// let mut rng = RngManager::new(12345);
/// let value = rng.next();
/// let index = rng.index(10); // [0, 10)
/// assert!(index < 10);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngManager {
    /// Internal state (64-bit)
    state: u64,
}

impl RngManager {
    /// Create a new RNG with given seed
    ///
    /// A zero seed is replaced by 1 (xorshift never leaves the zero state).
    pub fn new(seed: u64) -> Self {
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u64 value
    pub fn next(&mut self) -> u64 {
        // xorshift64* algorithm
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D)
    }

    /// Generate a uniform index in `[0, bound)`
    ///
    /// Draws falling in the incomplete top bucket of the u64 range are
    /// rejected, so every index is equally likely.
    ///
    /// # Panics
    /// Panics if bound == 0
    pub fn index(&mut self, bound: usize) -> usize {
        assert!(bound > 0, "bound must be positive");

        let bound = bound as u64;
        let zone = u64::MAX - (u64::MAX % bound);
        loop {
            let value = self.next();
            if value < zone {
                return (value % bound) as usize;
            }
        }
    }

    /// Shuffle a slice in place (Fisher–Yates)
    ///
    /// Every permutation of `items` is equally likely.
    ///
    /// # Example
    /// ```
    /// use secret_santa_core_rs::RngManager;
    ///
    /// let mut rng = RngManager::new(7);
    /// let mut values = vec![1, 2, 3, 4];
    /// rng.shuffle(&mut values);
    ///
    /// values.sort();
    /// assert_eq!(values, vec![1, 2, 3, 4]);
    /// ```
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.index(i + 1);
            items.swap(i, j);
        }
    }

    /// Get current RNG state (for replay)
    ///
    /// # Example
    /// ```
    /// use secret_santa_core_rs::RngManager;
    ///
    /// let rng = RngManager::new(12345);
    /// let state = rng.get_state();
    ///
    /// // Later, can recreate RNG from this state
    /// let rng2 = RngManager::new(state);
    /// ```
    pub fn get_state(&self) -> u64 {
        self.state
    }
}
