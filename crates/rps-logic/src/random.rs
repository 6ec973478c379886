//! Seeded random source for the computer opponent.
//!
//! A thin wrapper over `rand`'s `SmallRng` so the seed is the only thing a
//! caller has to supply to get a reproducible opponent.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Seeded random number generator
///
/// Deterministic: same seed = same sequence
#[derive(Clone, Debug)]
pub struct SeededRng {
    inner: SmallRng,
}

impl SeededRng {
    pub fn from_seed(seed: u64) -> Self {
        Self { inner: SmallRng::seed_from_u64(seed) }
    }

    /// Create an RNG seeded from process entropy
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_entropy() -> Self {
        Self::from_seed(rand::random::<u64>())
    }

    /// Create an RNG seeded from the browser's `Math.random`
    #[cfg(all(target_arch = "wasm32", feature = "wasm"))]
    pub fn from_entropy() -> Self {
        let hi = (js_sys::Math::random() * u32::MAX as f64) as u64;
        let lo = (js_sys::Math::random() * u32::MAX as f64) as u64;
        Self::from_seed((hi << 32) | lo)
    }

    pub fn next_u64(&mut self) -> u64 {
        self.inner.random()
    }

    /// Unbiased value in [0, max); zero when `max` is zero
    pub fn next_range(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        self.inner.random_range(0..max)
    }
}
