//! Random source abstraction for the randomized decomposition.
//!
//! All randomness in the engine flows through [`RandomSource`] so callers
//! control the generator: production hands in an OS-seeded `StdRng`, tests a
//! seeded one (same seed, same decomposition) or a mock source.

use rand::Rng;

/// A source of uniformly distributed integers.
pub trait RandomSource {
    /// Returns a uniformly distributed integer in `[0, max]` inclusive.
    fn uniform_inclusive(&mut self, max: u64) -> u64;
}

impl<R: Rng> RandomSource for R {
    fn uniform_inclusive(&mut self, max: u64) -> u64 {
        self.random_range(0..=max)
    }
}
