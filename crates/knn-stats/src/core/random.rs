//! Reproducible random streams.

use rand::{rngs::StdRng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Produces independent, reproducible random streams.
///
/// A factory is created from a fixed seed, or from a seed drawn once from
/// entropy. In both cases the seed is kept, so that a run can be reproduced by
/// threading [`RandomFactory::seed`] back into a new factory. Every stream is
/// private to its consumer; no random state is shared between threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandomFactory {
    /// The seed from which all streams are derived.
    seed: u64,
}

impl Default for RandomFactory {
    fn default() -> Self {
        Self::new(None)
    }
}

impl RandomFactory {
    /// Creates a new `RandomFactory` with the given seed, or with a seed drawn
    /// from entropy if `seed` is `None`.
    #[must_use]
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(rand::random);
        Self { seed }
    }

    /// Creates a new `RandomFactory` with a fixed seed.
    #[must_use]
    pub const fn seeded(seed: u64) -> Self {
        Self { seed }
    }

    /// Returns the seed of the factory.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the base random stream of the factory.
    #[must_use]
    pub fn stream(&self) -> StdRng {
        StdRng::seed_from_u64(self.seed)
    }

    /// Returns the random stream for the `index`-th independent consumer,
    /// e.g. one repetition of a Monte-Carlo estimate.
    ///
    /// The stream depends only on the seed and on `index`, so consumers may
    /// run in any order or concurrently. Distinct `(seed, index)` pairs give
    /// distinct streams.
    #[must_use]
    pub fn stream_for(&self, index: u64) -> StdRng {
        let mut seed = <StdRng as SeedableRng>::Seed::default();
        seed[..8].copy_from_slice(&self.seed.to_le_bytes());
        seed[8..16].copy_from_slice(&index.to_le_bytes());
        StdRng::from_seed(seed)
    }
}
