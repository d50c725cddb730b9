//! Deterministic simulation RNG.
//!
//! # Determinism strategy
//!
//! The whole workload for a run is sampled once, up front, from a single
//! seeded `SmallRng`.  The same seed always produces the same arrival
//! instants, service durations, and priority assignment — and since the
//! engine itself is deterministic (composite time/sequence ordering in the
//! calendar), the same seed reproduces the entire run.

use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Seeded RNG for workload sampling.
///
/// A thin wrapper over `SmallRng` so the rest of the workspace never touches
/// thread-local or entropy-seeded generators by accident.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand`/`rand_distr`
    /// distribution types (`rng.inner().sample(...)` etc.).
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        use rand::Rng;
        self.0.gen_range(range)
    }

    /// Shuffle a mutable slice in-place (Fisher-Yates).
    #[inline]
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.0);
    }
}
