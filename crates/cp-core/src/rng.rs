//! Deterministic seeded RNG wrapper.
//!
//! # Determinism strategy
//!
//! All synthetic randomness in clearpath (currently only pollution
//! annotation) flows through a `SeededRng` value that the caller constructs
//! from an explicit seed and passes down.  There is no process-global random
//! state: two runs with the same seed and the same network always produce
//! identical pollution assignments, regardless of any other randomness the
//! surrounding program might use.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Caller-owned deterministic RNG.
///
/// Construct one per session from the configured seed and hand it `&mut` to
/// whichever component needs randomness.
pub struct SeededRng(SmallRng);

impl SeededRng {
    pub fn new(seed: u64) -> Self {
        SeededRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types
    /// (`rng.inner().sample(...)`, `rng.inner().gen_range(...)`, etc.)
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}
