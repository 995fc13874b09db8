//! Deterministic, injectable random source.
//!
//! # Determinism strategy
//!
//! Every run owns exactly one `SimRng` seeded from `AbmConfig::seed`.  All
//! draws (initial placement, movement, infection, resolution) come from this
//! one stream in a fixed order, so the same seed always reproduces the same
//! time series.  Nothing reads a process-wide generator, which lets several
//! runs execute side by side without sharing state.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::Direction;

/// Simulation-level RNG.
///
/// Used only in single-threaded contexts.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// One uniform draw in `[0, 1)`.
    ///
    /// The transition rules compare a single draw against more than one
    /// threshold, so they need the raw value rather than `gen_bool`.
    #[inline]
    pub fn uniform(&mut self) -> f64 {
        self.0.r#gen::<f64>()
    }

    /// `true` with probability `p`: one uniform draw compared with `< p`.
    #[inline]
    pub fn chance(&mut self, p: f64) -> bool {
        self.uniform() < p
    }

    /// One of the four unit steps, uniformly.
    #[inline]
    pub fn direction(&mut self) -> Direction {
        Direction::ALL[self.0.gen_range(0..Direction::ALL.len())]
    }
}
