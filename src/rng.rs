use std::f64::consts::TAU;

use rand::prelude::*;

/// Source of bounded random scalars for cycle randomization and dot jitter.
///
/// The production source is entropy-seeded and makes no reproducibility
/// promise; tests inject a seeded instance instead of relying on a global
/// generator.
pub trait RandomSource {
    /// Uniform float in `[lo, hi)`. Degenerate ranges (`hi <= lo`) return `lo`.
    fn range_f64(&mut self, lo: f64, hi: f64) -> f64;

    /// Uniform integer in `[lo, hi)`. Degenerate ranges return `lo`.
    fn range_u32(&mut self, lo: u32, hi: u32) -> u32;

    /// Uniform angle in `[0, 2π)`.
    fn unit_angle(&mut self) -> f64 {
        self.range_f64(0.0, TAU)
    }
}

/// `StdRng`-backed [`RandomSource`].
pub struct EntropyRandom {
    rng: StdRng,
}

impl EntropyRandom {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic stream for tests.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for EntropyRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for EntropyRandom {
    fn range_f64(&mut self, lo: f64, hi: f64) -> f64 {
        if !(hi > lo) {
            return lo;
        }
        self.rng.gen_range(lo..hi)
    }

    fn range_u32(&mut self, lo: u32, hi: u32) -> u32 {
        if hi <= lo {
            return lo;
        }
        self.rng.gen_range(lo..hi)
    }
}
