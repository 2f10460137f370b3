//! Bounded random draws
//!
//! The simulation only ever asks for inclusive integer ranges, so that is
//! the whole interface. Tests swap in scripted sources.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

/// Source of uniform inclusive integer draws
pub trait RandomSource {
    /// Uniform draw from `low..=high`. An empty range yields `low`.
    fn next_int(&mut self, low: i32, high: i32) -> i32;

    /// Restart the sequence from `seed`
    fn reseed(&mut self, seed: u64);
}

/// RNG state wrapper for serialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    /// Draws made since the last reseed
    pub draws: u64,
}

/// Seeded PCG source (reproducible across platforms)
#[derive(Debug, Clone)]
pub struct PcgSource {
    rng: Pcg32,
    state: RngState,
}

impl PcgSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            state: RngState { seed, draws: 0 },
        }
    }

    pub fn state(&self) -> RngState {
        self.state
    }
}

impl RandomSource for PcgSource {
    fn next_int(&mut self, low: i32, high: i32) -> i32 {
        if high <= low {
            return low;
        }
        self.state.draws += 1;
        self.rng.random_range(low..=high)
    }

    fn reseed(&mut self, seed: u64) {
        *self = Self::new(seed);
    }
}

/// Replays a fixed list of values, clamped into the requested range.
///
/// Wraps around when exhausted. Useful for pinning spawn positions and
/// delays in tests.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    values: Vec<i32>,
    cursor: usize,
}

impl ScriptedSource {
    pub fn new(values: impl Into<Vec<i32>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }
}

impl RandomSource for ScriptedSource {
    fn next_int(&mut self, low: i32, high: i32) -> i32 {
        if high <= low || self.values.is_empty() {
            return low;
        }
        let v = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        v.clamp(low, high)
    }

    fn reseed(&mut self, _seed: u64) {
        self.cursor = 0;
    }
}
