//! Injectable randomness
//!
//! Spawning is the only consumer. Runs are reproducible as long as the same
//! source is fed the same sequence of ticks.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Source of the spawner's random choices
pub trait RandomSource {
    /// Uniform lane index in [0, lane_count)
    fn pick_lane(&mut self, lane_count: usize) -> usize;
    /// Uniform integer in [min, max] (inclusive)
    fn random_between(&mut self, min: i32, max: i32) -> i32;
}

/// Seeded PCG32 source
#[derive(Debug, Clone)]
pub struct SeededRandom {
    seed: u64,
    rng: Pcg32,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SeededRandom {
    fn pick_lane(&mut self, lane_count: usize) -> usize {
        if lane_count <= 1 {
            return 0;
        }
        self.rng.random_range(0..lane_count)
    }

    fn random_between(&mut self, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        self.rng.random_range(min..=max)
    }
}

/// Replays fixed sequences (test helper)
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    pub lanes: Vec<usize>,
    pub values: Vec<i32>,
    lane_cursor: usize,
    value_cursor: usize,
}

impl ScriptedRandom {
    pub fn new(lanes: Vec<usize>, values: Vec<i32>) -> Self {
        Self {
            lanes,
            values,
            lane_cursor: 0,
            value_cursor: 0,
        }
    }
}

impl RandomSource for ScriptedRandom {
    fn pick_lane(&mut self, lane_count: usize) -> usize {
        let lane = match self.lanes.get(self.lane_cursor % self.lanes.len().max(1)) {
            Some(&lane) => lane,
            None => 0,
        };
        self.lane_cursor += 1;
        lane.min(lane_count.saturating_sub(1))
    }

    fn random_between(&mut self, min: i32, max: i32) -> i32 {
        let value = match self.values.get(self.value_cursor % self.values.len().max(1)) {
            Some(&value) => value,
            None => min,
        };
        self.value_cursor += 1;
        value.clamp(min, max.max(min))
    }
}
