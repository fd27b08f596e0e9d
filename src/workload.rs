//! Random workload generation.
//!
//! Produces reproducible process lists for exercising the engines on
//! inputs nobody wrote by hand. The same seed always yields the same
//! workload.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::{ProcessSpec, Tick};

/// Workload shape.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorkloadConfig {
    /// Number of processes to generate.
    pub process_count: usize,
    /// Latest possible arrival tick (inclusive).
    pub max_arrival: Tick,
    /// Smallest burst (inclusive, at least 1).
    pub min_burst: Tick,
    /// Largest burst (inclusive).
    pub max_burst: Tick,
    /// Random seed.
    pub seed: u64,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            process_count: 5,
            max_arrival: 10,
            min_burst: 1,
            max_burst: 10,
            seed: 12345,
        }
    }
}

impl WorkloadConfig {
    /// Set the number of processes.
    pub fn with_process_count(mut self, count: usize) -> Self {
        self.process_count = count;
        self
    }

    /// Set the latest arrival tick.
    pub fn with_max_arrival(mut self, max_arrival: Tick) -> Self {
        self.max_arrival = max_arrival;
        self
    }

    /// Set the burst range. Bounds are clamped to `1..=max`.
    pub fn with_burst_range(mut self, min: Tick, max: Tick) -> Self {
        self.min_burst = min.max(1);
        self.max_burst = max.max(self.min_burst);
        self
    }

    /// Set the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Generates a process list named `P01`, `P02`, ... in declaration order.
pub fn generate(config: &WorkloadConfig) -> Vec<ProcessSpec> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let min_burst = config.min_burst.max(1);
    let max_burst = config.max_burst.max(min_burst);
    let width = config.process_count.to_string().len().max(2);

    (1..=config.process_count)
        .map(|n| {
            ProcessSpec::new(
                format!("P{n:0width$}"),
                rng.random_range(0..=config.max_arrival),
                rng.random_range(min_burst..=max_burst),
            )
        })
        .collect()
}
