//! Configuration parameters for the solving engine.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Safe ceiling on improvement sweeps when no explicit limit is set.
pub const DEFAULT_MAX_ITERATIONS: u64 = 1_000_000;

/// Tuning knobs for a solve call.
///
/// All fields are pure tuning: they affect how close the result gets to a
/// local optimum and how long the solve may run, never its validity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Maximum number of improvement sweeps per start node.
    pub max_iterations: u64,
    /// Optional wall-clock limit for the whole solve.
    pub time_limit: Option<Duration>,
    /// Node the nearest-neighbor construction starts from.
    pub start_node: usize,
    /// Number of independent start nodes to solve in parallel; the shortest
    /// result wins. Values of 0 and 1 both mean a single start.
    pub multi_start: usize,
    /// Seed for sampling the additional multi-start nodes.
    pub seed: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            time_limit: None,
            start_node: 0,
            multi_start: 1,
            seed: 42,
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Config::default()
    }

    /// Set the maximum number of improvement sweeps.
    pub fn with_max_iterations(mut self, iterations: u64) -> Self {
        self.max_iterations = iterations;
        self
    }

    /// Set the time limit.
    pub fn with_time_limit(mut self, duration: Duration) -> Self {
        self.time_limit = Some(duration);
        self
    }

    /// Set the construction start node.
    pub fn with_start_node(mut self, node: usize) -> Self {
        self.start_node = node;
        self
    }

    /// Set the number of parallel start nodes.
    pub fn with_multi_start(mut self, starts: usize) -> Self {
        self.multi_start = starts;
        self
    }

    /// Set the seed for multi-start sampling.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
