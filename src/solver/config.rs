//! Solver configuration.

use serde::{Deserialize, Serialize};

use crate::local_search::DEFAULT_MAX_ITERATIONS;

/// Largest instance for which distances are precomputed into a matrix.
pub const DEFAULT_MATRIX_LIMIT: usize = 2048;

/// Tunable parameters of the MST + 2-opt pipeline.
///
/// Deserializes from partial JSON; missing fields take their defaults.
///
/// # Examples
///
/// ```
/// use u_tsp::solver::SolverConfig;
///
/// let config = SolverConfig::default().with_seed(42).with_max_iterations(10);
/// assert_eq!(config.seed, Some(42));
/// assert_eq!(config.max_iterations, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Cap on 2-opt passes.
    pub max_iterations: usize,
    /// Seed for MST tie-breaking; `None` derives one from the clock.
    pub seed: Option<u64>,
    /// Instances up to this size use a precomputed distance matrix.
    pub matrix_limit: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            seed: None,
            matrix_limit: DEFAULT_MATRIX_LIMIT,
        }
    }
}

impl SolverConfig {
    /// Sets the 2-opt pass cap.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Fixes the tie-breaking seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the matrix precomputation threshold.
    pub fn with_matrix_limit(mut self, matrix_limit: usize) -> Self {
        self.matrix_limit = matrix_limit;
        self
    }
}
