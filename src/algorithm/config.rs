//! # Solver configuration
use crate::algorithm::driver::DEFAULT_MAX_ITERATIONS;

/// Limits that apply to a single solve.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct SolverConfig {
    /// Maximum number of pivots, checked before each pivot.
    pub max_iterations: usize,
    /// Number of consecutive pivots without change in objective value after which entering
    /// selection falls back to Bland's rule.
    pub degenerate_pivot_limit: usize,
}

impl SolverConfig {
    /// Replace the pivot limit.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Replace the degenerate streak length that triggers Bland's rule.
    #[must_use]
    pub fn with_degenerate_pivot_limit(mut self, degenerate_pivot_limit: usize) -> Self {
        self.degenerate_pivot_limit = degenerate_pivot_limit;
        self
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            degenerate_pivot_limit: 16,
        }
    }
}
