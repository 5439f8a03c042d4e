//! # Algorithms
//!
//! The Simplex method over a dense, exact tableau: the pivot engine, the strategies that drive
//! it and the solver that records every step.
use thiserror::Error;

use crate::algorithm::strategy::StrategyKind;

pub mod config;
pub mod driver;
pub mod engine;
pub mod history;
pub mod strategy;
pub mod tableau;

/// Misuse of the solver by the caller.
///
/// Infeasibility, unboundedness and hitting the iteration limit are outcomes of a solve, not
/// errors; they are reported through the `Status` of a `Solution`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// The strategy starts from the slack basis, but that basis isn't feasible.
    #[error(
        "the {strategy} strategy needs a feasible starting basis, but artificial variable \
        {artificial} is positive; use the two-phase strategy instead"
    )]
    InfeasibleStart {
        /// Strategy that was requested.
        strategy: StrategyKind,
        /// Name of a positive artificial variable.
        artificial: String,
    },
    /// An auxiliary direction that doesn't have one value per tableau column.
    #[error("auxiliary direction has {found} values, but the tableau has {expected} columns")]
    DirectionDimension {
        /// Number of columns of the tableau, the rhs excluded.
        expected: usize,
        /// Length of the provided direction.
        found: usize,
    },
}
