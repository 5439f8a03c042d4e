//! # An exact Simplex solver that records its path
//!
//! Linear programs are solved using the Simplex Method over arbitrary precision rationals. Every
//! vertex the method visits is recorded, such that pivot counts and paths can be studied, for
//! example on the Klee-Minty cubes that force Dantzig's rule into an exponential number of steps.
//!
//! ```
//! use simplex_trace::{LinearProgram, Sense, Status, StrategyKind, solve_with_history, R};
//!
//! let mut problem = LinearProgram::new();
//! problem.set_objective([("x", 3), ("y", 5)], Sense::Maximize).unwrap();
//! problem.add_constraint([("x", 1)], "<=", 4).unwrap();
//! problem.add_constraint([("y", 2)], "<=", 12).unwrap();
//! problem.add_constraint([("x", 3), ("y", 2)], "<=", 18).unwrap();
//!
//! let (solution, history) = solve_with_history(&problem, StrategyKind::Standard, 10_000).unwrap();
//! assert_eq!(solution.status, Status::Optimal);
//! assert_eq!(solution.objective, Some(R!(36)));
//! assert_eq!(history.nr_pivots(), 2);
//! ```
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;

pub use algorithm::config::SolverConfig;
pub use algorithm::driver::{solve_with, solve_with_history, Solver, SolverState};
pub use algorithm::history::{History, Phase, PivotStep};
pub use algorithm::SolveError;
pub use algorithm::strategy::{PivotingStrategy, ShadowVertex, StrategyKind};
pub use algorithm::tableau::{ColumnLabel, ColumnRole, Tableau};
pub use data::linear_program::elements::{Bounds, Relation, Sense, VariableId};
pub use data::linear_program::error::ConstructionError;
pub use data::linear_program::general_form::LinearProgram;
pub use data::linear_program::solution::{Solution, Status};
pub use data::number_types::rational::{Rational, RationalError};

#[cfg(test)]
mod tests;
