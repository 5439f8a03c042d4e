//! # Construction errors
//!
//! Everything that can go wrong while building a `LinearProgram`. A call that fails leaves the
//! problem untouched.
use std::convert::Infallible;

use thiserror::Error;

use crate::data::number_types::rational::{Rational, RationalError};

/// Malformed input to the problem construction API.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConstructionError {
    /// A constraint without any nonzero coefficient.
    #[error("constraint {index} references no variables")]
    EmptyConstraint {
        /// Index the constraint would have had.
        index: usize,
    },
    /// A dense coefficient vector of the wrong length.
    #[error("expected {expected} coefficients, found {found}")]
    DimensionMismatch {
        /// Number of declared variables.
        expected: usize,
        /// Length of the provided vector.
        found: usize,
    },
    /// The same variable appears twice in a single coefficient listing.
    #[error("variable \"{name}\" is listed more than once")]
    DuplicateVariable {
        /// Name of the repeated variable.
        name: String,
    },
    /// Lower bound above the upper bound.
    #[error("bounds of variable \"{name}\" are empty: {lower} > {upper}")]
    InvalidBounds {
        /// Name of the variable.
        name: String,
        /// Provided lower bound.
        lower: Rational,
        /// Provided upper bound.
        upper: Rational,
    },
    /// Relation symbol other than `<=`, `>=` or `=`.
    #[error("unknown relation \"{symbol}\", expected one of \"<=\", \">=\" or \"=\"")]
    UnknownRelation {
        /// The symbol that was provided.
        symbol: String,
    },
    /// Sense other than `min` or `max`.
    #[error("unknown optimization sense \"{symbol}\", expected \"min\" or \"max\"")]
    UnknownSense {
        /// The symbol that was provided.
        symbol: String,
    },
    /// A coefficient or right-hand side that isn't a finite rational.
    #[error(transparent)]
    Number(#[from] RationalError),
}

impl From<Infallible> for ConstructionError {
    fn from(value: Infallible) -> Self {
        match value {}
    }
}
