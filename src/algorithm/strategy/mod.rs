//! # Pivoting strategies
//!
//! Rules for moving from basis to basis. Each strategy decides which column enters, which row
//! leaves and what happens when the current objective can no longer be improved. The driver in
//! `crate::algorithm::driver` performs the pivots and records them.
use std::fmt;
use std::str::FromStr;

use num_traits::Zero;

use crate::algorithm::driver::SolverState;
use crate::algorithm::engine;
use crate::algorithm::SolveError;
use crate::algorithm::tableau::{ColumnRole, Tableau};
use crate::data::linear_program::solution::Status;
use crate::data::number_types::rational::Rational;

pub mod standard;
pub mod two_phase;
pub mod shadow_vertex;

pub use shadow_vertex::ShadowVertex;
pub use standard::Standard;
pub use two_phase::TwoPhase;

/// What the driver should do when no entering column is selected, or before the first pivot.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Transition {
    /// Pivot on this `(row, column)` and ask again. Used to move artificial variables out of the
    /// basis; these pivots are recorded like any other.
    Pivot {
        /// Row of the basic artificial.
        row: usize,
        /// Column replacing it.
        column: usize,
    },
    /// Continue pivoting in another state.
    Enter(SolverState),
    /// Stop with this outcome.
    Finish(Status),
}

/// Deciding how to pivot.
///
/// During the Simplex method, one needs to decide how to move from basic solution to basic
/// solution. The pivot rule describes that behavior.
pub trait PivotingStrategy {
    /// Which strategy this is, for logging and errors.
    fn kind(&self) -> StrategyKind;

    /// Column to bring into the basis.
    ///
    /// # Return value
    ///
    /// `None` if the objective currently priced into the tableau can't be improved.
    fn select_entering(&mut self, tableau: &Tableau) -> Option<usize>;

    /// Row that leaves when `column` enters.
    ///
    /// # Return value
    ///
    /// `None` if `column` is an unbounded direction.
    fn select_leaving(&mut self, tableau: &Tableau, column: usize) -> Option<usize> {
        engine::select_leaving_row(tableau, column)
    }

    /// Decide how to continue from `state`.
    ///
    /// Called in the `Initialized` state before anything else, after every `Transition::Pivot`,
    /// and whenever `select_entering` found no column. The tableau may be re-priced here.
    fn on_phase_transition(
        &mut self,
        tableau: &mut Tableau,
        state: SolverState,
    ) -> Result<Transition, SolveError>;

    /// Projection of the current vertex on a plane the strategy pivots in.
    ///
    /// # Return value
    ///
    /// `None` for strategies that don't work in a plane.
    fn shadow_point(&self, _tableau: &Tableau) -> Option<(Rational, Rational)> {
        None
    }
}

/// Run time selection of a strategy.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Default)]
pub enum StrategyKind {
    /// Dantzig's rule from a feasible starting basis.
    #[default]
    Standard,
    /// Find a feasible basis by minimizing the artificial variables first.
    TwoPhase,
    /// Follow the vertices of a two dimensional shadow, from a feasible starting basis.
    ShadowVertex,
}

impl StrategyKind {
    /// All strategies.
    pub const ALL: [StrategyKind; 3] = [StrategyKind::Standard, StrategyKind::TwoPhase, StrategyKind::ShadowVertex];

    /// A fresh instance of the strategy.
    pub fn create(self) -> Box<dyn PivotingStrategy> {
        match self {
            StrategyKind::Standard => Box::new(Standard::default()),
            StrategyKind::TwoPhase => Box::new(TwoPhase::default()),
            StrategyKind::ShadowVertex => Box::new(ShadowVertex::default()),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StrategyKind::Standard => "standard",
            StrategyKind::TwoPhase => "two-phase",
            StrategyKind::ShadowVertex => "shadow-vertex",
        })
    }
}

impl FromStr for StrategyKind {
    type Err = String;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.trim().to_lowercase().replace('_', "-").as_str() {
            "standard" | "dantzig" => Ok(StrategyKind::Standard),
            "two-phase" | "twophase" => Ok(StrategyKind::TwoPhase),
            "shadow-vertex" | "shadowvertex" | "shadow" => Ok(StrategyKind::ShadowVertex),
            _ => Err(format!("unknown strategy \"{name}\"")),
        }
    }
}

impl<S: PivotingStrategy + ?Sized> PivotingStrategy for Box<S> {
    fn kind(&self) -> StrategyKind {
        (**self).kind()
    }

    fn select_entering(&mut self, tableau: &Tableau) -> Option<usize> {
        (**self).select_entering(tableau)
    }

    fn select_leaving(&mut self, tableau: &Tableau, column: usize) -> Option<usize> {
        (**self).select_leaving(tableau, column)
    }

    fn on_phase_transition(
        &mut self,
        tableau: &mut Tableau,
        state: SolverState,
    ) -> Result<Transition, SolveError> {
        (**self).on_phase_transition(tableau, state)
    }

    fn shadow_point(&self, tableau: &Tableau) -> Option<(Rational, Rational)> {
        (**self).shadow_point(tableau)
    }
}

/// Pivot that replaces a basic artificial variable at zero level.
///
/// Picks the first row (in row order) with a basic artificial, and within that row the lowest
/// index column that is neither artificial nor basic and has a nonzero entry. Rows without such a
/// column are redundant and are skipped.
pub fn artificial_exit(tableau: &Tableau) -> Option<(usize, usize)> {
    tableau.artificial_rows()
        .find_map(|row| {
            (0..tableau.nr_columns())
                .filter(|&column| tableau.label(column).role != ColumnRole::Artificial)
                .filter(|&column| !tableau.is_basic(column))
                .find(|&column| !tableau.entry(row, column).is_zero())
                .map(|column| (row, column))
        })
}

/// Initial transition of the single phase strategies.
///
/// The starting basis must be feasible: every basic artificial must be at zero level. Those are
/// moved out of the basis one pivot at a time, after which all artificials are locked.
pub(crate) fn feasible_start(
    tableau: &mut Tableau,
    strategy: StrategyKind,
) -> Result<Transition, SolveError> {
    if let Some(row) = tableau.artificial_rows().find(|&row| tableau.rhs(row).is_positive()) {
        return Err(SolveError::InfeasibleStart {
            strategy,
            artificial: tableau.label(tableau.basis()[row]).name.clone(),
        });
    }

    Ok(match artificial_exit(tableau) {
        Some((row, column)) => Transition::Pivot { row, column },
        None => {
            tableau.lock_artificials();
            Transition::Enter(SolverState::Pivoting)
        },
    })
}
