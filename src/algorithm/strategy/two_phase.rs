//! # Two phase method
//!
//! Phase one minimizes the sum of the artificial variables. If that sum can't be brought down to
//! zero, the problem is infeasible. Otherwise, the artificials are moved out of the basis, locked,
//! and phase two optimizes the original objective from the feasible basis phase one produced.
use num_traits::Zero;

use crate::algorithm::driver::SolverState;
use crate::algorithm::engine;
use crate::algorithm::SolveError;
use crate::algorithm::strategy::{artificial_exit, PivotingStrategy, StrategyKind, Transition};
use crate::algorithm::tableau::Tableau;
use crate::data::linear_program::solution::Status;

/// Dantzig's rule in both phases.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct TwoPhase;

impl TwoPhase {
    fn start_phase_two(tableau: &mut Tableau) -> Transition {
        tableau.lock_artificials();
        let costs = tableau.costs().to_vec();
        tableau.price_objective(&costs);
        Transition::Enter(SolverState::Pivoting)
    }
}

impl PivotingStrategy for TwoPhase {
    fn kind(&self) -> StrategyKind {
        StrategyKind::TwoPhase
    }

    fn select_entering(&mut self, tableau: &Tableau) -> Option<usize> {
        engine::select_entering_column(tableau)
    }

    fn on_phase_transition(
        &mut self,
        tableau: &mut Tableau,
        state: SolverState,
    ) -> Result<Transition, SolveError> {
        Ok(match state {
            SolverState::Initialized if tableau.artificial_rows().next().is_some() => {
                let costs = tableau.artificial_costs();
                tableau.price_objective(&costs);
                Transition::Enter(SolverState::PhaseOne)
            },
            SolverState::Initialized => Self::start_phase_two(tableau),
            SolverState::PhaseOne => {
                // Minus the sum of the artificial variables.
                let value = tableau.objective_row_value();
                if value.is_negative() {
                    Transition::Finish(Status::Infeasible)
                } else {
                    debug_assert!(value.is_zero());

                    match artificial_exit(tableau) {
                        Some((row, column)) => Transition::Pivot { row, column },
                        None => Self::start_phase_two(tableau),
                    }
                }
            },
            _ => Transition::Finish(Status::Optimal),
        })
    }
}
