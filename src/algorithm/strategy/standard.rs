//! # Dantzig's rule
//!
//! Single phase: enter the column with the most negative reduced cost, leave by the ratio test.
use crate::algorithm::driver::SolverState;
use crate::algorithm::engine;
use crate::algorithm::SolveError;
use crate::algorithm::strategy::{feasible_start, PivotingStrategy, StrategyKind, Transition};
use crate::algorithm::tableau::Tableau;
use crate::data::linear_program::solution::Status;

/// Dantzig's rule from a feasible starting basis.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Standard;

impl PivotingStrategy for Standard {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Standard
    }

    fn select_entering(&mut self, tableau: &Tableau) -> Option<usize> {
        engine::select_entering_column(tableau)
    }

    fn on_phase_transition(
        &mut self,
        tableau: &mut Tableau,
        state: SolverState,
    ) -> Result<Transition, SolveError> {
        match state {
            SolverState::Initialized => feasible_start(tableau, self.kind()),
            _ => Ok(Transition::Finish(Status::Optimal)),
        }
    }
}
