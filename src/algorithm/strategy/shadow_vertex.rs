//! # Shadow vertex rule
//!
//! Parametric objective `(1 - t) d + t c` moving from an auxiliary direction `d`, for which the
//! starting vertex is optimal, towards the cost vector `c`. The vertices that are optimal along
//! the way form the boundary of the projection ("shadow") of the polyhedron on the plane spanned
//! by `c` and `d`. Every pivot moves to the next vertex of that shadow.
//!
//! For a column `j` with reduced costs `r_c` and `r_d`, the objective stops being optimal at the
//! current vertex when `(1 - t) r_d + t r_c < 0`, that is for `t > r_d / (r_d - r_c)`. The
//! entering column is the one where this happens first.
//!
//! Every recorded step carries the point `(d x, c x)` of the current vertex, with `x` the values
//! of all tableau columns and `c` the costs of the minimization form. Along the path `d x` does
//! not decrease and `c x` does not increase.
use num_traits::Zero;

use crate::algorithm::driver::SolverState;
use crate::algorithm::engine;
use crate::algorithm::SolveError;
use crate::algorithm::strategy::{feasible_start, PivotingStrategy, StrategyKind, Transition};
use crate::algorithm::tableau::{ColumnRole, Tableau};
use crate::data::linear_program::solution::Status;
use crate::data::number_types::rational::Rational;

/// Shadow vertex rule from a feasible starting basis.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ShadowVertex {
    /// Auxiliary direction, one value per column. Fixed before the first pivot.
    direction: Option<Vec<Rational>>,
}

impl ShadowVertex {
    /// Use a specific auxiliary direction instead of `auxiliary_direction`.
    ///
    /// The direction needs one value for each column of the standard form tableau, the rhs
    /// excluded. Its length is checked when the solve starts. For the rule to follow the shadow
    /// from the first pivot, the starting basis should be optimal for it, which holds for any
    /// direction that is zero on the columns of the starting basis and non-negative elsewhere.
    pub fn with_direction(direction: Vec<Rational>) -> Self {
        Self { direction: Some(direction) }
    }

    /// The auxiliary direction, once it is known.
    pub fn direction(&self) -> Option<&[Rational]> {
        self.direction.as_deref()
    }

    /// The L1 norm of each structural column of the initial tableau, zero for all other columns.
    ///
    /// Non-negative, so the slack and artificial starting basis is optimal for it.
    pub fn auxiliary_direction(tableau: &Tableau) -> Vec<Rational> {
        (0..tableau.nr_columns())
            .map(|column| match tableau.label(column).role {
                ColumnRole::Structural => (0..tableau.nr_rows())
                    .map(|row| tableau.entry(row, column).abs())
                    .sum(),
                _ => Rational::zero(),
            })
            .collect()
    }

    /// The column with the smallest breakpoint `r_d / (r_d - r_c)`, lowest index on ties.
    ///
    /// Only columns that improve the objective while the direction is still optimal qualify.
    fn next_breakpoint(tableau: &Tableau, direction: &[Rational]) -> Option<(usize, Rational)> {
        let direction_costs = tableau.reduced_costs_of(direction);

        let mut best: Option<(usize, Rational)> = None;
        for (column, cost) in engine::improving_columns(tableau) {
            let auxiliary = &direction_costs[column];
            if auxiliary.is_negative() {
                tracing::trace!(
                    component = "strategy",
                    operation = "select_entering",
                    strategy = %StrategyKind::ShadowVertex,
                    column,
                    "Column {} leaves the shadow, auxiliary reduced cost {}",
                    column,
                    auxiliary,
                );
                continue;
            }

            let breakpoint = auxiliary / (auxiliary - cost);
            tracing::trace!(
                component = "strategy",
                operation = "select_entering",
                strategy = %StrategyKind::ShadowVertex,
                column,
                breakpoint = %breakpoint,
                "Candidate column {}",
                column,
            );
            match &best {
                Some((_, smallest)) if &breakpoint >= smallest => {},
                _ => best = Some((column, breakpoint)),
            }
        }

        best
    }
}

impl PivotingStrategy for ShadowVertex {
    fn kind(&self) -> StrategyKind {
        StrategyKind::ShadowVertex
    }

    fn select_entering(&mut self, tableau: &Tableau) -> Option<usize> {
        let direction = self.direction.as_deref()?;

        match Self::next_breakpoint(tableau, direction) {
            Some((column, _)) => Some(column),
            None => engine::select_entering_column(tableau),
        }
    }

    fn on_phase_transition(
        &mut self,
        tableau: &mut Tableau,
        state: SolverState,
    ) -> Result<Transition, SolveError> {
        match state {
            SolverState::Initialized => {
                match &self.direction {
                    Some(direction) => if direction.len() != tableau.nr_columns() {
                        return Err(SolveError::DirectionDimension {
                            expected: tableau.nr_columns(),
                            found: direction.len(),
                        });
                    },
                    None => self.direction = Some(Self::auxiliary_direction(tableau)),
                }
                feasible_start(tableau, self.kind())
            },
            _ => Ok(Transition::Finish(Status::Optimal)),
        }
    }

    fn shadow_point(&self, tableau: &Tableau) -> Option<(Rational, Rational)> {
        let direction = self.direction.as_deref()?;
        let values = tableau.column_values();
        let project = |weights: &[Rational]| weights.iter()
            .zip(&values)
            .map(|(weight, value)| weight * value)
            .sum::<Rational>();

        Some((project(direction), project(tableau.costs())))
    }
}
