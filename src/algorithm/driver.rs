//! # Solver driver
//!
//! Repeatedly asks a strategy for a pivot, performs it on the tableau and records the resulting
//! vertex, until the strategy or the iteration limit ends the solve.
use crate::algorithm::config::SolverConfig;
use crate::algorithm::engine;
use crate::algorithm::history::{History, Phase, PivotStep};
use crate::algorithm::SolveError;
use crate::algorithm::strategy::{PivotingStrategy, StrategyKind, Transition};
use crate::algorithm::tableau::Tableau;
use crate::data::linear_program::general_form::LinearProgram;
use crate::data::linear_program::solution::{Solution, Status};

/// Pivot limit used when none is configured.
pub const DEFAULT_MAX_ITERATIONS: usize = 10_000;

/// Where a solve is.
///
/// `Initialized` leads to `PhaseOne` (two phase only) or `Pivoting`, which loops on itself until
/// one of the terminal states is reached.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum SolverState {
    /// Tableau built, nothing priced or pivoted yet.
    Initialized,
    /// Minimizing the sum of the artificial variables.
    PhaseOne,
    /// Optimizing the objective of the problem from a feasible basis.
    Pivoting,
    /// Terminal.
    Optimal,
    /// Terminal.
    Unbounded,
    /// Terminal.
    Infeasible,
    /// Terminal.
    IterationLimit,
}

impl SolverState {
    /// Whether the solve has ended.
    pub fn is_terminal(self) -> bool {
        !matches!(self, SolverState::Initialized | SolverState::PhaseOne | SolverState::Pivoting)
    }

    fn phase(self) -> Phase {
        match self {
            SolverState::PhaseOne => Phase::One,
            _ => Phase::Two,
        }
    }
}

impl From<Status> for SolverState {
    fn from(status: Status) -> Self {
        match status {
            Status::Optimal => SolverState::Optimal,
            Status::Unbounded => SolverState::Unbounded,
            Status::Infeasible => SolverState::Infeasible,
            Status::IterationLimit => SolverState::IterationLimit,
        }
    }
}

/// Solves linear programs with a fixed strategy and configuration.
///
/// Holds no state between solves; a single instance can be reused, also from several threads.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Solver {
    strategy: StrategyKind,
    config: SolverConfig,
}

impl Solver {
    /// A solver using the default configuration.
    pub fn new(strategy: StrategyKind) -> Self {
        Self { strategy, config: SolverConfig::default() }
    }

    /// Replace the configuration.
    #[must_use]
    pub fn with_config(mut self, config: SolverConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace only the pivot limit.
    #[must_use]
    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.config.max_iterations = max_iterations;
        self
    }

    /// The strategy that will be used.
    pub fn strategy(&self) -> StrategyKind {
        self.strategy
    }

    /// The configuration that will be used.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Solve a problem and record every vertex visited.
    ///
    /// # Errors
    ///
    /// When the strategy needs a feasible starting basis and the problem doesn't provide one.
    pub fn solve(&self, problem: &LinearProgram) -> Result<(Solution, History), SolveError> {
        solve_with(problem, self.strategy.create(), &self.config)
    }
}

/// Solve a problem with the default configuration apart from the pivot limit.
///
/// # Return value
///
/// The terminal solution and the full pivot history. The history is complete also when the
/// solution is not optimal.
///
/// # Errors
///
/// When the strategy needs a feasible starting basis and the problem doesn't provide one.
pub fn solve_with_history(
    problem: &LinearProgram,
    strategy: StrategyKind,
    max_iterations: usize,
) -> Result<(Solution, History), SolveError> {
    Solver::new(strategy).max_iterations(max_iterations).solve(problem)
}

/// Solve a problem with a specific strategy instance.
///
/// # Errors
///
/// When the strategy needs a feasible starting basis and the problem doesn't provide one.
pub fn solve_with<S: PivotingStrategy>(
    problem: &LinearProgram,
    strategy: S,
    config: &SolverConfig,
) -> Result<(Solution, History), SolveError> {
    let mut session = Session {
        problem,
        tableau: problem.to_standard_form(),
        strategy,
        config,
        history: History::new(),
        state: SolverState::Initialized,
        driving_out: false,
        degenerate_streak: 0,
    };
    tracing::debug!(
        component = "driver",
        operation = "solve",
        strategy = %session.strategy.kind(),
        nr_rows = session.tableau.nr_rows(),
        nr_columns = session.tableau.nr_columns(),
        "Starting solve on a {} x {} tableau",
        session.tableau.nr_rows(),
        session.tableau.nr_columns(),
    );

    let status = session.run()?;
    session.state = SolverState::from(status);
    debug_assert!(session.state.is_terminal());
    tracing::info!(
        component = "driver",
        operation = "solve",
        strategy = %session.strategy.kind(),
        status = %status,
        nr_pivots = session.history.nr_pivots(),
        "Solve finished with status {} after {} pivots",
        status,
        session.history.nr_pivots(),
    );

    let solution = match status {
        Status::Optimal => {
            let primal = session.tableau.primal_point();
            let objective = problem.objective_at(&primal);
            let named = problem.variables().iter()
                .map(|variable| variable.name.clone())
                .zip(primal)
                .collect();
            Solution::optimal(objective, named)
        },
        other => Solution::without_point(other),
    };

    Ok((solution, session.history))
}

/// Everything a single solve owns.
struct Session<'a, S> {
    problem: &'a LinearProgram,
    tableau: Tableau,
    strategy: S,
    config: &'a SolverConfig,
    history: History,
    state: SolverState,
    /// An artificial was just pivoted out; the strategy decides what follows, not the entering
    /// rule.
    driving_out: bool,
    /// Number of consecutive pivots that did not change the objective row value.
    degenerate_streak: usize,
}

impl<S: PivotingStrategy> Session<'_, S> {
    fn run(&mut self) -> Result<Status, SolveError> {
        loop {
            let transition = if self.state == SolverState::Initialized || self.driving_out {
                self.strategy.on_phase_transition(&mut self.tableau, self.state)?
            } else {
                match self.select_entering() {
                    Some(column) => match self.strategy.select_leaving(&self.tableau, column) {
                        Some(row) => {
                            if let Some(status) = self.try_pivot(row, column, false) {
                                return Ok(status);
                            }
                            continue;
                        },
                        None => {
                            debug_assert_ne!(self.state, SolverState::PhaseOne);
                            Transition::Finish(Status::Unbounded)
                        },
                    },
                    None => self.strategy.on_phase_transition(&mut self.tableau, self.state)?,
                }
            };

            match transition {
                Transition::Pivot { row, column } => {
                    if let Some(status) = self.try_pivot(row, column, true) {
                        return Ok(status);
                    }
                    self.driving_out = true;
                },
                Transition::Enter(state) => {
                    tracing::debug!(
                        component = "driver",
                        operation = "phase_transition",
                        strategy = %self.strategy.kind(),
                        iteration = self.history.nr_pivots(),
                        from = ?self.state,
                        to = ?state,
                        "Entering state {:?}",
                        state,
                    );
                    self.state = state;
                    self.driving_out = false;
                    self.degenerate_streak = 0;
                },
                Transition::Finish(status) => {
                    self.record_start();
                    return Ok(status);
                },
            }
        }
    }

    /// Pivot unless the iteration limit is reached.
    ///
    /// # Return value
    ///
    /// `Some(Status::IterationLimit)` if no pivot was performed.
    fn try_pivot(&mut self, row: usize, column: usize, drive_out: bool) -> Option<Status> {
        self.record_start();

        if self.history.nr_pivots() >= self.config.max_iterations {
            tracing::warn!(
                component = "driver",
                operation = "pivot",
                strategy = %self.strategy.kind(),
                max_iterations = self.config.max_iterations,
                "Iteration limit of {} pivots reached",
                self.config.max_iterations,
            );
            return Some(Status::IterationLimit);
        }

        self.pivot(row, column, drive_out);
        None
    }

    /// The strategy's choice, or Bland's rule after too many degenerate pivots in a row.
    fn select_entering(&mut self) -> Option<usize> {
        if self.degenerate_streak >= self.config.degenerate_pivot_limit {
            engine::select_entering_column_bland(&self.tableau)
        } else {
            self.strategy.select_entering(&self.tableau)
        }
    }

    /// Step 0, if it wasn't recorded yet.
    fn record_start(&mut self) {
        if self.history.is_empty() {
            let primal = self.tableau.primal_point();
            self.history.push(PivotStep {
                iteration: 0,
                entering: None,
                leaving: None,
                objective_value: self.problem.objective_at(&primal),
                primal,
                pivot_element: None,
                phase: self.state.phase(),
                shadow: self.strategy.shadow_point(&self.tableau),
            });
        }
    }

    /// Pivots moving an artificial out of the basis don't count towards the degenerate streak.
    fn pivot(&mut self, row: usize, column: usize, drive_out: bool) {
        let before = self.tableau.objective_row_value().clone();
        let leaving = self.tableau.label(self.tableau.basis()[row]).clone();
        let pivot_element = engine::pivot(&mut self.tableau, row, column);
        debug_assert!(self.tableau.is_consistent());
        debug_assert!(self.tableau.is_primal_feasible());

        if drive_out || self.tableau.objective_row_value() != &before {
            self.degenerate_streak = 0;
        } else {
            self.degenerate_streak += 1;
            if self.degenerate_streak == self.config.degenerate_pivot_limit {
                tracing::warn!(
                    component = "driver",
                    operation = "pivot",
                    strategy = %self.strategy.kind(),
                    iteration = self.history.len(),
                    streak = self.degenerate_streak,
                    "{} degenerate pivots in a row, switching to Bland's rule",
                    self.degenerate_streak,
                );
            }
        }

        let primal = self.tableau.primal_point();
        let step = PivotStep {
            iteration: self.history.len(),
            entering: Some(self.tableau.label(column).clone()),
            leaving: Some(leaving),
            objective_value: self.problem.objective_at(&primal),
            primal,
            pivot_element: Some(pivot_element),
            phase: self.state.phase(),
            shadow: self.strategy.shadow_point(&self.tableau),
        };
        tracing::debug!(
            component = "driver",
            operation = "pivot",
            strategy = %self.strategy.kind(),
            iteration = step.iteration,
            entering = %self.tableau.label(column),
            leaving = ?step.leaving.as_ref().map(|label| &label.name),
            pivot_element = ?step.pivot_element,
            objective = %step.objective_value,
            "Pivot {}: objective value {}",
            step.iteration,
            step.objective_value,
        );
        self.history.push(step);
    }
}
