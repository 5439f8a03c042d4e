use simplex_trace::{
    History, LinearProgram, Phase, R, Rational, ShadowVertex, Solution, SolveError, Solver,
    SolverConfig, Status, StrategyKind, solve_with, solve_with_history,
};

use super::*;

fn solve(problem: &LinearProgram, strategy: StrategyKind) -> Result<(Solution, History), SolveError> {
    crate::init_logging();
    solve_with_history(problem, strategy, 10_000)
}

/// The final point of an optimal solve is feasible and has the reported objective value.
fn assert_certificate(problem: &LinearProgram, solution: &Solution, history: &History) {
    let last = history.last().unwrap();
    let primal = solution.primal.as_ref().unwrap()
        .iter()
        .map(|(_, value)| value.clone())
        .collect::<Vec<_>>();

    assert_eq!(primal, last.primal);
    assert!(problem.is_satisfied_by(&primal));
    assert_eq!(solution.objective.as_ref(), Some(&problem.objective_at(&primal)));
    assert_eq!(solution.objective.as_ref(), Some(&last.objective_value));
}

#[test]
fn production_all_strategies() {
    let problem = production();
    for strategy in StrategyKind::ALL {
        let (solution, history) = solve(&problem, strategy).unwrap();

        assert_eq!(solution.status, Status::Optimal);
        assert_eq!(solution.objective, Some(R!(36)));
        assert_eq!(solution.value("x"), Some(&R!(2)));
        assert_eq!(solution.value("y"), Some(&R!(6)));
        assert_eq!(history.nr_pivots(), 2);
        assert_certificate(&problem, &solution, &history);
    }
}

#[test]
fn determinism() {
    let problem = production();
    for strategy in StrategyKind::ALL {
        assert_eq!(solve(&problem, strategy), solve(&problem, strategy));
    }
    let problem = beale();
    assert_eq!(solve(&problem, StrategyKind::Standard), solve(&problem, StrategyKind::Standard));
}

#[test]
fn infeasible_needs_two_phase() {
    let problem = infeasible();

    let (solution, history) = solve(&problem, StrategyKind::TwoPhase).unwrap();
    assert_eq!(solution.status, Status::Infeasible);
    assert_eq!(solution.objective, None);
    assert_eq!(solution.primal, None);
    assert_eq!(history.nr_pivots(), 1);
    assert!(history.iter().all(|step| step.phase == Phase::One));

    for strategy in [StrategyKind::Standard, StrategyKind::ShadowVertex] {
        let error = solve(&problem, strategy).unwrap_err();
        assert!(matches!(error, SolveError::InfeasibleStart { strategy: s, .. } if s == strategy));
        assert!(error.to_string().contains("two-phase"));
    }
}

#[test]
fn unbounded_all_strategies() {
    let problem = unbounded();
    for strategy in StrategyKind::ALL {
        let (solution, history) = solve(&problem, strategy).unwrap();

        assert_eq!(solution.status, Status::Unbounded);
        assert_eq!(solution.objective, None);
        assert_eq!(history.nr_pivots(), 1);
        assert!(problem.is_satisfied_by(&history.last().unwrap().primal));
    }
}

#[test]
fn mixed_relations() {
    let problem = mixed();

    let (solution, history) = solve(&problem, StrategyKind::TwoPhase).unwrap();
    assert_eq!(solution.status, Status::Optimal);
    assert_eq!(solution.objective, Some(R!(10)));
    assert_certificate(&problem, &solution, &history);
    // Once phase one is over, every vertex is feasible.
    assert!(history.iter()
        .filter(|step| step.phase == Phase::Two)
        .all(|step| problem.is_satisfied_by(&step.primal)));
    // History numbering is continuous over both phases.
    assert!(history.iter().enumerate().all(|(i, step)| step.iteration == i));

    assert!(solve(&problem, StrategyKind::Standard).is_err());
    assert!(solve(&problem, StrategyKind::ShadowVertex).is_err());
}

#[test]
fn covering_minimization() {
    let problem = covering();
    let (solution, history) = solve(&problem, StrategyKind::TwoPhase).unwrap();

    assert_eq!(solution.status, Status::Optimal);
    assert_eq!(solution.objective, Some(R!(9)));
    assert_eq!(solution.value("x"), Some(&R!(3)));
    assert_eq!(solution.value("y"), Some(&R!(1)));
    assert_certificate(&problem, &solution, &history);
}

#[test]
fn artificial_at_zero_level() {
    let problem = zero_level_equality();
    for strategy in StrategyKind::ALL {
        let (solution, history) = solve(&problem, strategy).unwrap();

        assert_eq!(solution.status, Status::Optimal);
        assert_eq!(solution.objective, Some(R!(6)));
        assert_eq!(solution.value("x"), Some(&R!(2)));
        assert_eq!(solution.value("y"), Some(&R!(2)));
        assert_eq!(history.nr_pivots(), 2);
        assert_certificate(&problem, &solution, &history);
        // The artificial variable was moved out of the basis, it never enters again.
        assert!(history.iter().all(|step| step.entering.as_ref().is_none_or(|label| label.name != "a0")));
    }
}

#[test]
fn negative_right_hand_side() {
    let problem = negative_rhs();

    assert!(matches!(solve(&problem, StrategyKind::Standard), Err(SolveError::InfeasibleStart { .. })));
    let (solution, history) = solve(&problem, StrategyKind::TwoPhase).unwrap();
    assert_eq!(solution.status, Status::Optimal);
    assert_eq!(solution.objective, Some(R!(2)));
    assert_eq!(history.nr_pivots(), 1);
    assert_certificate(&problem, &solution, &history);
}

#[test]
fn variable_bounds() {
    let problem = bounded_variables();
    for strategy in StrategyKind::ALL {
        let (solution, history) = solve(&problem, strategy).unwrap();

        assert_eq!(solution.status, Status::Optimal);
        assert_eq!(solution.objective, Some(R!(6)));
        assert_eq!(solution.value("x"), Some(&R!(2)));
        assert_eq!(solution.value("y"), Some(&R!(2)));
        // Starting vertex in the original variables: x at its lower bound, y at its upper bound.
        assert_eq!(history[0].primal, [R!(1), R!(2)]);
        assert_certificate(&problem, &solution, &history);
    }

    let problem = free_variable();
    for strategy in StrategyKind::ALL {
        let (solution, history) = solve(&problem, strategy).unwrap();

        assert_eq!(solution.status, Status::Optimal);
        assert_eq!(solution.value("z"), Some(&R!(-3)));
        assert_certificate(&problem, &solution, &history);
    }
}

#[test]
fn beale_cycles_without_fallback() {
    let problem = beale();
    let config = SolverConfig::default()
        .with_max_iterations(200)
        .with_degenerate_pivot_limit(usize::MAX);
    let (solution, history) = Solver::new(StrategyKind::Standard).with_config(config).solve(&problem).unwrap();

    assert_eq!(solution.status, Status::IterationLimit);
    assert_eq!(history.len(), 201);
    // Stuck at the origin.
    assert!(history.iter().all(|step| step.objective_value == Rational::from(0)));
}

#[test]
fn beale_with_fallback() {
    let problem = beale();
    for strategy in [StrategyKind::Standard, StrategyKind::TwoPhase] {
        let (solution, history) = solve(&problem, strategy).unwrap();

        assert_eq!(solution.status, Status::Optimal);
        assert_eq!(solution.objective, Some(R!(-5, 4)));
        assert_eq!(solution.primal.as_ref().map(|primal| primal.iter().map(|(_, v)| v.clone()).collect::<Vec<_>>()),
                   Some(vec![R!(1), R!(0), R!(1), R!(0)]));
        assert_certificate(&problem, &solution, &history);
    }

    let (solution, _) = solve(&problem, StrategyKind::ShadowVertex).unwrap();
    assert_eq!(solution.objective, Some(R!(-5, 4)));
}

#[test]
fn iteration_limit_keeps_history() {
    let problem = production();
    let (solution, history) = solve_with_history(&problem, StrategyKind::Standard, 1).unwrap();

    assert_eq!(solution.status, Status::IterationLimit);
    assert_eq!(history.len(), 2);
    assert_eq!(history[1].primal, [R!(0), R!(6)]);
    assert_eq!(history[1].objective_value, R!(30));
}

#[test]
fn rendering() {
    let problem = production();
    assert_eq!(problem.to_string(), "\
maximize 3 x + 5 y
C0: 1 x <= 4
C1: 2 y <= 12
C2: 3 x + 2 y <= 18
");

    let tableau = problem.to_standard_form();
    let text = tableau.to_string();
    assert_eq!(text.lines().count(), tableau.nr_rows() + 2);
    assert!(text.lines().all(|line| line.split(" | ").count() == tableau.nr_columns() + 2));
    assert!(text.lines().last().unwrap().trim_start().starts_with('z'));
}

/// Along a shadow vertex path the auxiliary value never decreases and the cost never increases.
fn assert_monotone_shadow(history: &History) {
    let points = history.shadow_points().collect::<Vec<_>>();
    assert_eq!(points.len(), history.len());
    assert!(points.windows(2).all(|pair| pair[0].0 <= pair[1].0 && pair[0].1 >= pair[1].1));
}

#[test]
fn shadow_polygon() {
    let (solution, history) = solve(&production(), StrategyKind::ShadowVertex).unwrap();
    assert_eq!(solution.status, Status::Optimal);
    assert_monotone_shadow(&history);
    assert_eq!(history.shadow_points().last(), Some(&(R!(32), R!(-36))));

    // Degenerate pivots stay on the same point of the shadow.
    let (solution, history) = solve(&beale(), StrategyKind::ShadowVertex).unwrap();
    assert_eq!(solution.objective, Some(R!(-5, 4)));
    assert_monotone_shadow(&history);
    assert_eq!(
        history.shadow_points().cloned().collect::<Vec<_>>(),
        [(R!(0), R!(0)), (R!(0), R!(0)), (R!(0), R!(0)), (R!(13, 4), R!(-5, 4))],
    );

    for strategy in [StrategyKind::Standard, StrategyKind::TwoPhase] {
        let (_, history) = solve(&production(), strategy).unwrap();
        assert_eq!(history.shadow_points().count(), 0);
    }
}

#[test]
fn shadow_given_direction() {
    crate::init_logging();
    let problem = production();

    // Zero on the slack basis, so the starting vertex is optimal for it.
    let direction = vec![R!(1), R!(2), R!(0), R!(0), R!(0)];
    let (solution, history) = solve_with(&problem, ShadowVertex::with_direction(direction), &SolverConfig::default()).unwrap();
    assert_eq!(solution.objective, Some(R!(36)));
    assert_monotone_shadow(&history);
    assert_eq!(
        history.shadow_points().map(|(d, _)| d.clone()).collect::<Vec<_>>(),
        [R!(0), R!(4), R!(10), R!(14)],
    );

    let short = ShadowVertex::with_direction(vec![R!(1); 2]);
    assert_eq!(
        solve_with(&problem, short, &SolverConfig::default()),
        Err(SolveError::DirectionDimension { expected: 5, found: 2 }),
    );
}
