use simplex_trace::StrategyKind;

use super::nr_pivots;

#[test]
fn standard_is_exponential() {
    for n in 1..=6 {
        assert_eq!(nr_pivots(n, StrategyKind::Standard), (1 << n) - 1, "dimension {n}");
    }
}

#[test]
fn two_phase_without_artificials_matches_standard() {
    for n in 1..=6 {
        assert_eq!(nr_pivots(n, StrategyKind::TwoPhase), nr_pivots(n, StrategyKind::Standard));
    }
}

#[test]
fn shadow_vertex_single_pivot() {
    for n in 1..=8 {
        let shadow = nr_pivots(n, StrategyKind::ShadowVertex);
        assert_eq!(shadow, 1, "dimension {n}");
        assert!(shadow <= (1 << n) - 1);
    }
}

#[test]
fn path_is_monotone() {
    let problem = super::create(4);
    let (_, history) = simplex_trace::solve_with_history(&problem, StrategyKind::Standard, 100).unwrap();

    assert_eq!(history.len(), 16);
    let values = history.objective_values().collect::<Vec<_>>();
    assert!(values.windows(2).all(|pair| pair[0] < pair[1]));
    assert!(history.iter().all(|step| problem.is_satisfied_by(&step.primal)));
    // Every vertex of the cube is visited exactly once.
    let distinct = history.iter().map(|step| step.primal.clone()).collect::<std::collections::HashSet<_>>();
    assert_eq!(distinct.len(), 16);
}

#[cfg(feature = "long_running")]
#[test]
fn standard_is_exponential_large() {
    for n in 7..=12 {
        assert_eq!(nr_pivots(n, StrategyKind::Standard), (1 << n) - 1, "dimension {n}");
        assert_eq!(nr_pivots(n, StrategyKind::ShadowVertex), 1, "dimension {n}");
    }
}
