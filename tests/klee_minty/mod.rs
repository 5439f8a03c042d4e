//! # Klee-Minty cubes
//!
//! The `n` dimensional cube is constructed such that Dantzig's rule visits all `2^n` vertices.
use num_bigint::BigInt;

use simplex_trace::{LinearProgram, Rational, Sense, StrategyKind, solve_with_history};

/// # Pivot counts per strategy
mod test;

/// Maximize `sum_i 2^(n - i - 1) x_i` subject to `2 sum_{j < i} 2^(i - j) x_j + x_i <= 5^i`.
fn create(n: u32) -> LinearProgram {
    let power = |base: u32, exponent: u32| Rational::from(BigInt::from(base).pow(exponent));

    let mut problem = LinearProgram::new();
    problem.set_objective((0..n).map(|i| (format!("x{i}"), power(2, n - i - 1))), Sense::Maximize).unwrap();
    for i in 0..n {
        let coefficients = (0..i)
            .map(|j| (format!("x{j}"), power(2, i - j + 1)))
            .chain(std::iter::once((format!("x{i}"), Rational::from(1))));
        problem.add_constraint(coefficients, "<=", power(5, i)).unwrap();
    }
    problem
}

/// Number of pivots the strategy needs on the `n` dimensional cube, after checking the optimum.
fn nr_pivots(n: u32, strategy: StrategyKind) -> usize {
    crate::init_logging();

    let problem = create(n);
    let (solution, history) = solve_with_history(&problem, strategy, 1 << 20).unwrap();

    let optimum = Rational::from(BigInt::from(5).pow(n - 1));
    assert_eq!(solution.objective, Some(optimum.clone()));
    let last = history.last().unwrap();
    assert_eq!(last.primal.last(), Some(&optimum));
    assert!(last.primal[..n as usize - 1].iter().all(|value| value == &Rational::from(0)));
    assert!(problem.is_satisfied_by(&last.primal));

    history.nr_pivots()
}
