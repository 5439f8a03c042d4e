//! Klee-Minty cubes.
//!
//! Maximize `sum_i 2^(n - i - 1) x_i` subject to `2 sum_{j < i} 2^(i - j) x_j + x_i <= 5^i` for
//! `i = 0, ..., n - 1`. Dantzig's rule visits all `2^n` vertices.
use num_bigint::BigInt;

use crate::data::linear_program::elements::Sense;
use crate::data::linear_program::general_form::LinearProgram;
use crate::data::number_types::rational::Rational;

pub fn create(n: u32) -> LinearProgram {
    let power = |base: u32, exponent: u32| Rational::from(BigInt::from(base).pow(exponent));

    let mut problem = LinearProgram::with_variables((0..n).map(|i| format!("x{i}")));
    problem.set_dense_objective((0..n).map(|i| power(2, n - i - 1)), Sense::Maximize).unwrap();
    for i in 0..n {
        let row = (0..n).map(|j| match j {
            j if j < i => power(2, i - j + 1),
            j if j == i => Rational::from(1),
            _ => Rational::from(0),
        });
        problem.add_dense_constraint(row, "<=", power(5, i)).unwrap();
    }
    problem
}

#[cfg(test)]
mod test {
    use crate::algorithm::driver::solve_with_history;
    use crate::algorithm::strategy::StrategyKind;
    use crate::data::linear_program::solution::Status;
    use crate::R;
    use crate::tests::klee_minty::create;

    #[test]
    fn shape() {
        let problem = create(3);

        assert_eq!(problem.nr_variables(), 3);
        assert_eq!(problem.nr_constraints(), 3);
        assert_eq!(problem.to_string(), "\
maximize 4 x0 + 2 x1 + 1 x2
C0: 1 x0 <= 1
C1: 4 x0 + 1 x1 <= 5
C2: 8 x0 + 4 x1 + 1 x2 <= 25
");
    }

    #[test]
    fn dantzig_visits_every_vertex() {
        let (solution, history) = solve_with_history(&create(3), StrategyKind::Standard, 10_000).unwrap();

        assert_eq!(solution.status, Status::Optimal);
        assert_eq!(solution.objective, Some(R!(25)));
        assert_eq!(history.nr_pivots(), 7);
        // Strictly increasing objective along the path.
        let values = history.objective_values().collect::<Vec<_>>();
        assert!(values.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
