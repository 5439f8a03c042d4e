//! # Small problems with a known outcome
//!
//! Each problem exercises a different path through the solver: infeasibility, unboundedness,
//! artificial variables at zero level, negative right-hand sides, bounds and degeneracy.
use simplex_trace::{Bounds, LinearProgram, R, Sense};

/// # Outcomes per strategy
mod test;

/// Maximize `3x + 5y` subject to `x <= 4`, `2y <= 12`, `3x + 2y <= 18`.
fn production() -> LinearProgram {
    let mut problem = LinearProgram::new();
    problem.set_objective([("x", 3), ("y", 5)], Sense::Maximize).unwrap();
    problem.add_constraint([("x", 1)], "<=", 4).unwrap();
    problem.add_constraint([("y", 2)], "<=", 12).unwrap();
    problem.add_constraint([("x", 3), ("y", 2)], "<=", 18).unwrap();
    problem
}

/// `x + y <= 1` and `x + y >= 3`.
fn infeasible() -> LinearProgram {
    let mut problem = LinearProgram::new();
    problem.set_objective([("x", 1), ("y", 1)], Sense::Minimize).unwrap();
    problem.add_constraint([("x", 1), ("y", 1)], "<=", 1).unwrap();
    problem.add_constraint([("x", 1), ("y", 1)], ">=", 3).unwrap();
    problem
}

/// Maximize `x + y` subject to `x - y <= 1`.
fn unbounded() -> LinearProgram {
    let mut problem = LinearProgram::new();
    problem.set_objective([("x", 1), ("y", 1)], Sense::Maximize).unwrap();
    problem.add_constraint([("x", 1), ("y", -1)], "<=", 1).unwrap();
    problem
}

/// Maximize `x + y` subject to `x <= 5`, `y >= 2`, `x + y = 10`.
fn mixed() -> LinearProgram {
    let mut problem = LinearProgram::new();
    problem.set_objective([("x", 1), ("y", 1)], Sense::Maximize).unwrap();
    problem.add_constraint([("x", 1)], "<=", 5).unwrap();
    problem.add_constraint([("y", 1)], ">=", 2).unwrap();
    problem.add_constraint([("x", 1), ("y", 1)], "=", 10).unwrap();
    problem
}

/// Minimize `2x + 3y` subject to `x + y >= 4`, `x + 3y >= 6`, optimal at `(3, 1)`.
fn covering() -> LinearProgram {
    let mut problem = LinearProgram::new();
    problem.set_objective([("x", 2), ("y", 3)], Sense::Minimize).unwrap();
    problem.add_constraint([("x", 1), ("y", 1)], ">=", 4).unwrap();
    problem.add_constraint([("x", 1), ("y", 3)], ">=", 6).unwrap();
    problem
}

/// Maximize `x + 2y` subject to `x - y = 0`, `x + y <= 4`: an artificial at zero level.
fn zero_level_equality() -> LinearProgram {
    let mut problem = LinearProgram::new();
    problem.set_objective([("x", 1), ("y", 2)], Sense::Maximize).unwrap();
    problem.add_constraint([("x", 1), ("y", -1)], "=", 0).unwrap();
    problem.add_constraint([("x", 1), ("y", 1)], "<=", 4).unwrap();
    problem
}

/// Minimize `x + y` subject to `-x - y <= -2`.
fn negative_rhs() -> LinearProgram {
    let mut problem = LinearProgram::new();
    problem.set_objective([("x", 1), ("y", 1)], Sense::Minimize).unwrap();
    problem.add_constraint([("x", -1), ("y", -1)], "<=", -2).unwrap();
    problem
}

/// Maximize `x + 2y` with `1 <= x <= 3`, `y <= 2` and `x + y <= 4`, optimal at `(2, 2)`.
fn bounded_variables() -> LinearProgram {
    let mut problem = LinearProgram::new();
    problem.add_variable_with_bounds("x", Bounds::new(Some(R!(1)), Some(R!(3)))).unwrap();
    problem.add_variable_with_bounds("y", Bounds::new(None, Some(R!(2)))).unwrap();
    problem.set_objective([("x", 1), ("y", 2)], Sense::Maximize).unwrap();
    problem.add_constraint([("x", 1), ("y", 1)], "<=", 4).unwrap();
    problem
}

/// Minimize a free variable `z` subject to `z >= -3`.
fn free_variable() -> LinearProgram {
    let mut problem = LinearProgram::new();
    problem.add_variable_with_bounds("z", Bounds::free()).unwrap();
    problem.set_objective([("z", 1)], Sense::Minimize).unwrap();
    problem.add_constraint([("z", 1)], ">=", -3).unwrap();
    problem
}

/// Beale's example, on which Dantzig's rule with a lowest index leaving rule cycles.
///
/// Optimal value `-5/4` at `(1, 0, 1, 0)`.
fn beale() -> LinearProgram {
    let mut problem = LinearProgram::with_variables(["x1", "x2", "x3", "x4"]);
    problem.set_dense_objective([R!(-3, 4), R!(20), R!(-1, 2), R!(6)], Sense::Minimize).unwrap();
    problem.add_dense_constraint([R!(1, 4), R!(-8), R!(-1), R!(9)], "<=", 0).unwrap();
    problem.add_dense_constraint([R!(1, 2), R!(-12), R!(-1, 2), R!(3)], "<=", 0).unwrap();
    problem.add_dense_constraint([R!(0), R!(0), R!(1), R!(0)], "<=", 1).unwrap();
    problem
}
