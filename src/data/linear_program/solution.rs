//! # Representation of solver outcomes
//!
//! Once a solve terminates, a solution is derived. It is expressed in the variables of the
//! original problem, including any that were shifted, reflected or split during the conversion to
//! standard form.
use std::fmt;

use crate::data::number_types::rational::Rational;

/// How a solve terminated.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Status {
    /// A finite optimum was found.
    Optimal,
    /// The objective can be improved without limit.
    Unbounded,
    /// No point satisfies all constraints.
    Infeasible,
    /// The pivot limit was reached before any other outcome.
    IterationLimit,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Status::Optimal => "OPTIMAL",
            Status::Unbounded => "UNBOUNDED",
            Status::Infeasible => "INFEASIBLE",
            Status::IterationLimit => "ITERATION_LIMIT",
        })
    }
}

/// Terminal result of a solve.
///
/// The objective value and primal point are only present when the status is `Optimal`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Solution {
    /// How the solve terminated.
    pub status: Status,
    /// Value of the objective function in the sense of the problem.
    pub objective: Option<Rational>,
    /// (variable name, solution value) tuples for all variables, in declaration order.
    pub primal: Option<Vec<(String, Rational)>>,
}

impl Solution {
    /// An optimal solution.
    pub fn optimal(objective: Rational, primal: Vec<(String, Rational)>) -> Self {
        Self { status: Status::Optimal, objective: Some(objective), primal: Some(primal) }
    }

    /// A solution without objective value or primal point.
    pub fn without_point(status: Status) -> Self {
        debug_assert_ne!(status, Status::Optimal);

        Self { status, objective: None, primal: None }
    }

    /// Value of a variable by name, if there is a primal point.
    pub fn value(&self, name: &str) -> Option<&Rational> {
        self.primal.as_ref()?
            .iter()
            .find(|(candidate, _)| candidate == name)
            .map(|(_, value)| value)
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.status)?;
        if let Some(objective) = &self.objective {
            write!(f, ", objective {objective}")?;
        }
        if let Some(primal) = &self.primal {
            for (name, value) in primal {
                write!(f, ", {name} = {value}")?;
            }
        }

        Ok(())
    }
}
