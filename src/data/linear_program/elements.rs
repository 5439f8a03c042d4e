//! # Building blocks to describe linear programs.
use std::fmt;
use std::ops::Not;
use std::str::FromStr;

use enum_map::Enum;
use num_traits::{One, Zero};

use crate::data::linear_program::error::ConstructionError;
use crate::data::number_types::rational::Rational;

/// Relation between the left-hand side `<a, x>` of a constraint and its right-hand side `b`.
#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Relation {
    /// `<a, x> <= b`
    Less,
    /// `<a, x> >= b`
    Greater,
    /// `<a, x> == b`
    Equal,
}

impl Relation {
    /// The relation that holds after multiplying both sides by `-1`.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Relation::Less => Relation::Greater,
            Relation::Greater => Relation::Less,
            Relation::Equal => Relation::Equal,
        }
    }

    /// Literal symbol, one of `"<="`, `">="` and `"="`.
    pub fn symbol(self) -> &'static str {
        match self {
            Relation::Less => "<=",
            Relation::Greater => ">=",
            Relation::Equal => "=",
        }
    }

    /// Whether `lhs <relation> rhs` holds.
    pub fn holds(self, lhs: &Rational, rhs: &Rational) -> bool {
        match self {
            Relation::Less => lhs <= rhs,
            Relation::Greater => lhs >= rhs,
            Relation::Equal => lhs == rhs,
        }
    }
}

impl FromStr for Relation {
    type Err = ConstructionError;

    fn from_str(symbol: &str) -> Result<Self, Self::Err> {
        match symbol.trim() {
            "<=" => Ok(Relation::Less),
            ">=" => Ok(Relation::Greater),
            "=" | "==" => Ok(Relation::Equal),
            other => Err(ConstructionError::UnknownRelation { symbol: other.to_string() }),
        }
    }
}

impl TryFrom<&str> for Relation {
    type Error = ConstructionError;

    fn try_from(symbol: &str) -> Result<Self, Self::Error> {
        symbol.parse()
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Direction of optimization.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Sense {
    /// Find the smallest objective value.
    #[default]
    Minimize,
    /// Find the largest objective value.
    Maximize,
}

impl Sense {
    /// Factor that turns an objective in this sense into one that is minimized.
    pub fn to_minimization_factor(self) -> Rational {
        match self {
            Sense::Minimize => Rational::one(),
            Sense::Maximize => -Rational::one(),
        }
    }
}

impl Not for Sense {
    type Output = Self;

    fn not(self) -> Self::Output {
        match self {
            Sense::Minimize => Sense::Maximize,
            Sense::Maximize => Sense::Minimize,
        }
    }
}

impl FromStr for Sense {
    type Err = ConstructionError;

    fn from_str(symbol: &str) -> Result<Self, Self::Err> {
        match symbol.trim().to_lowercase().as_str() {
            "min" | "minimize" => Ok(Sense::Minimize),
            "max" | "maximize" => Ok(Sense::Maximize),
            _ => Err(ConstructionError::UnknownSense { symbol: symbol.to_string() }),
        }
    }
}

impl fmt::Display for Sense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Sense::Minimize => "minimize",
            Sense::Maximize => "maximize",
        })
    }
}

/// Index of a variable in a `LinearProgram`, equal to its insertion order.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct VariableId(pub usize);

/// Lower and upper bound of a variable; `None` is unbounded in that direction.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Bounds {
    /// `None` means minus infinity.
    pub lower: Option<Rational>,
    /// `None` means plus infinity.
    pub upper: Option<Rational>,
}

impl Bounds {
    /// Both bounds, `None` being infinite.
    pub fn new(lower: Option<Rational>, upper: Option<Rational>) -> Self {
        Self { lower, upper }
    }

    /// `0 <= x`, the default.
    pub fn non_negative() -> Self {
        Self { lower: Some(Rational::zero()), upper: None }
    }

    /// `-inf < x < inf`
    pub fn free() -> Self {
        Self { lower: None, upper: None }
    }

    /// Whether these are the default bounds `[0, inf)`.
    pub fn is_non_negative(&self) -> bool {
        self.upper.is_none() && self.lower.as_ref().is_some_and(Zero::is_zero)
    }

    /// Whether `value` lies within the bounds.
    pub fn contain(&self, value: &Rational) -> bool {
        self.lower.as_ref().is_none_or(|lower| lower <= value)
            && self.upper.as_ref().is_none_or(|upper| value <= upper)
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::non_negative()
    }
}

/// A named decision variable.
///
/// Created during problem construction, never mutated afterwards.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Variable {
    /// Unique within a problem.
    pub name: String,
    /// Domain of the variable.
    pub bounds: Bounds,
}

/// A single (in)equality `<a, x> relation b`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Constraint {
    /// Sorted by variable, without zero values; missing variables have coefficient zero.
    pub coefficients: Vec<(VariableId, Rational)>,
    /// Type of (in)equality.
    pub relation: Relation,
    /// Right-hand side.
    pub rhs: Rational,
}

impl Constraint {
    /// Value of `<a, x>` for a dense point `x` indexed by variable.
    ///
    /// # Panics
    ///
    /// When `point` is too short to hold a value for every variable in the constraint.
    pub fn activity(&self, point: &[Rational]) -> Rational {
        self.coefficients.iter()
            .map(|(VariableId(j), coefficient)| coefficient * &point[*j])
            .sum()
    }

    /// Whether the point satisfies this constraint exactly.
    ///
    /// # Panics
    ///
    /// Under the same condition as `activity`. `LinearProgram::is_satisfied_by` checks the length
    /// first.
    pub fn is_satisfied_by(&self, point: &[Rational]) -> bool {
        self.relation.holds(&self.activity(point), &self.rhs)
    }
}
