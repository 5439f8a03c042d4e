//! # Linear programs in "general form"
//!
//! The model a caller builds: named variables with bounds, an objective, and a sequence of
//! (in)equality constraints. Conversion to the standard form the pivoting engine works on happens
//! in `to_standard_form`.
use std::collections::{HashMap, HashSet};
use std::fmt;

use num_traits::Zero;

use crate::algorithm::tableau::{OriginalVariable, StandardRow, Tableau};
use crate::data::linear_program::elements::{Bounds, Constraint, Relation, Sense, Variable, VariableId};
use crate::data::linear_program::error::ConstructionError;
use crate::data::number_types::rational::Rational;

/// A linear program in general form.
///
/// Variable insertion order is the structural column order of the eventual tableau, and the
/// constraint order fixes the row order. Both are preserved exactly.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct LinearProgram {
    /// Which direction does the objective function go?
    sense: Sense,
    /// All variables, ordered by insertion.
    variables: Vec<Variable>,
    /// Lookup from name to position in `variables`.
    index: HashMap<String, VariableId>,
    /// Sparse, sorted by variable, no zero values.
    objective: Vec<(VariableId, Rational)>,
    /// All constraints in the order in which they were added.
    constraints: Vec<Constraint>,
}

impl LinearProgram {
    /// An empty problem to be minimized.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty problem with the given variables declared, all with default bounds.
    pub fn with_variables<N: Into<String>>(names: impl IntoIterator<Item=N>) -> Self {
        let mut problem = Self::new();
        for name in names {
            problem.add_variable(name);
        }
        problem
    }

    /// Declare a variable with the default bounds `[0, inf)`.
    ///
    /// Idempotent by name: if the variable already exists, its id is returned and nothing changes.
    pub fn add_variable(&mut self, name: impl Into<String>) -> VariableId {
        self.register(name.into(), Bounds::default())
    }

    /// Declare a variable with explicit bounds.
    ///
    /// If the name is already known, the existing id is returned and the existing bounds are kept.
    pub fn add_variable_with_bounds(
        &mut self,
        name: impl Into<String>,
        bounds: Bounds,
    ) -> Result<VariableId, ConstructionError> {
        let name = name.into();
        if let (Some(lower), Some(upper)) = (&bounds.lower, &bounds.upper) {
            if lower > upper {
                return Err(ConstructionError::InvalidBounds {
                    name,
                    lower: lower.clone(),
                    upper: upper.clone(),
                });
            }
        }

        Ok(self.register(name, bounds))
    }

    fn register(&mut self, name: String, bounds: Bounds) -> VariableId {
        if let Some(&id) = self.index.get(&name) {
            return id;
        }

        let id = VariableId(self.variables.len());
        self.index.insert(name.clone(), id);
        self.variables.push(Variable { name, bounds });
        id
    }

    /// Replace the objective function and the direction of optimization.
    ///
    /// Variables that were not yet known are registered with default bounds.
    pub fn set_objective<I, N, V>(&mut self, coefficients: I, sense: Sense) -> Result<(), ConstructionError>
    where
        I: IntoIterator<Item=(N, V)>,
        N: AsRef<str>,
        V: TryInto<Rational>,
        ConstructionError: From<V::Error>,
    {
        let named = collect_named(coefficients)?;

        self.objective = self.register_sparse(named);
        self.sense = sense;
        Ok(())
    }

    /// Replace the objective function with one coefficient per declared variable.
    pub fn set_dense_objective<V>(
        &mut self,
        coefficients: impl IntoIterator<Item=V>,
        sense: Sense,
    ) -> Result<(), ConstructionError>
    where
        V: TryInto<Rational>,
        ConstructionError: From<V::Error>,
    {
        let dense = self.collect_dense(coefficients)?;

        self.objective = sparsify(dense);
        self.sense = sense;
        Ok(())
    }

    /// Append a constraint `<a, x> relation rhs`.
    ///
    /// Variables that were not yet known are registered with default bounds. On failure, neither
    /// the constraint nor any variable is added.
    ///
    /// # Return value
    ///
    /// Index of the new constraint.
    pub fn add_constraint<I, N, V, T, B>(
        &mut self,
        coefficients: I,
        relation: T,
        rhs: B,
    ) -> Result<usize, ConstructionError>
    where
        I: IntoIterator<Item=(N, V)>,
        N: AsRef<str>,
        V: TryInto<Rational>,
        ConstructionError: From<V::Error>,
        T: TryInto<Relation>,
        ConstructionError: From<T::Error>,
        B: TryInto<Rational>,
        ConstructionError: From<B::Error>,
    {
        let named = collect_named(coefficients)?;
        let relation = relation.try_into()?;
        let rhs = rhs.try_into()?;
        if named.iter().all(|(_, value)| value.is_zero()) {
            return Err(ConstructionError::EmptyConstraint { index: self.constraints.len() });
        }

        let coefficients = self.register_sparse(named);
        Ok(self.push_constraint(Constraint { coefficients, relation, rhs }))
    }

    /// Append a constraint with one coefficient per declared variable.
    pub fn add_dense_constraint<V, T, B>(
        &mut self,
        coefficients: impl IntoIterator<Item=V>,
        relation: T,
        rhs: B,
    ) -> Result<usize, ConstructionError>
    where
        V: TryInto<Rational>,
        ConstructionError: From<V::Error>,
        T: TryInto<Relation>,
        ConstructionError: From<T::Error>,
        B: TryInto<Rational>,
        ConstructionError: From<B::Error>,
    {
        let dense = self.collect_dense(coefficients)?;
        let relation = relation.try_into()?;
        let rhs = rhs.try_into()?;
        let coefficients = sparsify(dense);
        if coefficients.is_empty() {
            return Err(ConstructionError::EmptyConstraint { index: self.constraints.len() });
        }

        Ok(self.push_constraint(Constraint { coefficients, relation, rhs }))
    }

    fn push_constraint(&mut self, constraint: Constraint) -> usize {
        self.constraints.push(constraint);
        self.constraints.len() - 1
    }

    fn register_sparse(&mut self, named: Vec<(String, Rational)>) -> Vec<(VariableId, Rational)> {
        let mut sparse = named.into_iter()
            .map(|(name, value)| (self.register(name, Bounds::default()), value))
            .filter(|(_, value)| !value.is_zero())
            .collect::<Vec<_>>();
        sparse.sort_unstable_by_key(|&(id, _)| id);
        sparse
    }

    fn collect_dense<V>(&self, coefficients: impl IntoIterator<Item=V>) -> Result<Vec<Rational>, ConstructionError>
    where
        V: TryInto<Rational>,
        ConstructionError: From<V::Error>,
    {
        let dense = coefficients.into_iter()
            .map(|value| value.try_into().map_err(ConstructionError::from))
            .collect::<Result<Vec<_>, _>>()?;
        if dense.len() != self.variables.len() {
            return Err(ConstructionError::DimensionMismatch {
                expected: self.variables.len(),
                found: dense.len(),
            });
        }

        Ok(dense)
    }

    /// Direction of optimization.
    pub fn sense(&self) -> Sense {
        self.sense
    }

    /// All variables in insertion order.
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    /// Id of a variable by name.
    pub fn variable(&self, name: &str) -> Option<VariableId> {
        self.index.get(name).copied()
    }

    /// Sparse objective coefficients, sorted by variable.
    pub fn objective(&self) -> &[(VariableId, Rational)] {
        &self.objective
    }

    /// All constraints in insertion order.
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Number of declared variables.
    pub fn nr_variables(&self) -> usize {
        self.variables.len()
    }

    /// Number of constraints.
    pub fn nr_constraints(&self) -> usize {
        self.constraints.len()
    }

    /// Value of the objective function at a point given in the original variables.
    ///
    /// Always in the sense of the problem: no sign correction is applied.
    ///
    /// # Panics
    ///
    /// When `point` doesn't have exactly one value per variable.
    pub fn objective_at(&self, point: &[Rational]) -> Rational {
        assert_eq!(
            point.len(), self.nr_variables(),
            "point has {} values, the problem has {} variables", point.len(), self.nr_variables(),
        );

        self.objective.iter()
            .map(|(VariableId(j), coefficient)| coefficient * &point[*j])
            .sum()
    }

    /// Whether a point satisfies all constraints and bounds exactly.
    pub fn is_satisfied_by(&self, point: &[Rational]) -> bool {
        point.len() == self.nr_variables()
            && self.variables.iter().zip(point).all(|(variable, value)| variable.bounds.contain(value))
            && self.constraints.iter().all(|constraint| constraint.is_satisfied_by(point))
    }

    /// Convert to standard form: a tableau with a slack, surplus or artificial column per row and
    /// a starting basis consisting of slack and artificial columns.
    ///
    /// Variables are first brought into the form `x >= 0`:
    /// * A finite lower bound `l` is shifted out, `x = l + x'`.
    /// * An upper bound `u` with an infinite lower bound is reflected, `x = u - x'`.
    /// * A free variable is split in two parts, `x = x+ - x-`.
    ///
    /// A variable with two finite bounds gets an extra `x' <= u - l` row after the user's
    /// constraints. Rows with a negative right-hand side are multiplied by `-1`, flipping their
    /// relation. The objective is converted to minimization.
    pub fn to_standard_form(&self) -> Tableau {
        let mut column_names = Vec::with_capacity(self.nr_variables());
        let mut originals = Vec::with_capacity(self.nr_variables());
        let mut bound_rows = Vec::new();
        for variable in &self.variables {
            let name = &variable.name;
            let original = match (&variable.bounds.lower, &variable.bounds.upper) {
                (Some(lower), upper) => {
                    let column = column_names.len();
                    column_names.push(name.clone());
                    if let Some(upper) = upper {
                        bound_rows.push((column, upper - lower));
                    }
                    OriginalVariable::Shifted { column, shift: lower.clone() }
                },
                (None, Some(upper)) => {
                    let column = column_names.len();
                    column_names.push(name.clone());
                    OriginalVariable::Reflected { column, upper: upper.clone() }
                },
                (None, None) => {
                    let positive = column_names.len();
                    column_names.push(format!("{name}+"));
                    column_names.push(format!("{name}-"));
                    OriginalVariable::Split { positive, negative: positive + 1 }
                },
            };
            originals.push(original);
        }
        let nr_structural = column_names.len();

        let substitute = |coefficients: &[(VariableId, Rational)]| {
            let mut dense = vec![Rational::zero(); nr_structural];
            let mut constant = Rational::zero();
            for (VariableId(j), coefficient) in coefficients {
                match &originals[*j] {
                    OriginalVariable::Shifted { column, shift } => {
                        dense[*column] = coefficient.clone();
                        constant += coefficient * shift;
                    },
                    OriginalVariable::Reflected { column, upper } => {
                        dense[*column] = -coefficient;
                        constant += coefficient * upper;
                    },
                    OriginalVariable::Split { positive, negative } => {
                        dense[*positive] = coefficient.clone();
                        dense[*negative] = -coefficient;
                    },
                }
            }
            (dense, constant)
        };

        let mut rows = self.constraints.iter()
            .map(|constraint| {
                let (coefficients, constant) = substitute(&constraint.coefficients);
                StandardRow::new(coefficients, constraint.relation, &constraint.rhs - constant)
            })
            .collect::<Vec<_>>();
        rows.extend(bound_rows.into_iter().map(|(column, width)| {
            let mut coefficients = vec![Rational::zero(); nr_structural];
            coefficients[column] = Rational::from(1);
            StandardRow::new(coefficients, Relation::Less, width)
        }));

        let factor = self.sense.to_minimization_factor();
        let costs = substitute(&self.objective).0.into_iter()
            .map(|cost| cost * &factor)
            .collect();

        Tableau::from_standard_rows(column_names, originals, rows, costs)
    }
}

/// Convert a named listing, rejecting names that appear twice.
fn collect_named<I, N, V>(coefficients: I) -> Result<Vec<(String, Rational)>, ConstructionError>
where
    I: IntoIterator<Item=(N, V)>,
    N: AsRef<str>,
    V: TryInto<Rational>,
    ConstructionError: From<V::Error>,
{
    let mut seen = HashSet::new();
    coefficients.into_iter()
        .map(|(name, value)| {
            let name = name.as_ref().to_string();
            if !seen.insert(name.clone()) {
                return Err(ConstructionError::DuplicateVariable { name });
            }
            Ok((name, value.try_into()?))
        })
        .collect()
}

fn sparsify(dense: Vec<Rational>) -> Vec<(VariableId, Rational)> {
    dense.into_iter()
        .enumerate()
        .filter(|(_, value)| !value.is_zero())
        .map(|(j, value)| (VariableId(j), value))
        .collect()
}

impl LinearProgram {
    fn write_terms(&self, f: &mut fmt::Formatter<'_>, terms: &[(VariableId, Rational)]) -> fmt::Result {
        if terms.is_empty() {
            return write!(f, "0");
        }

        for (i, (VariableId(j), coefficient)) in terms.iter().enumerate() {
            let name = &self.variables[*j].name;
            match (i, coefficient.is_negative()) {
                (0, _) => write!(f, "{coefficient} {name}")?,
                (_, true) => write!(f, " - {} {name}", coefficient.abs())?,
                (_, false) => write!(f, " + {coefficient} {name}")?,
            }
        }
        Ok(())
    }
}

impl fmt::Display for LinearProgram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.sense)?;
        self.write_terms(f, &self.objective)?;
        writeln!(f)?;
        for (k, constraint) in self.constraints.iter().enumerate() {
            write!(f, "C{k}: ")?;
            self.write_terms(f, &constraint.coefficients)?;
            writeln!(f, " {} {}", constraint.relation, constraint.rhs)?;
        }
        for variable in self.variables.iter().filter(|variable| !variable.bounds.is_non_negative()) {
            let lower = variable.bounds.lower.as_ref().map_or("-inf".to_string(), ToString::to_string);
            let upper = variable.bounds.upper.as_ref().map_or("inf".to_string(), ToString::to_string);
            writeln!(f, "{lower} <= {} <= {upper}", variable.name)?;
        }

        Ok(())
    }
}
