//! # Dense Simplex tableau
//!
//! The mutable state the pivoting engine works on: one row per constraint followed by the
//! objective row, and a basis mapping each constraint row to the column that is basic in it.
//!
//! Columns are laid out as `[structural | slack and surplus | artificial | rhs]`. Slack and
//! surplus columns appear in row order, one for each inequality; artificial columns appear in
//! row order, one for each `>=` and `=` row.
use std::collections::HashSet;
use std::fmt;

use enum_map::EnumMap;
use itertools::repeat_n;
use num_traits::{One, Zero};

use crate::data::linear_program::elements::Relation;
use crate::data::number_types::rational::Rational;

/// What a tableau column stands for.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ColumnRole {
    /// A (transformed) variable of the original problem.
    Structural,
    /// Added to a `<=` row with coefficient `+1`.
    Slack,
    /// Added to a `>=` row with coefficient `-1`.
    Surplus,
    /// Added to `>=` and `=` rows to provide a starting basis.
    Artificial,
}

/// Name and role of a tableau column.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ColumnLabel {
    /// Variable name for structural columns, `s{row}`, `e{row}` or `a{row}` otherwise.
    pub name: String,
    /// Kind of column.
    pub role: ColumnRole,
}

impl fmt::Display for ColumnLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// How a variable of the original problem is expressed in the structural columns.
///
/// All structural columns are non-negative.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum OriginalVariable {
    /// `x = shift + x'`
    Shifted {
        /// Index of `x'`.
        column: usize,
        /// Lower bound of the original variable, often zero.
        shift: Rational,
    },
    /// `x = upper - x'`
    Reflected {
        /// Index of `x'`.
        column: usize,
        /// Upper bound of the original variable.
        upper: Rational,
    },
    /// `x = x+ - x-`, for free variables.
    Split {
        /// Index of `x+`.
        positive: usize,
        /// Index of `x-`.
        negative: usize,
    },
}

/// A constraint over the structural columns with a non-negative right-hand side.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StandardRow {
    coefficients: Vec<Rational>,
    relation: Relation,
    rhs: Rational,
}

impl StandardRow {
    /// Multiplies by `-1` when the right-hand side is negative.
    pub(crate) fn new(coefficients: Vec<Rational>, relation: Relation, rhs: Rational) -> Self {
        if rhs.is_negative() {
            Self {
                coefficients: coefficients.into_iter().map(|value| -value).collect(),
                relation: relation.flipped(),
                rhs: -rhs,
            }
        } else {
            Self { coefficients, relation, rhs }
        }
    }
}

/// Simplex tableau over exact rationals.
///
/// Created by `LinearProgram::to_standard_form`, consumed by a single solve. Outside of the
/// solver it can be inspected, but not changed:
///
/// ```compile_fail
/// use simplex_trace::{LinearProgram, Sense};
///
/// let mut problem = LinearProgram::new();
/// problem.set_objective([("x", 1)], Sense::Maximize).unwrap();
/// problem.add_constraint([("x", 1)], "<=", 1).unwrap();
/// let mut tableau = problem.to_standard_form();
/// tableau.lock_artificials();
/// ```
///
/// ```compile_fail
/// use simplex_trace::{LinearProgram, Sense};
///
/// let mut problem = LinearProgram::new();
/// problem.set_objective([("x", 1)], Sense::Maximize).unwrap();
/// problem.add_constraint([("x", 1)], "<=", 1).unwrap();
/// let mut tableau = problem.to_standard_form();
/// simplex_trace::algorithm::engine::pivot(&mut tableau, 0, 0);
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Tableau {
    /// Constraint rows followed by the objective row. The last element of each row is the rhs.
    ///
    /// The objective row holds the reduced costs and, in its last element, minus the current
    /// objective value of the minimization form.
    pub(in crate::algorithm) rows: Vec<Vec<Rational>>,
    /// For each constraint row, the column that is basic in it.
    pub(in crate::algorithm) basis: Vec<usize>,
    /// For each column, the row it is basic in, if any.
    pub(in crate::algorithm) basic_row: Vec<Option<usize>>,
    columns: Vec<ColumnLabel>,
    /// Columns that may no longer enter the basis.
    locked: Vec<bool>,
    /// Costs of the minimization form for each column, zero outside of the structural columns.
    costs: Vec<Rational>,
    /// Relation of each constraint row after sign normalization.
    relations: Vec<Relation>,
    originals: Vec<OriginalVariable>,
}

impl Tableau {
    /// Add slack, surplus and artificial columns to rows over the structural columns and select
    /// the starting basis.
    ///
    /// # Arguments
    ///
    /// * `structural`: Names of the structural columns.
    /// * `originals`: For each original variable, how it maps to the structural columns.
    /// * `rows`: Constraints, each with a coefficient for every structural column.
    /// * `costs`: Minimization form costs of the structural columns.
    pub(crate) fn from_standard_rows(
        structural: Vec<String>,
        originals: Vec<OriginalVariable>,
        rows: Vec<StandardRow>,
        costs: Vec<Rational>,
    ) -> Self {
        debug_assert!(rows.iter().all(|row| row.coefficients.len() == structural.len()));
        debug_assert_eq!(costs.len(), structural.len());

        let mut counts = EnumMap::<Relation, usize>::default();
        for row in &rows {
            counts[row.relation] += 1;
        }
        let nr_structural = structural.len();
        let nr_slack = counts[Relation::Less] + counts[Relation::Greater];
        let nr_artificial = counts[Relation::Greater] + counts[Relation::Equal];
        let nr_columns = nr_structural + nr_slack + nr_artificial;

        let mut columns = structural.into_iter()
            .map(|name| ColumnLabel { name, role: ColumnRole::Structural })
            .collect::<Vec<_>>();
        columns.reserve(nr_slack + nr_artificial);
        let mut artificial_labels = Vec::with_capacity(nr_artificial);

        let mut matrix = Vec::with_capacity(rows.len() + 1);
        let mut basis = Vec::with_capacity(rows.len());
        let mut relations = Vec::with_capacity(rows.len());
        let mut next_artificial = nr_structural + nr_slack;
        for (i, row) in rows.into_iter().enumerate() {
            let mut values = row.coefficients;
            values.resize(nr_columns + 1, Rational::zero());
            values[nr_columns] = row.rhs;

            let (slack, artificial) = match row.relation {
                Relation::Less => (Some((ColumnRole::Slack, format!("s{i}"), Rational::one())), false),
                Relation::Greater => (Some((ColumnRole::Surplus, format!("e{i}"), -Rational::one())), true),
                Relation::Equal => (None, true),
            };
            if let Some((role, name, value)) = slack {
                values[columns.len()] = value;
                if role == ColumnRole::Slack {
                    basis.push(columns.len());
                }
                columns.push(ColumnLabel { name, role });
            }
            if artificial {
                values[next_artificial] = Rational::one();
                basis.push(next_artificial);
                artificial_labels.push(ColumnLabel { name: format!("a{i}"), role: ColumnRole::Artificial });
                next_artificial += 1;
            }

            matrix.push(values);
            relations.push(row.relation);
        }
        columns.extend(artificial_labels);
        debug_assert_eq!(columns.len(), nr_columns);

        let mut costs = costs;
        costs.resize(nr_columns, Rational::zero());
        matrix.push(repeat_n(Rational::zero(), nr_columns + 1).collect());

        let mut basic_row = vec![None; nr_columns];
        for (i, &column) in basis.iter().enumerate() {
            basic_row[column] = Some(i);
        }

        let mut tableau = Self {
            rows: matrix,
            basis,
            basic_row,
            columns,
            locked: vec![false; nr_columns],
            costs,
            relations,
            originals,
        };
        let costs = tableau.costs.clone();
        tableau.price_objective(&costs);

        debug_assert!(tableau.is_consistent());
        tableau
    }

    /// Number of constraint rows, the objective row excluded.
    pub fn nr_rows(&self) -> usize {
        self.basis.len()
    }

    /// Number of columns, the rhs excluded.
    pub fn nr_columns(&self) -> usize {
        self.columns.len()
    }

    /// Number of structural columns.
    pub fn nr_structural(&self) -> usize {
        self.columns.iter().take_while(|label| label.role == ColumnRole::Structural).count()
    }

    /// Coefficient in a constraint row.
    pub fn entry(&self, row: usize, column: usize) -> &Rational {
        debug_assert!(row < self.nr_rows());
        debug_assert!(column < self.nr_columns());

        &self.rows[row][column]
    }

    /// Right-hand side of a constraint row.
    pub fn rhs(&self, row: usize) -> &Rational {
        debug_assert!(row < self.nr_rows());

        &self.rows[row][self.nr_columns()]
    }

    /// Value in the objective row.
    pub fn reduced_cost(&self, column: usize) -> &Rational {
        &self.rows[self.nr_rows()][column]
    }

    /// The rhs of the objective row: minus the objective value of the function that is
    /// currently priced in.
    pub fn objective_row_value(&self) -> &Rational {
        &self.rows[self.nr_rows()][self.nr_columns()]
    }

    /// Column basic in each row.
    pub fn basis(&self) -> &[usize] {
        &self.basis
    }

    /// Whether a column is in the basis.
    pub fn is_basic(&self, column: usize) -> bool {
        self.basic_row[column].is_some()
    }

    /// Label of each column.
    pub fn columns(&self) -> &[ColumnLabel] {
        &self.columns
    }

    /// Label of a single column.
    pub fn label(&self, column: usize) -> &ColumnLabel {
        &self.columns[column]
    }

    /// Relation of a constraint row after sign normalization.
    pub fn relation(&self, row: usize) -> Relation {
        self.relations[row]
    }

    /// Whether a column is excluded from entering the basis.
    pub fn is_locked(&self, column: usize) -> bool {
        self.locked[column]
    }

    /// Exclude every artificial column from entering the basis.
    pub(crate) fn lock_artificials(&mut self) {
        for (locked, label) in self.locked.iter_mut().zip(&self.columns) {
            if label.role == ColumnRole::Artificial {
                *locked = true;
            }
        }
    }

    /// Whether the problem has artificial columns at all.
    pub fn has_artificials(&self) -> bool {
        self.columns.iter().any(|label| label.role == ColumnRole::Artificial)
    }

    /// Rows in which an artificial column is basic, in row order.
    pub fn artificial_rows(&self) -> impl Iterator<Item=usize> + '_ {
        self.basis.iter()
            .enumerate()
            .filter(|&(_, &column)| self.columns[column].role == ColumnRole::Artificial)
            .map(|(row, _)| row)
    }

    /// Minimization form costs of the original objective, one for every column.
    pub fn costs(&self) -> &[Rational] {
        &self.costs
    }

    /// Costs of the auxiliary problem minimizing the sum of the artificial variables.
    pub fn artificial_costs(&self) -> Vec<Rational> {
        self.columns.iter()
            .map(|label| match label.role {
                ColumnRole::Artificial => Rational::one(),
                _ => Rational::zero(),
            })
            .collect()
    }

    /// Reduced costs with respect to the current basis of an arbitrary cost vector.
    ///
    /// # Return value
    ///
    /// For each column `j`, `c_j - sum_i c_basis(i) a_ij`, followed by `-sum_i c_basis(i) b_i`.
    pub fn reduced_costs_of(&self, costs: &[Rational]) -> Vec<Rational> {
        debug_assert_eq!(costs.len(), self.nr_columns());

        let mut reduced = costs.to_vec();
        reduced.push(Rational::zero());
        for (row, &column) in self.basis.iter().enumerate() {
            let cost = &costs[column];
            if cost.is_zero() {
                continue;
            }
            for (target, value) in reduced.iter_mut().zip(&self.rows[row]) {
                if !value.is_zero() {
                    *target -= cost * value;
                }
            }
        }

        reduced
    }

    /// Replace the objective row with the reduced costs of `costs` for the current basis.
    pub(crate) fn price_objective(&mut self, costs: &[Rational]) {
        let reduced = self.reduced_costs_of(costs);
        let objective_row = self.nr_rows();
        self.rows[objective_row] = reduced;
    }

    /// Value of each column in the current basic solution.
    pub fn column_values(&self) -> Vec<Rational> {
        let mut values = vec![Rational::zero(); self.nr_columns()];
        for (row, &column) in self.basis.iter().enumerate() {
            values[column] = self.rhs(row).clone();
        }
        values
    }

    /// Current basic solution in terms of the variables of the original problem.
    pub fn primal_point(&self) -> Vec<Rational> {
        let values = self.column_values();
        self.originals.iter()
            .map(|original| match original {
                OriginalVariable::Shifted { column, shift } => shift + &values[*column],
                OriginalVariable::Reflected { column, upper } => upper - &values[*column],
                OriginalVariable::Split { positive, negative } => &values[*positive] - &values[*negative],
            })
            .collect()
    }

    /// Check the basis bookkeeping and that every basic column is a unit vector.
    ///
    /// Only used for debug purposes.
    pub fn is_consistent(&self) -> bool {
        let dimensions = self.rows.len() == self.nr_rows() + 1
            && self.rows.iter().all(|row| row.len() == self.nr_columns() + 1)
            && self.basic_row.len() == self.nr_columns()
            && self.locked.len() == self.nr_columns()
            && self.costs.len() == self.nr_columns();
        if !dimensions {
            return false;
        }

        let unique = self.basis.iter().collect::<HashSet<_>>().len() == self.nr_rows();
        let mapping = self.basis.iter().enumerate().all(|(i, &j)| self.basic_row[j] == Some(i))
            && self.basic_row.iter().flatten().count() == self.nr_rows();

        unique && mapping && self.basis_is_identity()
    }

    /// Every basic column is the unit vector of its row, including a zero in the objective row.
    pub fn basis_is_identity(&self) -> bool {
        self.basis.iter().enumerate().all(|(i, &j)| {
            self.rows.iter()
                .enumerate()
                .all(|(k, row)| if k == i { row[j].is_one() } else { row[j].is_zero() })
        })
    }

    /// All right-hand sides of the constraint rows are non-negative.
    pub fn is_primal_feasible(&self) -> bool {
        (0..self.nr_rows()).all(|row| !self.rhs(row).is_negative())
    }

    /// All reduced costs of columns that may enter are non-negative.
    pub fn is_optimal(&self) -> bool {
        (0..self.nr_columns())
            .filter(|&column| !self.is_locked(column))
            .all(|column| !self.reduced_cost(column).is_negative())
    }

    /// Every cell, including the rhs and objective row, is stored in lowest terms.
    pub fn is_normalized(&self) -> bool {
        self.rows.iter().flatten().all(Rational::is_in_lowest_terms)
    }
}

impl fmt::Display for Tableau {
    /// A grid with a header of column labels, one row per constraint prefixed by its basic column
    /// and a final objective row `z`. Cells are rendered as `numerator/denominator`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut header = vec![String::new()];
        header.extend(self.columns.iter().map(ToString::to_string));
        header.push("rhs".to_string());

        let mut grid = vec![header];
        for (i, row) in self.rows.iter().enumerate() {
            let name = match self.basis.get(i) {
                Some(&column) => self.columns[column].name.clone(),
                None => "z".to_string(),
            };
            let mut line = vec![name];
            line.extend(row.iter().map(Rational::to_fraction_string));
            grid.push(line);
        }

        let widths = (0..grid[0].len())
            .map(|k| grid.iter().map(|line| line[k].len()).max().unwrap_or(0))
            .collect::<Vec<_>>();
        for line in &grid {
            let cells = line.iter()
                .zip(&widths)
                .map(|(cell, &width)| format!("{cell:>width$}"))
                .collect::<Vec<_>>();
            writeln!(f, "{}", cells.join(" | "))?;
        }

        Ok(())
    }
}
