//! # Pivot engine
//!
//! Entering and leaving selection rules that all strategies share, and the exact row reduction
//! that moves the tableau from one basis to the next.
use num_traits::{One, Zero};

use crate::algorithm::tableau::Tableau;
use crate::data::number_types::rational::Rational;

/// Columns that may enter: not basic, not locked, with a negative reduced cost.
///
/// # Return value
///
/// Iterator of `(column, reduced cost)` tuples in column order.
pub fn improving_columns(tableau: &Tableau) -> impl Iterator<Item=(usize, &Rational)> + '_ {
    (0..tableau.nr_columns())
        .filter(|&column| !tableau.is_basic(column) && !tableau.is_locked(column))
        .map(|column| (column, tableau.reduced_cost(column)))
        .filter(|(_, cost)| cost.is_negative())
}

/// Dantzig's rule: the column with the most negative reduced cost, lowest index on ties.
///
/// # Return value
///
/// `None` if no column improves the objective, meaning the current basis is optimal.
pub fn select_entering_column(tableau: &Tableau) -> Option<usize> {
    let mut best: Option<(usize, &Rational)> = None;
    for (column, cost) in improving_columns(tableau) {
        match best {
            Some((_, best_cost)) if cost >= best_cost => {},
            _ => best = Some((column, cost)),
        }
    }

    best.map(|(column, _)| column)
}

/// Bland's rule: the lowest index column with a negative reduced cost.
pub fn select_entering_column_bland(tableau: &Tableau) -> Option<usize> {
    improving_columns(tableau).next().map(|(column, _)| column)
}

/// Minimum ratio test.
///
/// Only rows with a strictly positive entry in `column` are considered. Ties are broken by
/// choosing the row with the lowest basic column index (Bland's anti cycling rule).
///
/// # Return value
///
/// `None` if no entry in the column is positive, meaning the column is an unbounded direction.
pub fn select_leaving_row(tableau: &Tableau, column: usize) -> Option<usize> {
    // (chosen row, minimum ratio, corresponding leaving column)
    let mut min_values: Option<(usize, Rational, usize)> = None;
    for row in 0..tableau.nr_rows() {
        let xij = tableau.entry(row, column);
        if !xij.is_positive() {
            continue;
        }

        let ratio = tableau.rhs(row) / xij;
        let leaving_column = tableau.basis()[row];
        match &mut min_values {
            Some((min_row, min_ratio, min_leaving_column)) => {
                if &ratio == min_ratio && leaving_column < *min_leaving_column {
                    *min_row = row;
                    *min_leaving_column = leaving_column;
                } else if &ratio < min_ratio {
                    *min_row = row;
                    *min_ratio = ratio;
                    *min_leaving_column = leaving_column;
                }
            },
            None => min_values = Some((row, ratio, leaving_column)),
        }
    }

    min_values.map(|(row, _, _)| row)
}

/// Bring `column` into the basis in `row`.
///
/// The pivot row is divided by the pivot element, after which the column is eliminated from all
/// other rows, the objective row included. All arithmetic is exact and every value is kept in
/// lowest terms.
///
/// # Arguments
///
/// * `row`: Constraint row whose basic column leaves.
/// * `column`: Non-basic column with a nonzero entry in `row`.
///
/// # Return value
///
/// The pivot element, that is, the value of the entry before the pivot.
pub(crate) fn pivot(tableau: &mut Tableau, row: usize, column: usize) -> Rational {
    debug_assert!(row < tableau.nr_rows());
    debug_assert!(!tableau.is_basic(column));
    debug_assert!(!tableau.entry(row, column).is_zero());

    let pivot_element = tableau.rows[row][column].clone();
    if !pivot_element.is_one() {
        for value in &mut tableau.rows[row] {
            if !value.is_zero() {
                *value /= &pivot_element;
            }
        }
    }

    let pivot_row = std::mem::take(&mut tableau.rows[row]);
    for (i, other) in tableau.rows.iter_mut().enumerate() {
        if i == row || other[column].is_zero() {
            continue;
        }

        let factor = other[column].clone();
        for (target, value) in other.iter_mut().zip(&pivot_row) {
            if !value.is_zero() {
                *target -= &factor * value;
            }
        }
        debug_assert!(other[column].is_zero());
    }
    tableau.rows[row] = pivot_row;

    let leaving = tableau.basis[row];
    tableau.basic_row[leaving] = None;
    tableau.basic_row[column] = Some(row);
    tableau.basis[row] = column;

    debug_assert!(tableau.is_normalized());
    pivot_element
}
