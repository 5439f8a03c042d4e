//! # Pivot history
//!
//! Append-only record of every vertex a solve visits. Step 0 is the starting vertex, every
//! further step follows a single pivot.
use std::ops::Index;
use std::slice;

use crate::algorithm::tableau::ColumnLabel;
use crate::data::number_types::rational::Rational;

/// Which objective was being optimized when a step was taken.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Phase {
    /// Minimizing the sum of the artificial variables.
    One,
    /// Optimizing the objective of the problem. Single phase strategies only take these steps.
    Two,
}

/// Snapshot of the basic solution after a pivot.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PivotStep {
    /// Number of pivots performed before this snapshot.
    pub iteration: usize,
    /// Column that entered the basis, absent for step 0.
    pub entering: Option<ColumnLabel>,
    /// Column that left the basis, absent for step 0.
    pub leaving: Option<ColumnLabel>,
    /// Value of each variable of the problem, in declaration order.
    pub primal: Vec<Rational>,
    /// Objective value at `primal`, in the sense of the problem.
    pub objective_value: Rational,
    /// Tableau entry that was pivoted on, absent for step 0.
    pub pivot_element: Option<Rational>,
    /// Phase the step was taken in.
    pub phase: Phase,
    /// `(d x, c x)` in the plane of the shadow vertex rule, absent for other strategies.
    pub shadow: Option<(Rational, Rational)>,
}

/// Ordered sequence of pivot steps.
///
/// Contains one more element than the number of pivots that were performed.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct History {
    steps: Vec<PivotStep>,
}

impl History {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, step: PivotStep) {
        debug_assert_eq!(step.iteration, self.steps.len());
        debug_assert_eq!(step.entering.is_none(), step.iteration == 0);

        self.steps.push(step);
    }

    /// Number of recorded steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Number of pivots performed, one less than the number of steps.
    pub fn nr_pivots(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    /// A step by iteration.
    pub fn get(&self, iteration: usize) -> Option<&PivotStep> {
        self.steps.get(iteration)
    }

    /// The most recent step.
    pub fn last(&self) -> Option<&PivotStep> {
        self.steps.last()
    }

    /// All steps in order.
    pub fn iter(&self) -> slice::Iter<'_, PivotStep> {
        self.steps.iter()
    }

    /// Objective values along the path.
    pub fn objective_values(&self) -> impl Iterator<Item=&Rational> + '_ {
        self.steps.iter().map(|step| &step.objective_value)
    }

    /// The vertices of the path projected on the shadow plane, for the steps that have one.
    ///
    /// For a shadow vertex solve these trace the boundary of the shadow polygon.
    pub fn shadow_points(&self) -> impl Iterator<Item=&(Rational, Rational)> + '_ {
        self.steps.iter().filter_map(|step| step.shadow.as_ref())
    }
}

impl Index<usize> for History {
    type Output = PivotStep;

    fn index(&self, iteration: usize) -> &Self::Output {
        &self.steps[iteration]
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a PivotStep;
    type IntoIter = slice::Iter<'a, PivotStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

impl IntoIterator for History {
    type Item = PivotStep;
    type IntoIter = std::vec::IntoIter<PivotStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}
