//! # Problems shared by the unit tests.
//!
//! Convention for function names:
//!
//! * `fn create()`: the problem as a `LinearProgram`
//! * `fn expected_path()`: primal points visited by Dantzig's rule, starting vertex included
pub mod klee_minty;
