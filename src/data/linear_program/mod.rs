//! # Representing linear programs
//!
//! The problem model callers build, the errors that can occur while building it, and the
//! solutions a solve produces.
pub mod elements;
pub mod error;
pub mod general_form;
pub mod solution;
