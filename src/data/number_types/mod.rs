//! # Number types
//!
//! All algorithms in this crate work over the rationals. Values are exact: no operation rounds,
//! so two runs over the same input compute bit-for-bit the same numbers.
pub mod rational;
