//! # Integration tests
//!
//! Integration tests completely external from the crate. All code written in this module could be
//! written by an external user of the crate.
//!
//! ## Note
//!
//! The larger Klee-Minty cubes are only solved when the `long_running` feature is enabled.
mod klee_minty;
mod scenarios;

/// Send the solver's logs to the test output, shown for failing tests.
fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}
