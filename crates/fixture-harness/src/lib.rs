//! Turns fixture files into runnable test suites.
//!
//! Every decoded file becomes a [`Suite`] and every fixture in it a
//! [`Case`]. [`run`] feeds each case's input through a transform and compares
//! the output with the expected block, producing a [`Report`].
//!
//! ```rust,no_run
//! use fixture_fs::LoadOptions;
//!
//! fixture_harness::assert_fixtures("tests/fixtures", &LoadOptions::default(), |input| {
//!     input.to_uppercase()
//! });
//! ```

pub mod error;
pub mod logging;
pub mod runner;
pub mod suite;

pub use error::{Error, Result};
pub use runner::{CaseResult, Outcome, Report, assert_fixtures, run};
pub use suite::{Case, Suite, collect};
