//! Shared test utilities for the fixture-loader workspace.
//!
//! This crate is a dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`tree`] — [`FixtureTree`] builder for temporary fixture directories

pub mod tree;

pub use tree::FixtureTree;
