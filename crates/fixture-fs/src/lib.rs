//! Recursive fixture file loading.
//!
//! Walks files and directories, decodes each file with
//! [`fixture_blocks::decode`] and enriches the result with its source path
//! and YAML-decoded metadata.

pub mod config;
pub mod error;
pub mod file;
pub mod io;
pub mod loader;
pub mod meta;

pub use config::LoadOptions;
pub use error::{Error, Result};
pub use file::FixtureFile;
pub use loader::FixtureLoader;
