//! Decoded fixture file with its source path and metadata.

use crate::meta;
use fixture_blocks::{Fixture, ParsedText};
use serde::Serialize;
use serde_yaml::Value;
use std::path::{Path, PathBuf};

/// A fixture file after loading: decoded metadata plus fixtures.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FixtureFile {
    /// Path the file was read from, as passed to the loader.
    pub path: PathBuf,
    /// Decoded YAML metadata. `None` when absent or undecodable.
    pub meta: Option<Value>,
    pub fixtures: Vec<Fixture>,
}

impl FixtureFile {
    /// Attach a source path and decode the raw metadata of `parsed`.
    pub fn from_parsed(path: impl Into<PathBuf>, parsed: ParsedText) -> Self {
        Self {
            path: path.into(),
            meta: meta::decode_meta(&parsed.meta),
            fixtures: parsed.fixtures,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Look up a top-level metadata key.
    pub fn meta_field(&self, key: &str) -> Option<&Value> {
        self.meta.as_ref()?.get(key)
    }

    /// The `desc` metadata rendered as text, if it is a scalar.
    pub fn description(&self) -> Option<String> {
        self.meta_field("desc").and_then(meta::scalar_text)
    }

    /// True when the `skip` metadata is truthy.
    pub fn is_skipped(&self) -> bool {
        self.meta_field("skip").is_some_and(meta::is_truthy)
    }
}
