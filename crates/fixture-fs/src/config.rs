//! Loader options and loader configuration files.

use crate::{Error, Result, io};
use fixture_blocks::{SeparatorSpec, Separators};
use serde::Deserialize;
use std::path::Path;

/// Options controlling how fixture files are decoded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadOptions {
    pub separators: Separators,
}

/// On-disk shape of a loader configuration file.
#[derive(Debug, Default, Deserialize)]
struct OptionsFile {
    #[serde(default)]
    separators: Option<SeparatorSpec>,
}

impl LoadOptions {
    /// Options with the default `.` separator.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_separators(separators: Separators) -> Self {
        Self { separators }
    }

    /// Options from a loosely-typed separator description.
    ///
    /// `"=."` configures the tokens `=` and `.`; a list configures each entry.
    /// Empty or invalid descriptions fall back to the default.
    pub fn from_spec(spec: impl Into<SeparatorSpec>) -> Self {
        Self::with_separators(spec.into().normalize())
    }

    /// Load options from a configuration file.
    ///
    /// Format is detected from file extension:
    /// - `.toml` -> TOML
    /// - `.json` -> JSON
    /// - `.yaml`, `.yml` -> YAML
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = io::read_text(path)?;
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("");

        let parsed: OptionsFile = match extension.to_lowercase().as_str() {
            "toml" => toml::from_str(&content).map_err(|e| Error::ConfigParse {
                path: path.to_path_buf(),
                format: "TOML".into(),
                message: e.to_string(),
            })?,
            "json" => serde_json::from_str(&content).map_err(|e| Error::ConfigParse {
                path: path.to_path_buf(),
                format: "JSON".into(),
                message: e.to_string(),
            })?,
            "yaml" | "yml" => serde_yaml::from_str(&content).map_err(|e| Error::ConfigParse {
                path: path.to_path_buf(),
                format: "YAML".into(),
                message: e.to_string(),
            })?,
            _ => {
                return Err(Error::UnsupportedFormat {
                    extension: extension.to_string(),
                });
            }
        };

        Ok(parsed.separators.map(Self::from_spec).unwrap_or_default())
    }
}

impl From<Separators> for LoadOptions {
    fn from(separators: Separators) -> Self {
        Self::with_separators(separators)
    }
}
