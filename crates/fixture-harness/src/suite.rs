//! Suites and cases built from loaded fixture files.

use crate::Result;
use fixture_fs::{FixtureFile, FixtureLoader, LoadOptions};
use std::path::{Path, PathBuf};

/// One fixture as a test case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Case {
    /// Fixture header, or `line N` when the fixture has none.
    pub name: String,
    /// 0-based line of the fixture's opening separator.
    pub line: usize,
    pub input: String,
    pub expected: String,
}

/// All cases from one fixture file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suite {
    /// The file's `desc` metadata, or its path relative to the walked root.
    pub name: String,
    /// Set by truthy `skip` metadata.
    pub skip: bool,
    pub file: PathBuf,
    pub cases: Vec<Case>,
}

impl Suite {
    /// Build a suite for `file`, naming it relative to `root` when the file
    /// carries no description.
    pub fn from_file(root: &Path, file: &FixtureFile) -> Self {
        let name = file
            .description()
            .unwrap_or_else(|| relative_name(root, file.path()));

        let cases = file
            .fixtures
            .iter()
            .map(|fixture| Case {
                name: fixture.label(),
                line: fixture.separator_line(),
                input: fixture.first.text.clone(),
                expected: fixture.second.text.clone(),
            })
            .collect();

        Self {
            name,
            skip: file.is_skipped(),
            file: file.path.clone(),
            cases,
        }
    }
}

fn relative_name(root: &Path, path: &Path) -> String {
    match path.strip_prefix(root) {
        Ok(rel) if !rel.as_os_str().is_empty() => rel.display().to_string(),
        _ => path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string()),
    }
}

/// Load every fixture file under `root` and turn each into a suite.
pub fn collect(root: impl AsRef<Path>, options: &LoadOptions) -> Result<Vec<Suite>> {
    let root = root.as_ref();
    let loader = FixtureLoader::with_options(options.clone());

    let mut suites = Vec::new();
    loader.load_with(root, |file| suites.push(Suite::from_file(root, file)))?;
    Ok(suites)
}
