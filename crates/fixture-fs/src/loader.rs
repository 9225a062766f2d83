//! Recursive loader for fixture files and directories.
//!
//! Traversal is depth-first and pre-order. Directory entries are visited in
//! the order the OS lists them; no sorting is applied. Symbolic links and
//! other special entries are skipped without being followed.

use crate::{Error, FixtureFile, LoadOptions, Result, io};
use fixture_blocks::decode;
use std::fs;
use std::path::Path;
use tracing::{debug, trace};

/// Loads fixture files with a fixed set of options.
#[derive(Debug, Clone, Default)]
pub struct FixtureLoader {
    options: LoadOptions,
}

impl FixtureLoader {
    /// Create a loader using the default `.` separator.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: LoadOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &LoadOptions {
        &self.options
    }

    /// Load a single file.
    ///
    /// Returns `None` when the file holds neither metadata nor a fixture.
    pub fn load_file(&self, path: &Path) -> Result<Option<FixtureFile>> {
        let content = io::read_text(path)?;

        let Some(parsed) = decode(&content, &self.options.separators) else {
            trace!(path = %path.display(), "No fixtures found");
            return Ok(None);
        };

        let file = FixtureFile::from_parsed(path, parsed);
        debug!(
            path = %path.display(),
            fixtures = file.fixtures.len(),
            "Loaded fixture file"
        );
        Ok(Some(file))
    }

    /// Load a file or every file below a directory.
    ///
    /// # Returns
    ///
    /// Every decoded file, flattened in traversal order. A file without
    /// fixtures or metadata contributes nothing.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<Vec<FixtureFile>> {
        self.load_with(path, |_| {})
    }

    /// Like [`FixtureLoader::load`], calling `on_each` once per decoded file.
    ///
    /// The first I/O error aborts the traversal and is returned; files
    /// already passed to `on_each` are not revisited.
    pub fn load_with<F>(&self, path: impl AsRef<Path>, mut on_each: F) -> Result<Vec<FixtureFile>>
    where
        F: FnMut(&FixtureFile),
    {
        let mut files = Vec::new();
        self.visit(path.as_ref(), &mut on_each, &mut files)?;
        Ok(files)
    }

    fn visit(
        &self,
        path: &Path,
        on_each: &mut dyn FnMut(&FixtureFile),
        files: &mut Vec<FixtureFile>,
    ) -> Result<()> {
        let file_type = fs::symlink_metadata(path)
            .map_err(|e| Error::io(path, e))?
            .file_type();

        if file_type.is_file() {
            if let Some(file) = self.load_file(path)? {
                on_each(&file);
                files.push(file);
            }
        } else if file_type.is_dir() {
            for entry in io::list_dir(path)? {
                self.visit(&entry, on_each, files)?;
            }
        } else {
            trace!(path = %path.display(), "Skipping unsupported entry");
        }

        Ok(())
    }
}
