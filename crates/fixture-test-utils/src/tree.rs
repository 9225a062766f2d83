//! [`FixtureTree`] builder for fixture directory scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory populated with fixture files.
///
/// # Example
///
/// ```rust,no_run
/// use fixture_test_utils::FixtureTree;
///
/// let tree = FixtureTree::new()
///     .with_file("basic.txt", ".\na\n.\nb\n.\n")
///     .with_file("nested/more.txt", ".\nc\n.\nd\n.\n");
/// tree.assert_file_exists("nested/more.txt");
/// ```
pub struct FixtureTree {
    temp_dir: TempDir,
}

impl Default for FixtureTree {
    fn default() -> Self {
        Self::new()
    }
}

impl FixtureTree {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of `rel` inside the tree.
    pub fn path(&self, rel: &str) -> PathBuf {
        self.root().join(rel)
    }

    /// Write `content` to `rel`, creating parent directories as needed.
    pub fn write_file(&self, rel: &str, content: impl AsRef<[u8]>) -> PathBuf {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    /// Builder form of [`FixtureTree::write_file`].
    pub fn with_file(self, rel: &str, content: impl AsRef<[u8]>) -> Self {
        self.write_file(rel, content);
        self
    }

    /// Create an empty directory at `rel`.
    pub fn create_dir(&self, rel: &str) -> PathBuf {
        let path = self.path(rel);
        fs::create_dir_all(&path).unwrap();
        path
    }

    /// Create a symbolic link at `link` pointing to `target` (both relative).
    #[cfg(unix)]
    pub fn symlink(&self, target: &str, link: &str) -> PathBuf {
        let link_path = self.path(link);
        std::os::unix::fs::symlink(self.path(target), &link_path).unwrap();
        link_path
    }

    /// Assert that `rel` exists inside the tree.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_file_exists(&self, rel: &str) {
        let full_path = self.path(rel);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }
}
