//! Temporary on-disk documents for file-source tests.

use std::fs;

use anyhow::{Context, Result, anyhow};
use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// A document written into its own temporary directory.
///
/// The directory, and the file with it, is removed when the guard drops.
#[must_use = "dropping removes the temporary document"]
pub struct TempDocument {
    path: Utf8PathBuf,
    _dir: TempDir,
}

impl TempDocument {
    /// Writes `contents` to `file_name` inside a fresh temporary directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created, its path is not
    /// valid UTF-8, or the file cannot be written.
    pub fn new(file_name: &str, contents: &str) -> Result<Self> {
        let dir = tempfile::tempdir().context("create temporary directory")?;
        let root = Utf8Path::from_path(dir.path())
            .ok_or_else(|| anyhow!("temporary directory is not valid UTF-8"))?;
        let path = root.join(file_name);
        fs::write(&path, contents).with_context(|| format!("write {path}"))?;
        Ok(Self { path, _dir: dir })
    }

    /// Path of the written document.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }
}
