//! File copy primitive.

use std::path::PathBuf;

use crate::error::TaskError;

/// Copy `origin_dir/filename` to `destination/filename`.
///
/// When `overwrite_existing` is `false` and the destination file is already
/// present — whatever its origin — the copy succeeds as a no-op. Otherwise
/// the destination is replaced byte-for-byte, creating parent directories as
/// needed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyFile {
    /// Directory holding the origin file.
    pub origin_dir: PathBuf,
    /// Directory the file lands in.
    pub destination: PathBuf,
    /// Path of the file relative to both directories.
    pub filename: String,
    /// Replace an existing destination file when `true`.
    pub overwrite_existing: bool,
}

impl CopyFile {
    /// Create a new copy task.
    #[must_use]
    pub const fn new(
        origin_dir: PathBuf,
        destination: PathBuf,
        filename: String,
        overwrite_existing: bool,
    ) -> Self {
        Self {
            origin_dir,
            destination,
            filename,
            overwrite_existing,
        }
    }

    /// Human-readable description of the copy.
    #[must_use]
    pub fn description(&self) -> String {
        format!(
            "copy {} -> {}",
            self.origin_dir.join(&self.filename).display(),
            self.destination.join(&self.filename).display()
        )
    }

    /// Execute the copy.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::MissingOrigin`] when the origin file does not
    /// exist, or [`TaskError::Io`] when directory creation or the copy itself
    /// fails.
    pub fn execute(&self) -> Result<(), TaskError> {
        let target = self.destination.join(&self.filename);

        // Files that must survive user edits are simply left alone.
        if !self.overwrite_existing && target.exists() {
            return Ok(());
        }

        let origin = self.origin_dir.join(&self.filename);
        if !origin.is_file() {
            return Err(TaskError::MissingOrigin { origin });
        }

        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|source| TaskError::io("create parent directory", parent, source))?;
        }

        std::fs::copy(&origin, &target)
            .map_err(|source| TaskError::io("copy to", target, source))?;
        Ok(())
    }
}
