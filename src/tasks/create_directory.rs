//! Directory creation primitive.

use std::path::PathBuf;

use crate::error::TaskError;

/// Name of the placeholder file that keeps empty directories under version
/// control.
pub const GIT_KEEP: &str = ".gitkeep";

/// Ensure a directory exists, optionally with a `.gitkeep` placeholder.
///
/// Missing ancestors are created. An already-existing directory is not an
/// error, and an existing placeholder is left untouched (create-or-touch,
/// never recreate).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateDirectory {
    /// Directory to create.
    pub path: PathBuf,
    /// Ensure a `.gitkeep` placeholder inside the directory.
    pub git_keep: bool,
}

impl CreateDirectory {
    /// Create a new directory task.
    #[must_use]
    pub const fn new(path: PathBuf, git_keep: bool) -> Self {
        Self { path, git_keep }
    }

    /// Human-readable description of the operation.
    #[must_use]
    pub fn description(&self) -> String {
        if self.git_keep {
            format!("create directory {} (+{GIT_KEEP})", self.path.display())
        } else {
            format!("create directory {}", self.path.display())
        }
    }

    /// Execute the operation.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::Io`] when directory creation or the placeholder
    /// touch fails.
    pub fn execute(&self) -> Result<(), TaskError> {
        if !self.path.exists() {
            std::fs::create_dir_all(&self.path)
                .map_err(|source| TaskError::io("create directory", &self.path, source))?;
        }

        if self.git_keep {
            let keep = self.path.join(GIT_KEEP);
            std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&keep)
                .map_err(|source| TaskError::io("touch placeholder", keep, source))?;
        }

        Ok(())
    }
}
