//! File removal primitive.

use std::path::PathBuf;

use crate::error::TaskError;

/// Remove `path/filename` when it exists; no-op otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteFile {
    /// Directory holding the file.
    pub path: PathBuf,
    /// Path of the file relative to the directory.
    pub filename: String,
}

impl DeleteFile {
    /// Create a new delete task.
    #[must_use]
    pub const fn new(path: PathBuf, filename: String) -> Self {
        Self { path, filename }
    }

    /// Human-readable description of the operation.
    #[must_use]
    pub fn description(&self) -> String {
        format!("delete {}", self.path.join(&self.filename).display())
    }

    /// Execute the removal.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::Io`] when an existing target cannot be removed.
    pub fn execute(&self) -> Result<(), TaskError> {
        let target = self.path.join(&self.filename);
        let Ok(metadata) = std::fs::symlink_metadata(&target) else {
            return Ok(());
        };

        if metadata.is_dir() {
            std::fs::remove_dir_all(&target)
                .map_err(|source| TaskError::io("remove directory", target, source))?;
        } else {
            std::fs::remove_file(&target)
                .map_err(|source| TaskError::io("remove file", target, source))?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn removes_existing_file() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("stale.yml"), b"x").unwrap();

        DeleteFile::new(tmp.path().to_path_buf(), "stale.yml".to_string())
            .execute()
            .unwrap();
        assert!(!tmp.path().join("stale.yml").exists());
    }

    #[test]
    fn missing_file_is_a_no_op() {
        let tmp = tempfile::tempdir().unwrap();
        DeleteFile::new(tmp.path().to_path_buf(), "absent.yml".to_string())
            .execute()
            .unwrap();
    }

    #[test]
    fn removes_directories_recursively() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(tmp.path().join("docker/conf")).unwrap();
        std::fs::write(tmp.path().join("docker/conf/php.ini"), b"x").unwrap();

        DeleteFile::new(tmp.path().to_path_buf(), "docker".to_string())
            .execute()
            .unwrap();
        assert!(!tmp.path().join("docker").exists());
    }
}
