//! File append primitive.

use std::io::Write as _;
use std::path::PathBuf;

use crate::error::TaskError;

/// Append data verbatim to the end of a file, creating it if absent.
///
/// The append is unconditional. Any idempotency decision (marker checks,
/// membership tests) belongs to the planner that constructs the task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppendFile {
    /// File the data is appended to.
    pub path: PathBuf,
    /// Data appended verbatim.
    pub data: String,
}

impl AppendFile {
    /// Create a new append task.
    #[must_use]
    pub const fn new(path: PathBuf, data: String) -> Self {
        Self { path, data }
    }

    /// Human-readable description of the operation.
    #[must_use]
    pub fn description(&self) -> String {
        format!("append {} bytes to {}", self.data.len(), self.path.display())
    }

    /// Execute the append.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::Io`] when the file cannot be opened or written.
    pub fn execute(&self) -> Result<(), TaskError> {
        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| TaskError::io("open for append", &self.path, source))?;
        file.write_all(self.data.as_bytes())
            .map_err(|source| TaskError::io("append to", &self.path, source))?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn appends_to_existing_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join(".gitignore");
        std::fs::write(&path, "vendor/\n").unwrap();

        AppendFile::new(path.clone(), "\ndsh\n".to_string())
            .execute()
            .unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "vendor/\n\ndsh\n"
        );
    }

    #[test]
    fn creates_missing_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("notes.txt");

        AppendFile::new(path.clone(), "first".to_string())
            .execute()
            .unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "first");
    }

    #[test]
    fn append_is_unconditional() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("file.txt");
        let task = AppendFile::new(path.clone(), "x".to_string());
        task.execute().unwrap();
        task.execute().unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "xx");
    }

    #[test]
    fn data_is_written_verbatim() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("file.txt");
        let data = "\nline one\n  indented\ttabbed\n".to_string();
        AppendFile::new(path.clone(), data.clone())
            .execute()
            .unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), data);
    }
}
