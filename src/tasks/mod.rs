//! Primitive filesystem operations.
//!
//! Each primitive is a plain value carrying every argument it needs, with a
//! single fallible `execute` and a human-readable `description`. Actions
//! *plan* lists of these values from current disk state; nothing here makes
//! idempotency decisions beyond what the individual contract states (a copy
//! that must not overwrite, a directory that already exists). The set is
//! closed: [`Task`] dispatches over exactly these four operations.

pub mod append_file;
pub mod copy_file;
pub mod create_directory;
pub mod delete_file;

pub use append_file::AppendFile;
pub use copy_file::CopyFile;
pub use create_directory::CreateDirectory;
pub use delete_file::DeleteFile;

use crate::error::TaskError;

/// A single declarative filesystem operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Task {
    /// Copy one file from the template package into the project.
    Copy(CopyFile),
    /// Ensure a directory (and optional placeholder) exists.
    CreateDir(CreateDirectory),
    /// Append data to a file, creating it if absent.
    Append(AppendFile),
    /// Remove a file if present.
    Delete(DeleteFile),
}

impl Task {
    /// Execute the operation.
    ///
    /// # Errors
    ///
    /// Returns a [`TaskError`] when the underlying filesystem call fails or a
    /// copy origin is missing.
    pub fn execute(&self) -> Result<(), TaskError> {
        match self {
            Self::Copy(task) => task.execute(),
            Self::CreateDir(task) => task.execute(),
            Self::Append(task) => task.execute(),
            Self::Delete(task) => task.execute(),
        }
    }

    /// Human-readable description of the operation, for logging.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::Copy(task) => task.description(),
            Self::CreateDir(task) => task.description(),
            Self::Append(task) => task.description(),
            Self::Delete(task) => task.description(),
        }
    }
}

impl From<CopyFile> for Task {
    fn from(task: CopyFile) -> Self {
        Self::Copy(task)
    }
}

impl From<CreateDirectory> for Task {
    fn from(task: CreateDirectory) -> Self {
        Self::CreateDir(task)
    }
}

impl From<AppendFile> for Task {
    fn from(task: AppendFile) -> Self {
        Self::Append(task)
    }
}

impl From<DeleteFile> for Task {
    fn from(task: DeleteFile) -> Self {
        Self::Delete(task)
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn dispatch_reaches_each_variant() {
        let tmp = tempfile::tempdir().unwrap();

        let dir: Task = CreateDirectory::new(tmp.path().join("d"), false).into();
        dir.execute().unwrap();
        assert!(tmp.path().join("d").is_dir());

        let append: Task = AppendFile::new(tmp.path().join("f.txt"), "hi".to_string()).into();
        append.execute().unwrap();
        assert_eq!(std::fs::read_to_string(tmp.path().join("f.txt")).unwrap(), "hi");

        let delete: Task = DeleteFile::new(tmp.path().to_path_buf(), "f.txt".to_string()).into();
        delete.execute().unwrap();
        assert!(!tmp.path().join("f.txt").exists());

        std::fs::write(tmp.path().join("src.txt"), "content").unwrap();
        let copy: Task = CopyFile::new(
            tmp.path().to_path_buf(),
            tmp.path().join("out"),
            "src.txt".to_string(),
            true,
        )
        .into();
        copy.execute().unwrap();
        assert!(tmp.path().join("out/src.txt").is_file());
    }

    #[test]
    fn descriptions_name_the_affected_paths() {
        let task: Task = CreateDirectory::new(PathBuf::from("/p/web/modules"), true).into();
        assert!(task.description().contains("/p/web/modules"));

        let task: Task = AppendFile::new(PathBuf::from("/p/.gitignore"), "x".to_string()).into();
        assert!(task.description().contains("/p/.gitignore"));
    }
}
