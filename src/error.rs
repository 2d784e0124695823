//! Domain-specific error types for the scaffolding engine.
//!
//! This module provides a structured error hierarchy using [`thiserror`].
//! Internal modules return typed errors (e.g., [`TaskError`], [`ConfigError`])
//! while command handlers at the CLI boundary convert them to [`anyhow::Error`]
//! via the standard `?` operator.
//!
//! # Error hierarchy
//!
//! ```text
//! ScaffoldError
//! ├── Paths(PathsError)   — project/vendor root resolution
//! ├── Config(ConfigError) — manifest loading and validation
//! └── Task(TaskError)     — primitive filesystem operation failures
//! ```
//!
//! Everything here is fatal: the first error aborts the remaining tasks and
//! actions. Conditions the engine treats as "nothing to do" (missing settings
//! target, marker already present, optional file already in place) never
//! surface as errors.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for the scaffolding engine.
///
/// Aggregates domain-specific sub-errors and is convertible to
/// [`anyhow::Error`] for use at CLI command boundaries.
#[derive(Error, Debug)]
pub enum ScaffoldError {
    /// Path resolution error (project root, vendor directory).
    #[error("Path resolution error: {0}")]
    Paths(#[from] PathsError),

    /// Configuration error (manifest loading, duplicate entries).
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Task execution error (copy, mkdir, append, remove failures).
    #[error("Task error: {0}")]
    Task(#[from] TaskError),
}

/// Errors that arise while resolving the install environment's directories.
#[derive(Error, Debug)]
pub enum PathsError {
    /// No project root could be determined from flags, environment, or the
    /// current directory.
    #[error(
        "cannot determine project root: no composer.json found. \
         Use --root or set SCAFFOLD_ROOT"
    )]
    ProjectRootNotFound,

    /// A resolved directory could not be canonicalized.
    #[error("cannot canonicalize {}: {source}", path.display())]
    Canonicalize {
        /// Directory that failed to canonicalize.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

/// Errors that arise from manifest configuration loading and validation.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An I/O error occurred while reading a config file.
    #[error("IO error reading config file {}: {source}", path.display())]
    Io {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The config file contains a syntax error that prevents parsing.
    #[error("invalid TOML in {}: {source}", path.display())]
    Parse {
        /// Path to the unparseable file.
        path: PathBuf,
        /// Underlying TOML error.
        source: toml::de::Error,
    },

    /// The same `(origin, filename)` pair appears twice in one manifest.
    #[error("duplicate manifest entry '{filename}'")]
    DuplicateEntry {
        /// Filename listed more than once.
        filename: String,
    },
}

/// Errors raised by the task primitives.
#[derive(Error, Debug)]
pub enum TaskError {
    /// A copy task's source file does not exist in the template package.
    #[error("origin file does not exist: {}", origin.display())]
    MissingOrigin {
        /// Full path of the missing origin file.
        origin: PathBuf,
    },

    /// A filesystem call failed (mkdir, copy, append, remove, touch).
    #[error("{action} {}: {source}", path.display())]
    Io {
        /// Operation that failed (e.g., `"copy to"`, `"create directory"`).
        action: &'static str,
        /// Path the operation was applied to.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

impl TaskError {
    /// Wrap an I/O failure with the operation name and affected path.
    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            action,
            path: path.into(),
            source,
        }
    }
}
