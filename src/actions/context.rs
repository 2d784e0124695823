//! Shared context for action planning and execution.

use std::sync::Arc;

use crate::config::Config;
use crate::logging::Logger;
use crate::paths::Paths;
use crate::salt::{OsSaltSource, SaltSource};

/// Everything an action needs: configuration, the resolved directory layout,
/// the logger, the dry-run flag, and the injected random-byte source.
#[derive(Debug)]
pub struct Context {
    /// Manifests, directory list, and settings parameters.
    pub config: Config,
    /// Resolved directory layout.
    pub paths: Paths,
    /// Logger for output and action recording.
    pub log: Arc<Logger>,
    /// Whether to log planned tasks without applying them.
    pub dry_run: bool,
    /// Random-byte source for salt generation (injectable for testing).
    pub salt: Arc<dyn SaltSource>,
}

impl Context {
    /// Create a context with the production salt source.
    #[must_use]
    pub fn new(config: Config, paths: Paths, log: Arc<Logger>, dry_run: bool) -> Self {
        Self {
            config,
            paths,
            log,
            dry_run,
            salt: Arc::new(OsSaltSource),
        }
    }

    /// Replace the salt source, keeping everything else.
    ///
    /// Used in tests to make the injected settings content deterministic.
    #[must_use]
    pub fn with_salt(mut self, salt: Arc<dyn SaltSource>) -> Self {
        self.salt = salt;
        self
    }
}
