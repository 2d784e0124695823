//! Ensure necessary directories exist.

use anyhow::Result;

use super::{Action, Context};
use crate::tasks::{CreateDirectory, Task};

/// Guarantees the configured set of directories exists, each with a
/// `.gitkeep` placeholder so empty directories survive version control.
///
/// The directories are independent; list order is preserved only so logs are
/// deterministic.
#[derive(Debug, Clone, Copy, Default)]
pub struct Directories;

impl Action for Directories {
    fn name(&self) -> &str {
        "Create directories"
    }

    fn plan(&self, ctx: &Context) -> Result<Vec<Task>> {
        Ok(ctx
            .config
            .directories
            .iter()
            .map(|path| CreateDirectory::new(path.clone(), true).into())
            .collect())
    }
}
