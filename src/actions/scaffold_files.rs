//! Materialize the scaffold file manifests into the project.

use anyhow::Result;

use super::{Action, Context};
use crate::config::ManifestEntry;
use crate::tasks::{CopyFile, Task};

/// Copies the required manifest (always replacing the destination) followed
/// by the optional manifest (leaving existing destinations alone).
///
/// Destinations never collide between the two manifests; the
/// required-before-optional order only keeps output deterministic.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScaffoldFiles;

impl Action for ScaffoldFiles {
    fn name(&self) -> &str {
        "Scaffold files"
    }

    fn plan(&self, ctx: &Context) -> Result<Vec<Task>> {
        let to_task = |entry: &ManifestEntry| -> Task {
            CopyFile::new(
                entry.origin_dir.clone(),
                ctx.paths.project().to_path_buf(),
                entry.filename.clone(),
                entry.overwrite_existing,
            )
            .into()
        };

        Ok(ctx
            .config
            .required
            .entries()
            .iter()
            .chain(ctx.config.optional.entries())
            .map(to_task)
            .collect())
    }
}
