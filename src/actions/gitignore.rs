//! Keep the project's ignore list in sync with generated files.

use anyhow::{Context as _, Result};

use super::{Action, Context};
use crate::tasks::{AppendFile, Task};

/// Appends every required-manifest filename missing from `.gitignore`.
///
/// Required files are regenerated on every run and must never be committed.
/// Reconciliation is opt-in: a project without a `.gitignore` receives no
/// updates. Existing content is never rewritten or removed — the file only
/// grows.
#[derive(Debug, Clone, Copy, Default)]
pub struct GitIgnore;

impl Action for GitIgnore {
    fn name(&self) -> &str {
        "Update .gitignore"
    }

    fn plan(&self, ctx: &Context) -> Result<Vec<Task>> {
        let path = ctx.paths.gitignore_file();
        if !path.is_file() {
            ctx.log.debug("no .gitignore, skipping reconciliation");
            return Ok(vec![]);
        }

        let current = std::fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?;

        let missing: Vec<&str> = ctx
            .config
            .required
            .filenames()
            .filter(|filename| !is_ignored(&current, filename))
            .collect();
        if missing.is_empty() {
            return Ok(vec![]);
        }

        let mut data = String::from("\n");
        for filename in missing {
            data.push_str(filename);
            data.push('\n');
        }

        Ok(vec![AppendFile::new(path, data).into()])
    }
}

/// Whether `filename` is already covered by the ignore list.
///
/// Plain substring search: a filename contained in a longer existing pattern
/// counts as covered. Conservative on purpose — the cost of a missed entry is
/// a duplicate-looking line, so ambiguity resolves toward "already present".
fn is_ignored(content: &str, filename: &str) -> bool {
    content.contains(filename)
}
