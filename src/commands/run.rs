//! The `run` command: the post-install/post-update hook body.

use std::sync::Arc;

use anyhow::Result;

use crate::actions::{
    self, Action, Context, Directories, DrupalSettings, GitIgnore, ScaffoldFiles,
};
use crate::cli::{GlobalOpts, RunOpts};
use crate::config::Config;
use crate::logging::{ActionStatus, Logger};
use crate::paths::Paths;

/// Run the provisioning actions in their fixed order.
///
/// The order is part of the contract: directories first, then settings
/// injection, then ignore-list reconciliation, then scaffold file copies.
/// The first fatal error aborts the remaining actions; the summary is still
/// printed so the failed step is visible.
///
/// # Errors
///
/// Returns an error when path resolution, configuration loading, or any
/// action fails.
pub fn run(global: &GlobalOpts, opts: &RunOpts, log: &Arc<Logger>) -> Result<()> {
    let version = option_env!("SCAFFOLD_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"));
    log.info(&format!("scaffold {version}"));

    log.stage("Resolving project layout");
    let paths = Paths::resolve(global.root.as_deref(), global.vendor_dir.as_deref())?;
    log.info(&format!("project: {}", paths.project().display()));
    log.debug(&format!("template package: {}", paths.package().display()));

    log.stage("Loading configuration");
    let config = Config::load(&paths)?;
    log.info(&format!(
        "{} required files, {} optional files, {} directories",
        config.required.len(),
        config.optional.len(),
        config.directories.len()
    ));

    let ctx = Context::new(config, paths, Arc::clone(log), global.dry_run);

    let all_actions: Vec<Box<dyn Action>> = vec![
        Box::new(Directories),
        Box::new(DrupalSettings),
        Box::new(GitIgnore),
        Box::new(ScaffoldFiles),
    ];

    let mut failure = None;
    for action in &all_actions {
        if !selected(action.name(), opts) {
            ctx.log
                .debug(&format!("skipping action: {} (filtered)", action.name()));
            ctx.log
                .record_action(action.name(), ActionStatus::NotApplicable, None);
            continue;
        }
        if let Err(e) = actions::execute(action.as_ref(), &ctx) {
            failure = Some(e);
            break;
        }
    }

    ctx.log.print_summary();

    failure.map_or(Ok(()), Err)
}

/// Apply the `--skip`/`--only` filters to an action name.
///
/// `--only` wins over `--skip`; both match case-insensitively on substrings.
fn selected(name: &str, opts: &RunOpts) -> bool {
    let name = name.to_lowercase();
    if !opts.only.is_empty() {
        return opts.only.iter().any(|o| name.contains(&o.to_lowercase()));
    }
    if !opts.skip.is_empty() {
        return !opts.skip.iter().any(|s| name.contains(&s.to_lowercase()));
    }
    true
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    fn run_opts(skip: &[&str], only: &[&str]) -> RunOpts {
        RunOpts {
            skip: skip.iter().map(ToString::to_string).collect(),
            only: only.iter().map(ToString::to_string).collect(),
        }
    }

    #[test]
    fn selected_with_no_filters() {
        assert!(selected("Scaffold files", &run_opts(&[], &[])));
    }

    #[test]
    fn skip_filters_matching_actions() {
        let opts = run_opts(&["gitignore"], &[]);
        assert!(!selected("Update .gitignore", &opts));
        assert!(selected("Scaffold files", &opts));
    }

    #[test]
    fn only_restricts_to_matching_actions() {
        let opts = run_opts(&[], &["settings"]);
        assert!(selected("Inject settings", &opts));
        assert!(!selected("Create directories", &opts));
    }

    #[test]
    fn only_wins_over_skip() {
        let opts = run_opts(&["settings"], &["settings"]);
        assert!(selected("Inject settings", &opts));
    }
}
