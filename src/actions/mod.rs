//! Provisioning actions: plan from current disk state, then execute.
//!
//! Each action is a pure planner — it inspects the project tree and the
//! configuration and produces zero or more [`Task`] values — plus the shared
//! [`execute`] driver that runs a plan strictly in order and fail-fast. An
//! empty plan means the action found nothing to do, which is a success, not
//! an error. Actions never talk to each other; the filesystem they share is
//! the only channel.

mod context;
pub mod directories;
pub mod gitignore;
pub mod scaffold_files;
pub mod settings;

pub use context::Context;
pub use directories::Directories;
pub use gitignore::GitIgnore;
pub use scaffold_files::ScaffoldFiles;
pub use settings::DrupalSettings;

use anyhow::Result;

use crate::logging::ActionStatus;
use crate::tasks::Task;

/// A provisioning step with a pure planning phase.
pub trait Action {
    /// Human-readable action name.
    fn name(&self) -> &str;

    /// Compute the tasks this action needs, from configuration and the
    /// current state of the project tree. Planning performs no writes.
    ///
    /// # Errors
    ///
    /// Returns an error when the state needed to plan cannot be read (e.g.,
    /// an unreadable settings template).
    fn plan(&self, ctx: &Context) -> Result<Vec<Task>>;
}

/// Plan and run one action, recording its outcome in the logger.
///
/// Tasks run strictly in plan order. The first task failure aborts the
/// remaining tasks and propagates, so the orchestrator stops the run.
///
/// # Errors
///
/// Returns an error when planning fails or a task fails.
pub fn execute(action: &dyn Action, ctx: &Context) -> Result<()> {
    ctx.log.stage(action.name());

    let tasks = match action.plan(ctx) {
        Ok(tasks) => tasks,
        Err(e) => {
            ctx.log.error(&format!("{}: {e:#}", action.name()));
            ctx.log
                .record_action(action.name(), ActionStatus::Failed, Some(&format!("{e:#}")));
            return Err(e);
        }
    };

    if tasks.is_empty() {
        ctx.log.debug("nothing to do");
        ctx.log
            .record_action(action.name(), ActionStatus::Skipped, Some("nothing to do"));
        return Ok(());
    }

    if ctx.dry_run {
        for task in &tasks {
            ctx.log.dry_run(&format!("would {}", task.description()));
        }
        ctx.log
            .record_action(action.name(), ActionStatus::DryRun, None);
        return Ok(());
    }

    for task in &tasks {
        ctx.log.debug(&task.description());
        if let Err(e) = task.execute() {
            ctx.log.error(&format!("{}: {e}", action.name()));
            ctx.log
                .record_action(action.name(), ActionStatus::Failed, Some(&e.to_string()));
            return Err(e.into());
        }
    }

    ctx.log.info(&format!("{} operation(s) applied", tasks.len()));
    ctx.log.record_action(action.name(), ActionStatus::Ok, None);
    Ok(())
}


#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::test_helpers::{make_context, setup_layout};
    use super::*;
    use crate::tasks::CreateDirectory;

    /// A mock action for testing `execute()`.
    struct MockAction {
        name: &'static str,
        tasks: Vec<Task>,
        plan_error: bool,
    }

    impl Action for MockAction {
        fn name(&self) -> &str {
            self.name
        }
        fn plan(&self, _ctx: &Context) -> Result<Vec<Task>> {
            if self.plan_error {
                anyhow::bail!("cannot read state")
            }
            Ok(self.tasks.clone())
        }
    }

    #[test]
    fn empty_plan_records_skipped() {
        let tmp = tempfile::tempdir().unwrap();
        let ctx = make_context(setup_layout(tmp.path()));
        let action = MockAction {
            name: "noop",
            tasks: vec![],
            plan_error: false,
        };

        execute(&action, &ctx).unwrap();
        let entries = ctx.log.entries();
        assert_eq!(entries[0].status, ActionStatus::Skipped);
    }

    #[test]
    fn tasks_run_and_record_ok() {
        let tmp = tempfile::tempdir().unwrap();
        let ctx = make_context(setup_layout(tmp.path()));
        let dir = tmp.path().join("made");
        let action = MockAction {
            name: "mkdir",
            tasks: vec![CreateDirectory::new(dir.clone(), false).into()],
            plan_error: false,
        };

        execute(&action, &ctx).unwrap();
        assert!(dir.is_dir());
        assert_eq!(
            ctx.log.entries()[0].status,
            ActionStatus::Ok
        );
    }

    #[test]
    fn dry_run_applies_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let mut ctx = make_context(setup_layout(tmp.path()));
        ctx.dry_run = true;
        let dir = tmp.path().join("not-made");
        let action = MockAction {
            name: "mkdir",
            tasks: vec![CreateDirectory::new(dir.clone(), false).into()],
            plan_error: false,
        };

        execute(&action, &ctx).unwrap();
        assert!(!dir.exists());
        assert_eq!(
            ctx.log.entries()[0].status,
            ActionStatus::DryRun
        );
    }

    #[test]
    fn plan_error_records_failed_and_propagates() {
        let tmp = tempfile::tempdir().unwrap();
        let ctx = make_context(setup_layout(tmp.path()));
        let action = MockAction {
            name: "broken",
            tasks: vec![],
            plan_error: true,
        };

        assert!(execute(&action, &ctx).is_err());
        assert!(ctx.log.has_failures());
    }

    #[test]
    fn task_error_aborts_remaining_tasks() {
        let tmp = tempfile::tempdir().unwrap();
        let ctx = make_context(setup_layout(tmp.path()));
        let after = tmp.path().join("after");
        let action = MockAction {
            name: "partial",
            tasks: vec![
                crate::tasks::CopyFile::new(
                    tmp.path().join("missing-origin"),
                    tmp.path().join("dest"),
                    "file".to_string(),
                    true,
                )
                .into(),
                CreateDirectory::new(after.clone(), false).into(),
            ],
            plan_error: false,
        };

        assert!(execute(&action, &ctx).is_err());
        assert!(!after.exists(), "tasks after the failure must not run");
        assert!(ctx.log.has_failures());
    }
}
