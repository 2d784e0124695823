//! Structured logger with dry-run awareness and summary collection.

use std::sync::Mutex;

/// Result of one orchestrated action, kept for summary reporting.
#[derive(Debug, Clone)]
pub struct ActionEntry {
    /// Human-readable action name.
    pub name: String,
    /// Final status of the action.
    pub status: ActionStatus,
    /// Optional detail message (e.g., skip reason or error description).
    pub message: Option<String>,
}

/// Status of a completed action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionStatus {
    /// Action completed successfully.
    Ok,
    /// Action was filtered out by `--skip`/`--only`.
    NotApplicable,
    /// Action found nothing to do.
    Skipped,
    /// Action ran in dry-run mode; no changes were applied.
    DryRun,
    /// Action encountered an error and could not complete.
    Failed,
}

/// Structured logger backed by [`tracing`].
///
/// Display output is routed through the subscriber installed by
/// [`init_subscriber`](super::init_subscriber); this type only adds the
/// per-action status ledger and the run summary.
#[derive(Debug, Default)]
pub struct Logger {
    actions: Mutex<Vec<ActionEntry>>,
}

impl Logger {
    /// Create a new logger with an empty action ledger.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            actions: Mutex::new(Vec::new()),
        }
    }

    /// Log an error message.
    pub fn error(&self, msg: &str) {
        tracing::error!("{msg}");
    }

    /// Log a warning message.
    pub fn warn(&self, msg: &str) {
        tracing::warn!("{msg}");
    }

    /// Log a stage header (major section).
    pub fn stage(&self, msg: &str) {
        tracing::info!(target: "scaffold::stage", "{msg}");
    }

    /// Log an informational message.
    pub fn info(&self, msg: &str) {
        tracing::info!("{msg}");
    }

    /// Log a debug message (suppressed on console unless verbose).
    pub fn debug(&self, msg: &str) {
        tracing::debug!("{msg}");
    }

    /// Log a dry-run action message.
    pub fn dry_run(&self, msg: &str) {
        tracing::info!(target: "scaffold::dry_run", "{msg}");
    }

    /// Record an action result for the summary.
    pub fn record_action(&self, name: &str, status: ActionStatus, message: Option<&str>) {
        let mut guard = self
            .actions
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        guard.push(ActionEntry {
            name: name.to_string(),
            status,
            message: message.map(String::from),
        });
    }

    /// Return a clone of all recorded action entries.
    #[must_use]
    pub fn entries(&self) -> Vec<ActionEntry> {
        self.actions.lock().map_or_else(|_| vec![], |g| g.clone())
    }

    /// Number of recorded actions with [`ActionStatus::Failed`].
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.entries()
            .iter()
            .filter(|e| e.status == ActionStatus::Failed)
            .count()
    }

    /// Whether any recorded action failed.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.failure_count() > 0
    }

    /// Print the summary of all recorded actions.
    pub fn print_summary(&self) {
        let entries = self.entries();
        if entries.is_empty() {
            return;
        }

        self.stage("Summary");

        let mut ok = 0_u32;
        let mut not_applicable = 0_u32;
        let mut skipped = 0_u32;
        let mut dry_run = 0_u32;
        let mut failed = 0_u32;

        for entry in &entries {
            let icon = match entry.status {
                ActionStatus::Ok => {
                    ok += 1;
                    "✓"
                }
                ActionStatus::NotApplicable => {
                    not_applicable += 1;
                    "·"
                }
                ActionStatus::Skipped => {
                    skipped += 1;
                    "○"
                }
                ActionStatus::DryRun => {
                    dry_run += 1;
                    "~"
                }
                ActionStatus::Failed => {
                    failed += 1;
                    "✗"
                }
            };

            let suffix = entry
                .message
                .as_ref()
                .map_or_else(String::new, |msg| format!(" ({msg})"));
            self.info(&format!("{icon} {}{suffix}", entry.name));
        }

        let total = ok + not_applicable + skipped + dry_run + failed;
        self.info(&format!(
            "{total} actions: {ok} ok, {not_applicable} n/a, {skipped} skipped, \
             {dry_run} dry-run, {failed} failed"
        ));
    }
}
