//! Top-level subcommand orchestration.
pub mod run;
