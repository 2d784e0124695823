//! Drupal project scaffolding engine.
//!
//! Provisions a project's working tree from a template package after every
//! Composer install/update: copies required and optional scaffold files,
//! creates the directories a Drupal build expects, injects generated settings
//! into `settings.php` exactly once, and keeps `.gitignore` in sync with the
//! set of generated paths.
//!
//! The public API is organised into five layers:
//!
//! - **[`paths`]** — resolve the project, vendor, and template-package roots
//! - **[`config`]** — file manifests and directory lists, with overrides
//! - **[`tasks`]** — the four primitive filesystem operations
//! - **[`actions`]** — plan + execute steps built from current disk state
//! - **[`commands`]** — top-level subcommand orchestration (`run`, `version`)
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod actions;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod paths;
pub mod salt;
pub mod tasks;
