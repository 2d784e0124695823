//! Command-line argument parsing for the scaffolding engine.

use clap::{Parser, Subcommand};

/// Top-level CLI entry point for the scaffolding engine.
#[derive(Parser, Debug)]
#[command(
    name = "scaffold",
    about = "Drupal project scaffolding engine for Composer post-install hooks",
    version
)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Options shared across subcommands.
    #[command(flatten)]
    pub global: GlobalOpts,
}

/// Options shared across all subcommands.
#[derive(Parser, Debug, Clone)]
pub struct GlobalOpts {
    /// Override the project root directory
    #[arg(long, global = true)]
    pub root: Option<std::path::PathBuf>,

    /// Override the Composer vendor directory
    #[arg(long, global = true)]
    pub vendor_dir: Option<std::path::PathBuf>,

    /// Preview planned operations without applying
    #[arg(short = 'd', long, global = true)]
    pub dry_run: bool,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Provision the project tree from the template package
    Run(RunOpts),
    /// Print version information
    Version,
}

/// Options for the `run` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct RunOpts {
    /// Skip specific steps
    #[arg(long, value_delimiter = ',')]
    pub skip: Vec<String>,

    /// Run only specific steps
    #[arg(long, value_delimiter = ',')]
    pub only: Vec<String>,
}
