//! Binary entry point for the `scaffold` CLI.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;

use scaffold_cli::commands;
use scaffold_cli::{cli, logging};

fn main() -> Result<()> {
    let _ = enable_ansi_support::enable_ansi_support();
    let args = cli::Cli::parse();
    logging::init_subscriber(args.verbose);
    let log = Arc::new(logging::Logger::new());

    match args.command {
        cli::Command::Run(opts) => commands::run::run(&args.global, &opts, &log),
        cli::Command::Version => {
            let version = option_env!("SCAFFOLD_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"));
            log.info(&format!("scaffold {version}"));
            Ok(())
        }
    }
}
