//! plexcleaner CLI
//!
//! Plans renames of Plex movie files into a canonical layout. Nothing is
//! moved; the plan is logged for an external mover.

mod cli_types;
mod commands;
mod error;
mod space;

use clap::Parser;

use crate::cli_types::{Cli, Commands, LogLevel};
use crate::commands::plan::PlanOptions;
use crate::error::CliError;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.global.log_level);

    let code = match run(cli) {
        Ok(()) => 0,
        Err(e) => {
            log::error!("{}", e);
            e.exit_code()
        }
    };
    std::process::exit(code);
}

fn run(cli: Cli) -> Result<(), CliError> {
    let global = cli.global;
    match cli.command {
        Commands::Plan {
            export,
            no_update,
            jacket,
            interrupt,
        } => commands::plan::run_plan(
            &global,
            &PlanOptions {
                export,
                update: !no_update,
                jacket,
                interrupt,
            },
        ),
        Commands::Export { target } => commands::export::run_export(&global, target.as_deref()),
        Commands::Stats => commands::stats::run_stats(&global),
    }
}

/// Plain messages at info level; timestamps once debugging.
fn init_logging(level: LogLevel) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level.filter()).format_target(false);
    if level >= LogLevel::Debug {
        builder.format_timestamp_millis();
    } else {
        builder.format_timestamp(None).format_level(level < LogLevel::Info);
    }
    builder.init();
}
