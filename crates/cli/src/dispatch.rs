//! Command dispatch logic.
//!
//! Responsibilities:
//! - Build the engine from the global options.
//! - Route parsed CLI arguments to the matching command handler.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).

use anyhow::Result;

use crate::args::{Cli, Commands};
use crate::commands;

/// Dispatch CLI commands to their respective handlers.
pub(crate) fn run_command(cli: Cli) -> Result<()> {
    let engine = cli.engine();

    match cli.command {
        Commands::Env => commands::env::run(&engine),
        Commands::Files { files } => commands::files::run(&engine, &files),
        Commands::Show { files, format } => commands::show::run(&engine, &files, &format),
        Commands::Dump {
            files,
            output,
            nodes,
            formats,
        } => commands::dump::run(&engine, &files, &output, &nodes, &formats),
    }
}
