//! configor CLI - Inspect and export layered application configuration.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Build a `Configor` engine from the global options.
//! - Report errors with structured exit codes.
//!
//! Does NOT handle:
//! - Configuration resolution itself (see the `configor` crate).
//!
//! Invariants:
//! - Logs go to stderr so `show` output on stdout stays machine-readable.
//! - Global options (like `--env`) apply to every subcommand.

mod app_config;
mod args;
mod commands;
mod dispatch;
mod error;

use args::Cli;
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    let cli = Cli::parse();

    // --debug/--verbose raise the library's resolution logs to info; show them
    // unless RUST_LOG says otherwise.
    let default_level = if cli.debug || cli.verbose {
        LevelFilter::INFO
    } else {
        LevelFilter::WARN
    };
    tracing_subscriber::registry()
        .with(
            EnvFilter::builder()
                .with_default_directive(default_level.into())
                .from_env_lossy(),
        )
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let exit_code = match run_command(cli) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}
