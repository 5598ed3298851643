//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Turn the global options into a configured `Configor` engine.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use configor::Configor;
use configor::constants::{ENV_ENVIRONMENT, ENV_PREFIX};

#[derive(Parser)]
#[command(name = "configor")]
#[command(about = "Resolve layered YAML/TOML/JSON configuration", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  configor env\n  configor --env production files config.yml\n  configor show config.yml --format json\n  configor dump config.yml --output out --nodes db,contacts --formats yaml,toml\n"
)]
pub struct Cli {
    /// Environment name (selects `<name>.<env>.<ext>` variants)
    #[arg(short, long = "env", global = true, env = ENV_ENVIRONMENT, value_name = "NAME")]
    pub environment: Option<String>,

    /// Prefix for generated environment variable names (`-` for none)
    #[arg(long, global = true, env = ENV_PREFIX)]
    pub prefix: Option<String>,

    /// Dotenv file feeding `{ENV.KEY}` placeholders (repeatable; default `.env`)
    #[arg(long = "env-file", global = true, value_name = "FILE")]
    pub env_files: Vec<PathBuf>,

    /// Log the files loaded and the resolved configuration
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Same as `--verbose`
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the active environment name
    Env,

    /// Print the files that would be loaded, in merge order
    Files {
        /// Configuration files, highest priority first
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Load the application configuration and print it
    Show {
        /// Configuration files, highest priority first
        files: Vec<PathBuf>,

        /// Output format (json, toml, yaml)
        #[arg(short, long, default_value = "yaml")]
        format: String,
    },

    /// Load the application configuration and export it to files
    Dump {
        /// Configuration files, highest priority first
        files: Vec<PathBuf>,

        /// Output directory (created if missing)
        #[arg(short, long, value_name = "DIR")]
        output: PathBuf,

        /// Comma-separated node names; each gets `<node>.<format>`
        #[arg(long, default_value = "")]
        nodes: String,

        /// Comma-separated formats (json, toml, yaml)
        #[arg(long, default_value = "yaml")]
        formats: String,
    },
}

impl Cli {
    /// Build the engine described by the global options.
    pub fn engine(&self) -> Configor {
        // The flags only turn modes on; CONFIGOR_DEBUG_MODE/CONFIGOR_VERBOSE_MODE still apply.
        let mut engine = Configor::new();
        if self.debug {
            engine = engine.with_debug(true);
        }
        if self.verbose {
            engine = engine.with_verbose(true);
        }
        if let Some(environment) = self.environment.as_deref().map(str::trim)
            && !environment.is_empty()
        {
            engine = engine.with_environment(environment);
        }
        if let Some(prefix) = self.prefix.as_deref().map(str::trim)
            && !prefix.is_empty()
        {
            engine = engine.with_env_prefix(prefix);
        }
        if !self.env_files.is_empty() {
            engine = engine.with_env_files(self.env_files.iter().cloned());
        }
        engine
    }
}
