//! Configuration loader for files and environment variables.
//!
//! Responsibilities:
//! - Provide the builder-pattern `Configor` engine and its `Settings`.
//! - Resolve the active environment and the env prefix.
//! - Load dotenv files for placeholder substitution.
//!
//! Does NOT handle:
//! - Format codecs (see `crate::format`) or the directive walk (see `crate::resolve`).
//! - Exporting configurations (see `crate::export`).
//!
//! Invariants / Assumptions:
//! - Environment variables take precedence over file values.
//! - Dotenv values only feed `{ENV.KEY}` placeholders.
//! - The `DOTENV_DISABLED` variable is checked before any dotenv file is read.

mod builder;
mod dotenv;
mod env;
mod error;
mod settings;

#[cfg(test)]
mod tests;

pub use builder::{Configor, current_environment, load};
pub use dotenv::load_env_map;
pub use env::{
    env_var_or_none, environment_from, field_env_var, resolve_env_prefix, resolve_environment,
};
pub use error::ConfigError;
pub use settings::Settings;
