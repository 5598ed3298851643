//! Typed configuration from cascading files and the environment.
//!
//! This crate resolves a configuration value from YAML/TOML/JSON files
//! (with environment-specific variants and `{ENV.KEY}` placeholders),
//! environment variables, and per-field `default`/`required` directives,
//! and exports resolved values back to files.

pub mod cascade;
pub mod constants;
pub mod export;
pub mod format;
mod loader;
pub mod merge;
pub mod placeholder;
pub mod resolve;
pub mod schema;

pub use export::dump;
pub use format::Format;
pub use loader::{
    ConfigError, Configor, Settings, current_environment, env_var_or_none, environment_from,
    field_env_var, load, load_env_map, resolve_env_prefix, resolve_environment,
};
pub use schema::{Configurable, Field, Kind, Schema};
