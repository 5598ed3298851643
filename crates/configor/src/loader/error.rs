//! Error types for configuration loading and export.
//!
//! Responsibilities:
//! - Define one error variant per failure category of a load or dump run.
//! - Carry enough context (paths, variable names, formats) to act on the error.
//!
//! Does NOT handle:
//! - Diagnostics for conditions that are not failures (example-file fallback,
//!   missing optional files); those are logged through `tracing`.
//!
//! Invariants:
//! - Every error aborts the current `load`/`dump` call; there is no partial success.
//! - Dotenv errors NEVER include raw .env line contents to prevent secret leakage.
//! - Literal errors name the source (`default` or the env var) but never echo an
//!   env var's value.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while resolving or exporting a configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to decode config file at {path}: {message}")]
    Decode { path: PathBuf, message: String },

    #[error("Invalid config at {path}: expected a record")]
    NotARecord { path: String },

    #[error("{path} is required, but blank")]
    MissingRequired { path: String },

    /// A `default` directive or an environment value is not a valid literal
    /// for the field it targets.
    #[error("Invalid {source_name} value for {path}: {message}")]
    MalformedLiteral {
        path: String,
        source_name: String,
        message: String,
    },

    #[error("Unknown format to export: {0}")]
    UnsupportedFormat(String),

    #[error("Failed to encode configuration as {format}: {message}")]
    Encode { format: String, message: String },

    #[error("Resolved configuration does not match the target type: {0}")]
    Deserialize(#[from] serde_json::Error),

    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to parse a dotenv file due to invalid syntax.
    ///
    /// SAFETY: This error only includes the byte index of the parse failure,
    /// NOT the offending line content, to prevent leaking secrets.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    /// Failed to read a dotenv file due to an I/O error.
    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    /// Unknown dotenv error (future variants from dotenvy crate).
    ///
    /// SAFETY: This error does not include any raw dotenv content.
    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}

impl From<dotenvy::Error> for ConfigError {
    fn from(error: dotenvy::Error) -> Self {
        match error {
            dotenvy::Error::LineParse(_, idx) => ConfigError::DotenvParse { error_index: idx },
            dotenvy::Error::Io(io_err) => ConfigError::DotenvIo {
                kind: io_err.kind(),
            },
            _ => ConfigError::DotenvUnknown,
        }
    }
}
