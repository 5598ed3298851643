//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map `ConfigError` variants to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit codes 1-9 are reserved for specific error categories.
//! - Argument errors exit with clap's own code (2) before any command runs.

use configor::ConfigError;

/// Structured exit codes for configor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// A configuration or dotenv file could not be read or decoded.
    ///
    /// Scripts should check the file paths and syntax.
    SourceError = 3,

    /// The resolved configuration is invalid: a required field is blank, a
    /// literal is malformed, or the values do not fit the configuration type.
    ///
    /// Scripts should supply the missing values (files or environment).
    InvalidConfig = 4,

    /// Export failed: unknown format, encoding failure or filesystem error.
    ExportError = 5,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ConfigError> for ExitCode {
    fn from(err: &ConfigError) -> Self {
        match err {
            ConfigError::FileRead { .. }
            | ConfigError::Decode { .. }
            | ConfigError::DotenvParse { .. }
            | ConfigError::DotenvIo { .. }
            | ConfigError::DotenvUnknown => ExitCode::SourceError,

            ConfigError::NotARecord { .. }
            | ConfigError::MissingRequired { .. }
            | ConfigError::MalformedLiteral { .. }
            | ConfigError::Deserialize(_) => ExitCode::InvalidConfig,

            ConfigError::UnsupportedFormat(_)
            | ConfigError::Encode { .. }
            | ConfigError::Io { .. } => ExitCode::ExportError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if no `ConfigError` is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        self.chain()
            .find_map(|cause| cause.downcast_ref::<ConfigError>())
            .map(ExitCode::from)
            .unwrap_or(ExitCode::GeneralError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use std::path::PathBuf;

    #[test]
    fn test_exit_code_as_i32() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::GeneralError.as_i32(), 1);
        assert_eq!(ExitCode::SourceError.as_i32(), 3);
        assert_eq!(ExitCode::InvalidConfig.as_i32(), 4);
        assert_eq!(ExitCode::ExportError.as_i32(), 5);
    }

    #[test]
    fn test_from_config_error() {
        let missing = ConfigError::MissingRequired {
            path: "db.password".to_string(),
        };
        assert_eq!(ExitCode::from(&missing), ExitCode::InvalidConfig);

        let decode = ConfigError::Decode {
            path: PathBuf::from("config.yml"),
            message: "bad".to_string(),
        };
        assert_eq!(ExitCode::from(&decode), ExitCode::SourceError);

        let format = ConfigError::UnsupportedFormat("ini".to_string());
        assert_eq!(ExitCode::from(&format), ExitCode::ExportError);
    }

    #[test]
    fn test_exit_code_found_through_context() {
        let result: Result<(), ConfigError> = Err(ConfigError::MissingRequired {
            path: "db.password".to_string(),
        });
        let err = result.context("Failed to load configuration").unwrap_err();
        assert_eq!(err.exit_code(), ExitCode::InvalidConfig);
    }

    #[test]
    fn test_unrelated_error_is_general() {
        let err = anyhow::anyhow!("something else");
        assert_eq!(err.exit_code(), ExitCode::GeneralError);
    }
}
