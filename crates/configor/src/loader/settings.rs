//! Settings for one configuration engine.
//!
//! Responsibilities:
//! - Hold the explicit environment name and env prefix overrides.
//! - Hold the debug/verbose switches and the dotenv files to read.
//! - Apply the `CONFIGOR_DEBUG_MODE` / `CONFIGOR_VERBOSE_MODE` toggles.
//!
//! Invariants:
//! - Settings are immutable for the duration of a `load`/`dump` call.
//! - The toggles can only turn modes on, never off.

use std::path::PathBuf;

use super::env::env_var_or_none;
use crate::constants::{DEFAULT_ENV_FILES, ENV_DEBUG_MODE, ENV_VERBOSE_MODE};

/// Engine settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Explicit environment name; wins over `CONFIGOR_ENV`.
    pub environment: Option<String>,
    /// Explicit env prefix; wins over `CONFIGOR_ENV_PREFIX`. `-` disables prefixing.
    pub env_prefix: Option<String>,
    /// Log file loading and the resolved configuration at info level.
    pub debug: bool,
    /// Same as `debug`; kept separate to mirror the two environment toggles.
    pub verbose: bool,
    /// Dotenv files feeding `{ENV.KEY}` placeholders, later files winning.
    pub env_files: Vec<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            environment: None,
            env_prefix: None,
            debug: false,
            verbose: false,
            env_files: DEFAULT_ENV_FILES.iter().map(PathBuf::from).collect(),
        }
    }
}

impl Settings {
    /// Default settings with the environment toggles applied.
    pub fn from_env() -> Self {
        Self::default().with_env_toggles()
    }

    /// Turn on debug/verbose when their environment toggles are set.
    pub fn with_env_toggles(mut self) -> Self {
        if env_var_or_none(ENV_DEBUG_MODE).is_some() {
            self.debug = true;
        }
        if env_var_or_none(ENV_VERBOSE_MODE).is_some() {
            self.verbose = true;
        }
        self
    }

    /// Whether resolution details should be logged at info level.
    pub fn is_chatty(&self) -> bool {
        self.debug || self.verbose
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_default_reads_dot_env() {
        let settings = Settings::default();
        assert_eq!(settings.env_files, vec![PathBuf::from(".env")]);
        assert!(!settings.is_chatty());
    }

    #[test]
    #[serial]
    fn test_toggles_turn_modes_on() {
        temp_env::with_vars(
            [(ENV_DEBUG_MODE, Some("1")), (ENV_VERBOSE_MODE, None)],
            || {
                let settings = Settings::from_env();
                assert!(settings.debug);
                assert!(!settings.verbose);
                assert!(settings.is_chatty());
            },
        );
        temp_env::with_vars(
            [(ENV_DEBUG_MODE, Some("")), (ENV_VERBOSE_MODE, Some("yes"))],
            || {
                let settings = Settings::from_env();
                assert!(!settings.debug);
                assert!(settings.verbose);
            },
        );
    }

    #[test]
    #[serial]
    fn test_toggles_never_turn_modes_off() {
        temp_env::with_vars(
            [(ENV_DEBUG_MODE, None::<&str>), (ENV_VERBOSE_MODE, None)],
            || {
                let settings = Settings {
                    debug: true,
                    ..Settings::default()
                }
                .with_env_toggles();
                assert!(settings.debug);
            },
        );
    }
}
