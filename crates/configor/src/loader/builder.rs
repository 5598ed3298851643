//! The configuration engine.
//!
//! Responsibilities:
//! - Provide a builder-pattern `Configor` carrying [`Settings`].
//! - Run the load pipeline: dotenv mapping, file cascade, placeholder
//!   substitution, decoding, structural merge, directive resolution.
//! - Export resolved configurations (delegated to `crate::export`).
//!
//! Does NOT handle:
//! - Parsing individual formats (see `crate::format`).
//! - The directive walk itself (see `crate::resolve`).
//!
//! Invariants / Assumptions:
//! - Selected files are merged in cascade order; later files override the
//!   fields they mention.
//! - Environment variables override file values; defaults only fill blanks.
//! - Loading is all-or-nothing: on any error the target is left untouched.
//! - The dotenv mapping is read fresh for each load and never reaches the
//!   process environment.

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;

use super::dotenv::load_env_map;
use super::env::{resolve_env_prefix, resolve_environment};
use super::error::ConfigError;
use super::settings::Settings;
use crate::cascade::select_files;
use crate::constants::NO_ENV_PREFIX;
use crate::export;
use crate::format::decode_file;
use crate::merge::deep_merge_all;
use crate::placeholder::{EnvMap, substitute};
use crate::resolve::resolve_tags;
use crate::schema::Configurable;

/// Configuration engine resolving typed configurations from files and the environment.
#[derive(Debug, Clone)]
pub struct Configor {
    settings: Settings,
}

impl Default for Configor {
    fn default() -> Self {
        Self::new()
    }
}

impl Configor {
    /// Create an engine with default settings and the debug/verbose toggles applied.
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    /// Create an engine from explicit settings; the environment toggles still apply.
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            settings: settings.with_env_toggles(),
        }
    }

    /// Use this environment instead of `CONFIGOR_ENV` and the fallbacks.
    pub fn with_environment(mut self, environment: impl Into<String>) -> Self {
        self.settings.environment = Some(environment.into());
        self
    }

    /// Use this prefix for generated environment variable names (`-` for none).
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.settings.env_prefix = Some(prefix.into());
        self
    }

    /// Read placeholder values from these dotenv files instead of `.env`.
    pub fn with_env_files<I, P>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.settings.env_files = files.into_iter().map(Into::into).collect();
        self
    }

    /// Set debug mode.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.settings.debug = debug;
        self
    }

    /// Set verbose mode.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.settings.verbose = verbose;
        self
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The active environment name.
    pub fn environment(&self) -> String {
        resolve_environment(self.settings.environment.as_deref())
    }

    /// The prefix for generated environment variable names, `-` when disabled.
    pub fn env_prefix(&self) -> String {
        resolve_env_prefix(self.settings.env_prefix.as_deref())
    }

    /// Root of the generated environment variable names.
    fn prefix_chain(&self) -> Vec<String> {
        let prefix = self.env_prefix();
        if prefix == NO_ENV_PREFIX {
            Vec::new()
        } else {
            vec![prefix]
        }
    }

    /// The files `load` would read for `files`, in merge order.
    pub fn config_files<P: AsRef<Path>>(&self, files: &[P]) -> Vec<PathBuf> {
        select_files(files, &self.environment())
    }

    /// Load `files` and the environment into `target`.
    ///
    /// The current value of `target` is the base every file is merged over.
    /// On error `target` is left unchanged.
    pub fn load<T, P>(&self, target: &mut T, files: &[P]) -> Result<(), ConfigError>
    where
        T: Configurable,
        P: AsRef<Path>,
    {
        *target = self.resolve(target, files)?;
        Ok(())
    }

    /// Resolve a new configuration from `base`, `files` and the environment.
    pub fn resolve<T, P>(&self, base: &T, files: &[P]) -> Result<T, ConfigError>
    where
        T: Configurable,
        P: AsRef<Path>,
    {
        let env_map = load_env_map(&self.settings.env_files)?;
        let layers = self
            .config_files(files)
            .iter()
            .map(|file| self.read_file(file, &env_map))
            .collect::<Result<Vec<_>, _>>()?;
        let mut tree = deep_merge_all(std::iter::once(serde_json::to_value(base)?).chain(layers));

        resolve_tags(&mut tree, &T::schema(), &self.prefix_chain())?;

        if self.settings.is_chatty() {
            tracing::info!(configuration = %tree, "Configuration resolved");
        }

        Ok(serde_json::from_value(tree)?)
    }

    fn read_file(&self, path: &Path, env_map: &EnvMap) -> Result<Value, ConfigError> {
        if self.settings.is_chatty() {
            tracing::info!(path = %path.display(), "Loading configurations from file");
        } else {
            tracing::debug!(path = %path.display(), "Loading configurations from file");
        }

        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        decode_file(&substitute(&raw, env_map), path)
    }

    /// Export `target`; see [`export::dump`].
    pub fn dump<T, P>(
        &self,
        target: &T,
        nodes: &str,
        formats: &str,
        output_dir: P,
    ) -> Result<Vec<PathBuf>, ConfigError>
    where
        T: Serialize + ?Sized,
        P: AsRef<Path>,
    {
        export::dump(target, nodes, formats, output_dir)
    }
}

/// Load `files` into `target` with a default engine.
pub fn load<T, P>(target: &mut T, files: &[P]) -> Result<(), ConfigError>
where
    T: Configurable,
    P: AsRef<Path>,
{
    Configor::new().load(target, files)
}

/// The active environment of a default engine.
pub fn current_environment() -> String {
    Configor::new().environment()
}
