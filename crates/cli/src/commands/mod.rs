//! CLI command implementations.

pub mod dump;
pub mod env;
pub mod files;
pub mod show;

use std::path::PathBuf;

use anyhow::{Context, Result};
use configor::Configor;

use crate::app_config::AppConfig;

/// Load the application configuration from `files`.
pub fn load_app_config(engine: &Configor, files: &[PathBuf]) -> Result<AppConfig> {
    let mut config = AppConfig::default();
    engine
        .load(&mut config, files)
        .context("Failed to load configuration")?;
    Ok(config)
}
