//! Dotenv loading for placeholder substitution.
//!
//! Responsibilities:
//! - Read key/value pairs from dotenv files into an [`EnvMap`].
//! - Enforce the `DOTENV_DISABLED` gate.
//!
//! Does NOT handle:
//! - Substituting placeholders (see `crate::placeholder`).
//!
//! Invariants:
//! - The process environment is never modified; values only feed placeholders.
//! - Missing files are silently skipped.
//! - Later files override earlier ones for the same key.

use std::path::Path;

use super::error::ConfigError;
use crate::constants::ENV_DOTENV_DISABLED;
use crate::placeholder::EnvMap;

/// Check if dotenv loading is disabled via environment variable.
pub(crate) fn dotenv_disabled() -> bool {
    matches!(
        std::env::var(ENV_DOTENV_DISABLED).ok().as_deref(),
        Some("true") | Some("1")
    )
}

/// Load the environment mapping from the given dotenv files.
///
/// # Errors
///
/// Returns an error if:
/// - A file exists but has invalid syntax (`ConfigError::DotenvParse`)
/// - A file exists but cannot be read due to I/O errors (`ConfigError::DotenvIo`)
///
/// SAFETY: Error messages never include raw .env line contents to prevent secret leakage.
pub fn load_env_map<P: AsRef<Path>>(paths: &[P]) -> Result<EnvMap, ConfigError> {
    let mut map = EnvMap::new();
    if dotenv_disabled() {
        return Ok(map);
    }

    for path in paths {
        let path = path.as_ref();
        let entries = match dotenvy::from_path_iter(path) {
            Ok(entries) => entries,
            Err(e) if is_not_found(&e) => {
                tracing::trace!(path = %path.display(), "No dotenv file");
                continue;
            }
            Err(e) => return Err(e.into()),
        };
        for entry in entries {
            let (key, value) = entry?;
            map.insert(key, value);
        }
        tracing::debug!(path = %path.display(), keys = map.len(), "Loaded dotenv file");
    }

    Ok(map)
}

/// Check if a dotenv error indicates the file was not found.
fn is_not_found(err: &dotenvy::Error) -> bool {
    matches!(
        err,
        dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
    )
}
