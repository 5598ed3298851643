//! Process environment lookups for configuration resolution.
//!
//! Responsibilities:
//! - Read environment variables with empty/whitespace filtering.
//! - Resolve the active environment name (explicit, env var, test build, fallback).
//! - Resolve the prefix used for generated environment variable names.
//!
//! Does NOT handle:
//! - Dotenv files (see dotenv.rs); they never populate the process environment.
//! - Applying environment values to fields (see `crate::resolve`).
//!
//! Invariants:
//! - Control variables (`CONFIGOR_*`) that are empty or whitespace-only are
//!   treated as unset, and their values are trimmed.
//! - Field values are only unset when empty, and are never trimmed.
//! - Environment resolution is total: it always yields a name.

use std::path::Path;

use crate::constants::{
    DEFAULT_ENV_PREFIX, DEFAULT_ENVIRONMENT, ENV_ENVIRONMENT, ENV_PREFIX, TEST_ENVIRONMENT,
    TEST_PATH_SEGMENT,
};

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Read an environment variable holding a field value.
///
/// Only the empty string counts as unset; the value is returned as written.
pub fn field_env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.is_empty())
}

/// Resolve the active environment name.
///
/// Order: the explicit name, then `CONFIGOR_ENV`, then `"test"` when the
/// running program lives under a `_test` directory, then `"development"`.
pub fn resolve_environment(explicit: Option<&str>) -> String {
    let program = std::env::args_os().next();
    environment_from(
        explicit,
        env_var_or_none(ENV_ENVIRONMENT).as_deref(),
        program.as_deref().map(Path::new),
    )
}

/// Pure form of [`resolve_environment`] with every input supplied by the caller.
pub fn environment_from(
    explicit: Option<&str>,
    from_env: Option<&str>,
    program: Option<&Path>,
) -> String {
    if let Some(name) = explicit.filter(|name| !name.is_empty()) {
        return name.to_string();
    }
    if let Some(name) = from_env.filter(|name| !name.is_empty()) {
        return name.to_string();
    }
    if program.is_some_and(is_test_build) {
        return TEST_ENVIRONMENT.to_string();
    }
    DEFAULT_ENVIRONMENT.to_string()
}

fn is_test_build(program: &Path) -> bool {
    program
        .parent()
        .is_some_and(|dir| dir.iter().any(|segment| segment == TEST_PATH_SEGMENT))
}

/// Resolve the prefix for generated environment variable names.
///
/// Returns `"-"` unchanged when prefixing is disabled; callers interpret it.
pub fn resolve_env_prefix(explicit: Option<&str>) -> String {
    if let Some(prefix) = explicit.filter(|prefix| !prefix.is_empty()) {
        return prefix.to_string();
    }
    env_var_or_none(ENV_PREFIX).unwrap_or_else(|| DEFAULT_ENV_PREFIX.to_string())
}
