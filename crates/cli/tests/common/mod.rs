//! Shared test utilities for configor CLI integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that ignores the host environment.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper will be hermetic by default.
//! - `DBPassword` is unset unless a test sets it.

use assert_cmd::Command;

/// Returns a hermetic `configor` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - Variables that change resolution are cleared to ensure no leakage from the host.
pub fn configor_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("configor");

    cmd.env("DOTENV_DISABLED", "1");

    cmd.env_remove("CONFIGOR_ENV")
        .env_remove("CONFIGOR_ENV_PREFIX")
        .env_remove("CONFIGOR_DEBUG_MODE")
        .env_remove("CONFIGOR_VERBOSE_MODE")
        .env_remove("DBPassword")
        .env_remove("CONFIGOR_APP_NAME")
        .env_remove("CONFIGOR_DB_NAME")
        .env_remove("RUST_LOG");

    cmd
}
