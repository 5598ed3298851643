//! Centralized constants for the configor workspace.
//!
//! Environment variable names and fixed file names live here so the loader,
//! the CLI, and the tests agree on them.

// =============================================================================
// Recognized Environment Variables
// =============================================================================

/// Selects the active environment when no explicit one is configured.
pub const ENV_ENVIRONMENT: &str = "CONFIGOR_ENV";

/// Overrides the prefix used for generated environment variable names.
pub const ENV_PREFIX: &str = "CONFIGOR_ENV_PREFIX";

/// Any non-empty value turns on debug mode.
pub const ENV_DEBUG_MODE: &str = "CONFIGOR_DEBUG_MODE";

/// Any non-empty value turns on verbose mode.
pub const ENV_VERBOSE_MODE: &str = "CONFIGOR_VERBOSE_MODE";

/// `1` or `true` skips reading dotenv files.
pub const ENV_DOTENV_DISABLED: &str = "DOTENV_DISABLED";

// =============================================================================
// Defaults
// =============================================================================

/// Prefix for generated environment variable names.
pub const DEFAULT_ENV_PREFIX: &str = "Configor";

/// Prefix value that disables prefixing entirely.
pub const NO_ENV_PREFIX: &str = "-";

/// Environment used when nothing else selects one.
pub const DEFAULT_ENVIRONMENT: &str = "development";

/// Environment reported when running from a test build directory.
pub const TEST_ENVIRONMENT: &str = "test";

/// Path component that marks a test build of the running program.
pub const TEST_PATH_SEGMENT: &str = "_test";

/// Qualifier of the fallback file used when a configuration file is missing.
pub const EXAMPLE_QUALIFIER: &str = "example";

/// Dotenv files read for placeholder substitution.
pub const DEFAULT_ENV_FILES: &[&str] = &[".env"];

// =============================================================================
// Export
// =============================================================================

/// File stem used when the whole configuration is exported.
pub const DUMP_WHOLE_NODE: &str = "config";

/// Unix permissions for exported files.
pub const DUMP_FILE_MODE: u32 = 0o600;

/// Unix permissions for directories created by an export.
pub const DUMP_DIR_MODE: u32 = 0o700;
