//! Tests for the configuration engine.
//!
//! Responsibilities:
//! - Test the full load pipeline against real files in temporary directories.
//! - Test environment variable precedence, prefixes and sequence indices.
//! - Test the file cascade and dotenv placeholders through `Configor::load`.
//!
//! Does NOT handle:
//! - The directive walk in isolation (tested in resolve.rs).
//! - Format codecs in isolation (tested in format.rs).
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests use `global_test_lock()` for additional synchronization.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use tempfile::TempDir;

use crate::{Configurable, Field, Schema};


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Variables these tests read; cleared for every test unless set explicitly.
const TOUCHED_VARS: &[&str] = &[
    "DBPassword",
    "CONFIGOR_ENV",
    "CONFIGOR_ENV_PREFIX",
    "CONFIGOR_DEBUG_MODE",
    "CONFIGOR_VERBOSE_MODE",
    "DOTENV_DISABLED",
    "Configor_app_name",
    "CONFIGOR_APP_NAME",
    "Configor_db_name",
    "CONFIGOR_DB_NAME",
    "CONFIGOR_DB_PORT",
    "CONFIGOR_CONTACTS_0_EMAIL",
    "APP_DB_NAME",
    "DB_NAME",
    "CONFIGOR_ID",
    "Configor_meta",
    "CONFIGOR_META",
];

/// Run `f` with `vars` set and every other variable in `TOUCHED_VARS` unset.
pub fn with_env<R>(vars: &[(&str, &str)], f: impl FnOnce() -> R) -> R {
    let mut all: Vec<(&str, Option<&str>)> = TOUCHED_VARS
        .iter()
        .filter(|name| !vars.iter().any(|(key, _)| key == *name))
        .map(|name| (*name, None))
        .collect();
    all.extend(vars.iter().map(|(key, value)| (*key, Some(*value))));
    temp_env::with_vars(all, f)
}

/// Write `content` to `dir/name` and return the path.
pub fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

/// Guard that restores the working directory on drop.
pub struct CwdGuard {
    original_dir: PathBuf,
}

impl CwdGuard {
    pub fn new(dir: &Path) -> Self {
        let original_dir = std::env::current_dir().expect("Failed to get current directory");
        std::env::set_current_dir(dir).expect("Failed to set current directory");
        Self { original_dir }
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original_dir);
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Database {
    pub name: String,
    pub user: String,
    pub password: String,
    pub port: u16,
}

impl Configurable for Database {
    fn schema() -> Schema {
        Schema::new()
            .field(Field::text("name"))
            .field(Field::text("user").default("root"))
            .field(Field::text("password").env("DBPassword").required())
            .field(Field::scalar("port").default("3306"))
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub name: String,
    pub email: String,
}

impl Configurable for Contact {
    fn schema() -> Schema {
        Schema::new()
            .field(Field::text("name"))
            .field(Field::text("email").required())
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Github {
    pub client_id: String,
    pub client_secret: String,
}

impl Configurable for Github {
    fn schema() -> Schema {
        Schema::new()
            .field(Field::text("client_id"))
            .field(Field::text("client_secret").required())
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub app_name: String,
    pub db: Database,
    pub contacts: Vec<Contact>,
    pub github: Option<Github>,
}

impl Configurable for AppConfig {
    fn schema() -> Schema {
        Schema::new()
            .field(Field::text("app_name").default("app name"))
            .field(Field::record::<Database>("db"))
            .field(Field::records::<Contact>("contacts"))
            .field(Field::record::<Github>("github").optional())
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Meta {
    pub id: String,
    pub region: String,
}

impl Configurable for Meta {
    fn schema() -> Schema {
        Schema::new()
            .field(Field::text("id").default("base-id"))
            .field(Field::text("region"))
    }
}

/// Embeds `Meta` without a name segment in files or environment variables.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    #[serde(flatten)]
    pub meta: Meta,
    #[serde(default)]
    pub label: String,
}

impl Configurable for Service {
    fn schema() -> Schema {
        Schema::new()
            .field(Field::record::<Meta>("meta").anonymous())
            .field(Field::text("label").required())
    }
}
