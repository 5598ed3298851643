//! Shared fixture for the integration tests.

#![allow(dead_code)]

use configor::{Configor, Configurable, Field, Schema};
use serde::{Deserialize, Serialize};

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
pub struct AppConfig {
    pub app_name: String,
    pub db: Database,
    pub contacts: Vec<Contact>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl Configurable for AppConfig {
    fn schema() -> Schema {
        Schema::new()
            .field(Field::text("app_name").default("app name"))
            .field(Field::record::<Database>("db"))
            .field(Field::records::<Contact>("contacts"))
            .field(Field::scalar("tags").optional())
    }
}

/// An engine that ignores dotenv files and the ambient environment name.
pub fn engine() -> Configor {
    Configor::new()
        .with_environment("integration")
        .with_env_files(Vec::<std::path::PathBuf>::new())
}

/// Variables that would change a load's outcome; unset around each test.
pub fn cleared_vars() -> Vec<(&'static str, Option<&'static str>)> {
    [
        "DBPassword",
        "CONFIGOR_ENV_PREFIX",
        "Configor_app_name",
        "CONFIGOR_APP_NAME",
        "Configor_db_name",
        "CONFIGOR_DB_NAME",
        "Configor_db_user",
        "CONFIGOR_DB_USER",
        "CONFIGOR_DB_PORT",
        "CONFIGOR_TAGS",
    ]
    .into_iter()
    .map(|name| (name, None))
    .collect()
}

pub fn sample() -> AppConfig {
    AppConfig {
        app_name: "demo".to_string(),
        db: Database {
            name: "mydb".to_string(),
            user: "admin".to_string(),
            password: "s3cret".to_string(),
            port: 5432,
        },
        contacts: vec![
            Contact {
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
            },
            Contact {
                name: "Linus".to_string(),
                email: "linus@example.com".to_string(),
            },
        ],
        tags: Some(vec!["blue".to_string(), "123".to_string()]),
    }
}
