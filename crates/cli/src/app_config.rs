//! The application configuration the CLI loads.

use configor::{Configurable, Field, Schema};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub app_name: String,
    pub db: Database,
    pub contacts: Vec<Contact>,
    pub oauth2: Oauth2,
}

impl Configurable for AppConfig {
    fn schema() -> Schema {
        Schema::new()
            .field(Field::text("app_name").default("app name"))
            .field(Field::record::<Database>("db"))
            .field(Field::records::<Contact>("contacts"))
            .field(Field::record::<Oauth2>("oauth2"))
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
pub struct Oauth2 {
    pub github: Github,
}

impl Configurable for Oauth2 {
    fn schema() -> Schema {
        Schema::new().field(Field::record::<Github>("github"))
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Github {
    #[serde(rename = "personal_token")]
    pub token: String,
    #[serde(rename = "client_id")]
    pub client_key: String,
    pub client_secret: String,
}

impl Configurable for Github {
    fn schema() -> Schema {
        Schema::new()
            .field(Field::text("personal_token"))
            .field(Field::text("client_id"))
            .field(Field::text("client_secret"))
    }
}
