//! `{ENV.KEY}` placeholder substitution.
//!
//! A textual pass over raw file content that runs before any format decoding,
//! so substituted values land inside scalar positions of the file's syntax.

use std::collections::BTreeMap;

/// Key/value pairs read from dotenv files, ordered by key.
pub type EnvMap = BTreeMap<String, String>;

/// Replace every `{ENV.<KEY>}` token with its value from `env`.
///
/// Double quotes in a key are stripped before the token is built. Tokens whose
/// key is absent from `env` are left untouched.
pub fn substitute(raw: &str, env: &EnvMap) -> String {
    let mut content = raw.to_string();
    for (key, value) in env {
        let token = format!("{{ENV.{}}}", key.replace('"', ""));
        if content.contains(&token) {
            content = content.replace(&token, value);
        }
    }
    content
}
