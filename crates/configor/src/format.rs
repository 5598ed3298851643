//! Format dispatch for decoding and encoding configuration files.
//!
//! Responsibilities:
//! - Map file extensions and format names to [`Format`].
//! - Decode file content into a generic `serde_json::Value` tree.
//! - Encode a serializable value as JSON (tab-indented), TOML or YAML.
//!
//! Does NOT handle:
//! - Reading or writing files (see `crate::loader` and `crate::export`).
//! - Merging decoded trees (see `crate::merge`).
//!
//! Invariants:
//! - Files with an unknown or missing extension are probed TOML, then JSON, then YAML.
//! - A file whose extension names a format is decoded by that format only.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::Serialize;
use serde_json::Value;

use crate::loader::ConfigError;

/// A configuration file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Json,
    Toml,
    Yaml,
}

/// Probe order for files whose extension does not name a format.
const PROBE_ORDER: [Format; 3] = [Format::Toml, Format::Json, Format::Yaml];

impl Format {
    /// Format named by the extension of `path`, if any.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "yaml" | "yml" => Some(Format::Yaml),
            "toml" => Some(Format::Toml),
            "json" => Some(Format::Json),
            _ => None,
        }
    }

    /// Canonical name, also used as the extension of exported files.
    pub fn as_str(self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Toml => "toml",
            Format::Yaml => "yaml",
        }
    }

    /// Parse `content` into a generic tree.
    pub fn decode(self, content: &str) -> Result<Value, String> {
        match self {
            Format::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            Format::Toml => toml::from_str(content).map_err(|e| e.to_string()),
            Format::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
        }
    }

    /// Serialize `value` in this format.
    pub fn encode<T: Serialize + ?Sized>(self, value: &T) -> Result<String, ConfigError> {
        let encoded = match self {
            Format::Json => encode_json(value),
            Format::Toml => toml::to_string(value).map_err(|e| e.to_string()),
            Format::Yaml => serde_yaml::to_string(value).map_err(|e| e.to_string()),
        };
        encoded.map_err(|message| ConfigError::Encode {
            format: self.as_str().to_string(),
            message,
        })
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(Format::Json),
            "toml" => Ok(Format::Toml),
            "yaml" => Ok(Format::Yaml),
            other => Err(ConfigError::UnsupportedFormat(other.to_string())),
        }
    }
}

fn encode_json<T: Serialize + ?Sized>(value: &T) -> Result<String, String> {
    let mut out = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"\t");
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
    value
        .serialize(&mut serializer)
        .map_err(|e| e.to_string())?;
    String::from_utf8(out).map_err(|e| e.to_string())
}

/// Decode the content of the file at `path`.
///
/// Dispatches on the extension; unknown extensions are probed in TOML, JSON,
/// YAML order and the first successful parse wins.
pub fn decode_file(content: &str, path: &Path) -> Result<Value, ConfigError> {
    if let Some(format) = Format::from_path(path) {
        return format.decode(content).map_err(|message| ConfigError::Decode {
            path: path.to_path_buf(),
            message,
        });
    }

    for format in PROBE_ORDER {
        match format.decode(content) {
            Ok(value) => {
                tracing::debug!(path = %path.display(), %format, "Decoded config by probing");
                return Ok(value);
            }
            Err(e) => {
                tracing::trace!(path = %path.display(), %format, error = %e, "Probe failed");
            }
        }
    }

    Err(ConfigError::Decode {
        path: path.to_path_buf(),
        message: "failed to decode config".to_string(),
    })
}
