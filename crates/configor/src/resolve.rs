//! Directive resolution over a configuration tree.
//!
//! Responsibilities:
//! - Overlay environment variables onto fields (explicit `env` name, or the
//!   prefix-joined field path in mixed and upper case).
//! - Apply `default` literals to fields still blank after the environment pass.
//! - Reject blank `required` fields.
//! - Recurse into nested records and into each element of record sequences.
//! - Read bare numbers and booleans in text fields as their text.
//!
//! Does NOT handle:
//! - Reading or merging files (see `crate::loader` and `crate::merge`).
//!
//! Invariants:
//! - Traversal is depth-first, in schema declaration order, then element index order.
//! - The first environment candidate that is set wins; later candidates are not read.
//! - Fields absent from the tree stay absent unless a value is resolved for them.
//! - An anonymous record takes its own directives first, then its members are
//!   resolved in the parent without adding a name segment.
//! - The same tree, schema and environment always produce the same result.

use serde_json::{Map, Value};

use crate::loader::{ConfigError, field_env_var};
use crate::merge::deep_merge;
use crate::schema::{Field, Kind, Schema};

/// Resolve directives against the process environment.
///
/// `prefixes` is the root of every generated environment variable name,
/// usually `["Configor"]`, or empty when prefixing is disabled.
pub fn resolve_tags(
    tree: &mut Value,
    schema: &Schema,
    prefixes: &[String],
) -> Result<(), ConfigError> {
    resolve_tags_with(tree, schema, prefixes, field_env_var)
}

/// Resolve directives with a caller-supplied environment lookup.
pub fn resolve_tags_with<F>(
    tree: &mut Value,
    schema: &Schema,
    prefixes: &[String],
    lookup: F,
) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if schema.is_empty() {
        return Ok(());
    }
    let Value::Object(root) = tree else {
        return Err(ConfigError::NotARecord {
            path: "<root>".to_string(),
        });
    };
    Walker { lookup }.record(root, schema, prefixes, "")
}

struct Walker<F> {
    lookup: F,
}

impl<F> Walker<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn record(
        &self,
        node: &mut Map<String, Value>,
        schema: &Schema,
        prefixes: &[String],
        path: &str,
    ) -> Result<(), ConfigError> {
        for field in schema.fields() {
            if field.is_anonymous()
                && let Kind::Record(inner) = field.kind().unwrapped()
            {
                let mut embedded = Value::Object(take_fields(node, inner));
                let (chain, field_path) = segment(field, prefixes, path);
                self.directives(field, &mut embedded, &chain, &field_path)?;
                if let Value::Object(map) = embedded {
                    node.extend(map);
                }
                self.record(node, inner, prefixes, path)?;
                continue;
            }

            let existed = node.contains_key(field.name());
            let mut value = node.remove(field.name()).unwrap_or(Value::Null);
            self.field(field, &mut value, prefixes, path)?;
            if existed || !value.is_null() {
                node.insert(field.name().to_string(), value);
            }
        }
        Ok(())
    }

    fn field(
        &self,
        field: &Field,
        value: &mut Value,
        prefixes: &[String],
        path: &str,
    ) -> Result<(), ConfigError> {
        let (chain, field_path) = segment(field, prefixes, path);
        self.directives(field, value, &chain, &field_path)?;

        match (field.kind().unwrapped(), value) {
            (Kind::Record(inner), Value::Object(map)) => {
                self.record(map, inner, &chain, &field_path)?;
            }
            (Kind::Records(inner), Value::Array(items)) => {
                for (index, item) in items.iter_mut().enumerate() {
                    if let Value::Object(map) = item {
                        let mut element_chain = chain.clone();
                        element_chain.push(index.to_string());
                        let element_path = format!("{field_path}.{index}");
                        self.record(map, inner, &element_chain, &element_path)?;
                    }
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Apply the `env`, `default` and `required` directives of `field` to `value`.
    fn directives(
        &self,
        field: &Field,
        value: &mut Value,
        chain: &[String],
        field_path: &str,
    ) -> Result<(), ConfigError> {
        if matches!(field.kind().unwrapped(), Kind::Text) {
            text_from_scalar(value);
        }

        for var in env_candidates(field, chain) {
            if let Some(raw) = (self.lookup)(&var) {
                let parsed = parse_literal(&raw, field.kind(), field_path, &var)?;
                apply(value, parsed);
                break;
            }
        }

        if is_blank(value, field.kind()) {
            if let Some(literal) = field.default_literal() {
                let parsed = parse_literal(literal, field.kind(), field_path, "default")?;
                apply(value, parsed);
            } else if field.is_required() {
                return Err(ConfigError::MissingRequired {
                    path: field_path.to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Environment name chain and dotted path for `field` under `prefixes`/`path`.
fn segment(field: &Field, prefixes: &[String], path: &str) -> (Vec<String>, String) {
    let mut chain = prefixes.to_vec();
    chain.push(field.name().to_string());
    (chain, join_path(path, field.name()))
}

/// Move the members `schema` declares out of `node`.
fn take_fields(node: &mut Map<String, Value>, schema: &Schema) -> Map<String, Value> {
    schema
        .fields()
        .iter()
        .filter_map(|field| {
            node.remove(field.name())
                .map(|value| (field.name().to_string(), value))
        })
        .collect()
}

/// Files may spell text as a bare number or boolean (`password: 12345`).
fn text_from_scalar(value: &mut Value) {
    let text = match value {
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        _ => return,
    };
    *value = Value::String(text);
}

fn join_path(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{parent}.{name}")
    }
}

fn apply(value: &mut Value, parsed: Value) {
    let current = std::mem::take(value);
    *value = deep_merge(current, parsed);
}

/// Environment variable names tried for `field`, in order.
///
/// An explicit `env` directive is the only candidate. Otherwise the chain
/// (prefix, ancestor names, element indices, field name) is joined with `_`,
/// first as written and then upper-cased.
pub fn env_candidates(field: &Field, chain: &[String]) -> Vec<String> {
    if let Some(var) = field.env_var() {
        return vec![var.to_string()];
    }
    let mixed = chain.join("_");
    let upper = mixed.to_uppercase();
    if upper == mixed {
        vec![mixed]
    } else {
        vec![mixed, upper]
    }
}

/// Parse an environment value or `default` literal for a field of `kind`.
///
/// Literals use YAML syntax. Text fields keep the raw text when YAML reads it
/// as a number, boolean or null.
pub fn parse_literal(
    raw: &str,
    kind: &Kind,
    path: &str,
    source: &str,
) -> Result<Value, ConfigError> {
    let malformed = |message: String| ConfigError::MalformedLiteral {
        path: path.to_string(),
        source_name: source.to_string(),
        message,
    };

    let parsed: Value = serde_yaml::from_str(raw).map_err(|e| malformed(e.to_string()))?;
    match kind.unwrapped() {
        Kind::Text => match parsed {
            Value::String(text) => Ok(Value::String(text)),
            Value::Null | Value::Bool(_) | Value::Number(_) => {
                Ok(Value::String(raw.trim().to_string()))
            }
            _ => Err(malformed("expected text".to_string())),
        },
        Kind::Record(_) => match parsed {
            Value::Object(_) | Value::Null => Ok(parsed),
            _ => Err(malformed("expected a mapping".to_string())),
        },
        Kind::Records(_) => match parsed {
            Value::Array(_) | Value::Null => Ok(parsed),
            _ => Err(malformed("expected a sequence".to_string())),
        },
        Kind::Scalar | Kind::Optional(_) => Ok(parsed),
    }
}

/// Whether `value` counts as unset for a field of `kind`.
///
/// Optional fields are blank only when null; everything else uses [`is_zero`].
pub fn is_blank(value: &Value, kind: &Kind) -> bool {
    if kind.is_optional() {
        value.is_null()
    } else {
        is_zero(value)
    }
}

/// Zero value test: null, `false`, `0`, `""`, `[]`, or an object whose members
/// are all zero.
pub fn is_zero(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.values().all(is_zero),
    }
}
