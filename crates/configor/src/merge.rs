//! Structural merge of decoded configuration trees.
//!
//! Every configuration file decodes into a `serde_json::Value`. Files are
//! combined by merging each tree over the accumulated one, which reproduces
//! "later decode overwrites the fields it mentions" without mutating the
//! caller's typed value.

use serde_json::Value;

/// Merge `overlay` over `base`.
///
/// - Objects merge key by key, recursively.
/// - Arrays, strings, numbers and booleans in `overlay` replace `base`.
/// - A null `overlay` keeps `base` (null means "not specified").
pub fn deep_merge(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Object(mut base_map), Value::Object(overlay_map)) => {
            for (key, overlay_value) in overlay_map {
                let merged = match base_map.remove(&key) {
                    Some(base_value) => deep_merge(base_value, overlay_value),
                    None => overlay_value,
                };
                base_map.insert(key, merged);
            }
            Value::Object(base_map)
        }
        (base, Value::Null) => base,
        (_, overlay) => overlay,
    }
}

/// Fold [`deep_merge`] over `values`; later values take precedence.
pub fn deep_merge_all(values: impl IntoIterator<Item = Value>) -> Value {
    values.into_iter().fold(Value::Null, deep_merge)
}
