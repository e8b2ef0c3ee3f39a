//! Whitespace trimming for persisted configuration values.

use serde_json::Value;

/// Removes leading/trailing whitespace from every string leaf of `value`,
/// recursing through arrays and objects.
///
/// Object keys are left untouched; adapters that need trimmed keys (the
/// mapping fields) trim them before serializing.
#[must_use]
pub fn deep_trim(value: Value) -> Value {
    match value {
        Value::String(s) => Value::String(s.trim().to_string()),
        Value::Array(items) => Value::Array(items.into_iter().map(deep_trim).collect()),
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, inner)| (key, deep_trim(inner)))
                .collect(),
        ),
        other => other,
    }
}
