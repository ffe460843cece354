use serde_json::{Map, Value};

// CloudFormation properties are TitleCase while the Datadog API expects
// lower_snake_case, e.g. `IsReadOnly` -> `is_read_only`.

/// Convert a single TitleCase key to snake_case.
///
/// Every uppercase letter after the first character gets an underscore in
/// front of it, then the whole key is lowercased. Keys that are already
/// snake_case come back unchanged.
pub fn from_title_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);

    for (i, c) in key.chars().enumerate() {
        if c.is_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }

    out
}

/// Recursively rewrite every object key from TitleCase to snake_case.
///
/// Arrays keep their order and length, scalars are returned as they are.
/// The input is never modified; a new value is built.
pub fn format(value: &Value) -> Value {
    match value {
        Value::Array(items) => Value::Array(items.iter().map(format).collect()),
        Value::Object(map) => Value::Object(format_map(map)),
        other => other.clone(),
    }
}

pub fn format_map(map: &Map<String, Value>) -> Map<String, Value> {
    map.iter()
        .map(|(key, value)| (from_title_case(key), format(value)))
        .collect()
}
