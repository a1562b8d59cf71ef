//! Normalization of TOML values into secret strings.
//!
//! Scalars keep their literal textual form; arrays and nested tables are
//! serialized as compact JSON so structured values survive as a single
//! secret string.

use toml::Value;

/// Stringify a TOML value for upload.
///
/// Total and deterministic: strings pass through unquoted, other scalars
/// use their literal form, and composites become compact JSON with
/// non-ASCII characters preserved literally.
pub fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Integer(i) => i.to_string(),
        Value::Float(f) => f.to_string(),
        Value::Boolean(b) => b.to_string(),
        Value::Datetime(d) => d.to_string(),
        Value::Array(_) | Value::Table(_) => to_json(value).to_string(),
    }
}

/// Map a TOML value onto JSON.
///
/// Datetimes become their TOML textual form; non-finite floats have no
/// JSON representation and become null.
fn to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::String(s) => serde_json::Value::String(s.clone()),
        Value::Integer(i) => serde_json::Value::from(*i),
        Value::Float(f) => serde_json::Number::from_f64(*f)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        Value::Boolean(b) => serde_json::Value::Bool(*b),
        Value::Datetime(d) => serde_json::Value::String(d.to_string()),
        Value::Array(items) => serde_json::Value::Array(items.iter().map(to_json).collect()),
        Value::Table(table) => serde_json::Value::Object(
            table
                .iter()
                .map(|(k, v)| (k.clone(), to_json(v)))
                .collect(),
        ),
    }
}
