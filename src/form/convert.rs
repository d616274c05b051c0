use serde_json::Value;

/// Seed text for an input buffer backed by a JSON value. Strings are used
/// as-is rather than in their quoted JSON form.
pub(crate) fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

pub(crate) fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse().ok()
}
