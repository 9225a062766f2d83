//! Metadata decoding.

use serde_yaml::Value;
use tracing::debug;

/// Decode raw metadata text as YAML.
///
/// Returns `None` for blank text, for an explicit YAML null, and when the
/// text is not valid YAML. Decode errors are never propagated.
pub fn decode_meta(raw: &str) -> Option<Value> {
    if raw.trim().is_empty() {
        return None;
    }

    match serde_yaml::from_str::<Value>(raw) {
        Ok(Value::Null) => None,
        Ok(value) => Some(value),
        Err(e) => {
            debug!(error = %e, "Discarding undecodable fixture metadata");
            None
        }
    }
}

/// Truthiness of a metadata value: null, `false`, zero and `""` are false.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Sequence(_) | Value::Mapping(_) | Value::Tagged(_) => true,
    }
}

/// Render a scalar metadata value as text. Collections yield `None`.
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
