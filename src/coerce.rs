//! Lenient conversions from loosely typed JSON values.
//!
//! Caller payloads and catalog rows arrive with numbers encoded as numbers,
//! strings, or not at all. Everything downstream works on plain `f64`.

use serde_json::Value;

/// Parses a JSON value as a finite number.
///
/// Numbers pass through; strings are trimmed and parsed. Empty strings,
/// `null`, booleans, containers and non-finite results yield `None`.
pub fn number(value: Option<&Value>) -> Option<f64> {
    let parsed = match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                trimmed.parse::<f64>().ok()
            }
        }
        _ => None,
    };
    parsed.filter(|v| v.is_finite())
}

/// Like [`number`] but substitutes `default` on failure.
pub fn number_or(value: Option<&Value>, default: f64) -> f64 {
    number(value).unwrap_or(default)
}

/// Parses a JSON value as a whole number, truncating any fraction (`"25.9"` -> 25).
pub fn integer(value: Option<&Value>) -> Option<i64> {
    number(value).map(|v| v.trunc() as i64)
}

/// Renders a JSON scalar as a trimmed string. `null` and containers yield `None`.
pub fn text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Returns the first key of `keys` holding a non-null value in `object`.
pub fn first_present<'a>(object: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| object.get(*key))
        .find(|value| !value.is_null())
}
