use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Coerce an arbitrary JSON value to a number the way the dashboard
/// treats form and wire input: missing, null, booleans, and unparsable
/// strings all become `0.0`. Numeric strings ("42.5") are accepted
/// because older stored documents contain them.
#[must_use]
pub fn to_number_or_zero(value: &Value) -> f64 {
    let n = match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    };
    sanitize(n)
}

/// Normalize NaN and infinities to `0.0` so they never reach a summary
/// field or the wire format.
#[must_use]
pub fn sanitize(n: f64) -> f64 {
    if n.is_finite() {
        n
    } else {
        0.0
    }
}

/// Serde adapter for numeric document fields.
/// Used with `#[serde(default, deserialize_with = "coerce::lenient_f64")]`
/// so that every read of a numeric field goes through the same coercion.
pub fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(to_number_or_zero(&value))
}
