//! Custom deserializers for flexible request parsing.
//!
//! Clients of the legacy service sent `driver_id` both as a JSON number and as
//! a string, so the HTTP layer accepts either.

use serde::{Deserialize, Deserializer};

/// Deserializes an optional driver id from a number or a numeric string.
///
/// # Accepted Formats
///
/// * **Integer**: `2`
/// * **Whole float**: `2.0` → 2
/// * **String numeric**: `"2"`, `" 2 "` → 2
/// * **Null / absent**: `None`, reported by the caller as a missing field
///
/// # Errors
///
/// Returns an error for fractional numbers, out-of-range values, strings that
/// do not parse as an integer, and any other JSON type.
pub fn de_option_driver_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;
    let opt = Option::<serde_json::Value>::deserialize(deserializer)?;
    let Some(v) = opt else { return Ok(None) };
    match v {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Ok(Some(i));
            }
            match n.as_f64() {
                Some(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64 => {
                    Ok(Some(f as i64))
                }
                _ => Err(D::Error::custom(format!(
                    "driver_id must be an integer, got {}",
                    n
                ))),
            }
        }
        serde_json::Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>().map(Some).map_err(|_| {
                D::Error::custom(format!("driver_id must be an integer, got '{}'", s))
            })
        }
        other => Err(D::Error::custom(format!(
            "invalid type for driver_id: {}",
            other
        ))),
    }
}
