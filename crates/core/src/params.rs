//! Pure helpers for extracting typed values from a `serde_json::Value`.
//!
//! Each helper takes the JSON object, a key, and a default; a missing key or
//! a wrong-typed value yields the default. These never fail, so a loose
//! params object (CLI `--params`, a saved spec fragment) always produces a
//! usable configuration; validation happens later, on the assembled
//! [`PatternSpec`](crate::pattern::PatternSpec).

use serde_json::Value;

/// Extracts an `f64` from `params[name]`, defaulting if missing or mistyped.
///
/// JSON integers are accepted and widened.
pub fn param_f64(params: &Value, name: &str, default: f64) -> f64 {
    params.get(name).and_then(Value::as_f64).unwrap_or(default)
}

/// Extracts a `u64` from `params[name]`, defaulting if missing, negative,
/// fractional, or mistyped.
pub fn param_u64(params: &Value, name: &str, default: u64) -> u64 {
    params.get(name).and_then(Value::as_u64).unwrap_or(default)
}

/// Extracts a `String` from `params[name]`, defaulting if missing or
/// mistyped.
pub fn param_string(params: &Value, name: &str, default: &str) -> String {
    params
        .get(name)
        .and_then(Value::as_str)
        .map(String::from)
        .unwrap_or_else(|| default.to_owned())
}
