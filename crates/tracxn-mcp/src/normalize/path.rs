//! Defaulted lookups into loosely-shaped upstream JSON.
//!
//! Tracxn payloads omit keys freely, at any depth. Every normalizer goes
//! through these helpers instead of indexing directly. JSON `null` is treated
//! the same as a missing key.

use serde_json::Value;

/// Placeholder used when a scalar field is missing.
pub const NOT_AVAILABLE: &str = "N/A";

/// Nested USD value of a company's total equity funding.
pub const EQUITY_FUNDING_USD: &[&str] = &["totalEquityFunding", "amount", "USD", "value"];

/// Walk `path` through nested objects.
#[must_use]
pub fn at<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter()
        .try_fold(value, |current, key| current.as_object()?.get(*key))
        .filter(|v| !v.is_null())
}

/// Value at `path`, or `default` as a JSON string.
#[must_use]
pub fn or_default(value: &Value, path: &[&str], default: &str) -> Value {
    at(value, path).cloned().unwrap_or_else(|| Value::String(default.to_string()))
}

/// Value at `path`, or `"N/A"`.
#[must_use]
pub fn or_na(value: &Value, path: &[&str]) -> Value {
    or_default(value, path, NOT_AVAILABLE)
}

/// Array at `path`, or an empty slice.
#[must_use]
pub fn list<'a>(value: &'a Value, path: &[&str]) -> &'a [Value] {
    at(value, path).and_then(Value::as_array).map(Vec::as_slice).unwrap_or_default()
}

/// Value at `path` when it is truthy.
#[must_use]
pub fn truthy<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    at(value, path).filter(|v| is_truthy(v))
}

/// Truthiness: null, false, zero, and empty strings/arrays/objects are falsy.
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Numeric reading of a value; numeric strings count.
#[must_use]
pub fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_at_walks_and_stops() {
        let v = json!({"a": {"b": {"c": 3}}, "n": null, "s": "text"});
        assert_eq!(at(&v, &["a", "b", "c"]), Some(&json!(3)));
        assert_eq!(at(&v, &["a", "x", "c"]), None);
        assert_eq!(at(&v, &["n"]), None);
        assert_eq!(at(&v, &["s", "deeper"]), None);
        assert_eq!(at(&v, &[]), Some(&v));
    }

    #[test]
    fn test_defaults() {
        let v = json!({"name": "Acme"});
        assert_eq!(or_na(&v, &["name"]), json!("Acme"));
        assert_eq!(or_na(&v, &["location", "city"]), json!("N/A"));
        assert_eq!(or_default(&v, &["id"], "Unknown"), json!("Unknown"));
    }

    #[test]
    fn test_list_on_non_array() {
        let v = json!({"xs": {"not": "array"}, "ys": [1, 2]});
        assert!(list(&v, &["xs"]).is_empty());
        assert!(list(&v, &["missing"]).is_empty());
        assert_eq!(list(&v, &["ys"]).len(), 2);
    }

    #[test]
    fn test_truthiness() {
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(0.0)));
        assert!(!is_truthy(&json!("")));
        assert!(!is_truthy(&json!({})));
        assert!(is_truthy(&json!(1.5)));
        assert!(is_truthy(&json!([0])));
    }

    #[test]
    fn test_as_number() {
        assert_eq!(as_number(&json!(12)), Some(12.0));
        assert_eq!(as_number(&json!(" 3.5 ")), Some(3.5));
        assert_eq!(as_number(&json!("abc")), None);
        assert_eq!(as_number(&json!(true)), None);
    }
}
