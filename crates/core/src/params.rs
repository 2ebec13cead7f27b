//! Lenient typed lookups into a `serde_json::Value` parameter object.
//!
//! A missing key or a value of the wrong JSON type yields the default.
//! Range checking happens later, in the poster parameter validation.

use serde_json::Value;

/// Extracts an `f64` from `params[name]`. JSON integers are accepted.
pub fn param_f64(params: &Value, name: &str, default: f64) -> f64 {
    params.get(name).and_then(Value::as_f64).unwrap_or(default)
}

/// Extracts a `usize` from `params[name]`; only non-negative integers qualify.
pub fn param_usize(params: &Value, name: &str, default: usize) -> usize {
    params
        .get(name)
        .and_then(Value::as_u64)
        .and_then(|v| usize::try_from(v).ok())
        .unwrap_or(default)
}

/// Extracts a `String` from `params[name]`.
pub fn param_string(params: &Value, name: &str, default: &str) -> String {
    params
        .get(name)
        .and_then(Value::as_str)
        .map(String::from)
        .unwrap_or_else(|| default.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn param_f64_extracts_float_and_integer() {
        let params = json!({"radius_min": 0.2, "wobble_max": 3});
        assert_eq!(param_f64(&params, "radius_min", 0.0), 0.2);
        assert_eq!(param_f64(&params, "wobble_max", 0.0), 3.0);
    }

    #[test]
    fn param_f64_falls_back_on_missing_wrong_type_or_null() {
        let params = json!({"a": "wide", "b": null});
        assert_eq!(param_f64(&params, "a", 1.5), 1.5);
        assert_eq!(param_f64(&params, "b", 2.5), 2.5);
        assert_eq!(param_f64(&params, "c", 3.5), 3.5);
    }

    #[test]
    fn param_f64_falls_back_for_non_object() {
        assert_eq!(param_f64(&json!([1, 2]), "radius_min", 0.15), 0.15);
    }

    #[test]
    fn param_usize_extracts_existing_integer() {
        assert_eq!(param_usize(&json!({"layer_count": 42}), "layer_count", 8), 42);
    }

    #[test]
    fn param_usize_rejects_floats_and_negatives() {
        assert_eq!(param_usize(&json!({"n": 2.5}), "n", 8), 8);
        assert_eq!(param_usize(&json!({"n": -1}), "n", 8), 8);
        assert_eq!(param_usize(&json!({"n": "many"}), "n", 8), 8);
    }

    #[test]
    fn param_string_extracts_and_falls_back() {
        let params = json!({"palette": "ocean", "other": 4});
        assert_eq!(param_string(&params, "palette", "random"), "ocean");
        assert_eq!(param_string(&params, "other", "random"), "random");
        assert_eq!(param_string(&params, "missing", "random"), "random");
    }
}
