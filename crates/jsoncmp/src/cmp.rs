#![allow(clippy::float_cmp)]

use serde_json::{Map, Number, Value};

/// Deep structural equality between two JSON values.
///
/// Arrays are compared element-wise, objects key-wise regardless of key order, and numbers by
/// numeric value, so `1` equals `1.0`. Values of different JSON types are never equal.
#[must_use]
pub fn equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(left), Value::Bool(right)) => left == right,
        (Value::String(left), Value::String(right)) => left == right,
        (Value::Number(left), Value::Number(right)) => equal_numbers(left, right),
        (Value::Array(left), Value::Array(right)) => equal_arrays(left, right),
        (Value::Object(left), Value::Object(right)) => equal_objects(left, right),
        (_, _) => false,
    }
}

#[inline]
pub(crate) fn equal_numbers(left: &Number, right: &Number) -> bool {
    if let (Some(left), Some(right)) = (left.as_u64(), right.as_u64()) {
        left == right
    } else if let (Some(left), Some(right)) = (left.as_i64(), right.as_i64()) {
        left == right
    } else {
        match (left.as_f64(), right.as_f64()) {
            (Some(left), Some(right)) => left == right,
            _ => false,
        }
    }
}

#[inline]
pub(crate) fn equal_arrays(left: &[Value], right: &[Value]) -> bool {
    left.len() == right.len()
        && left
            .iter()
            .zip(right.iter())
            .all(|(left, right)| equal(left, right))
}

#[inline]
pub(crate) fn equal_objects(left: &Map<String, Value>, right: &Map<String, Value>) -> bool {
    left.len() == right.len()
        && left.iter().all(|(key, value)| {
            right
                .get(key)
                .is_some_and(|other| equal(value, other))
        })
}

#[cfg(test)]
mod tests {
    use super::equal;
    use serde_json::{json, Value};
    use test_case::test_case;

    #[test_case(&json!(null), &json!(null); "nulls")]
    #[test_case(&json!(true), &json!(true); "booleans")]
    #[test_case(&json!("a"), &json!("a"); "strings")]
    #[test_case(&json!(1), &json!(1.0); "integer and float")]
    #[test_case(&json!(-3), &json!(-3.0); "negative integer and float")]
    #[test_case(&json!(u64::MAX), &json!(u64::MAX); "large unsigned")]
    #[test_case(&json!([1, [2, 3]]), &json!([1.0, [2, 3]]); "nested arrays")]
    #[test_case(&json!({"a": 1, "b": 2}), &json!({"b": 2, "a": 1}); "objects ignore key order")]
    #[test_case(&json!([]), &json!([]); "empty arrays")]
    #[test_case(&json!({}), &json!({}); "empty objects")]
    fn equal_values(left: &Value, right: &Value) {
        assert!(equal(left, right));
        assert!(equal(right, left));
    }

    #[test_case(&json!(null), &json!(false); "null and false")]
    #[test_case(&json!(0), &json!(false); "zero and false")]
    #[test_case(&json!(1), &json!(true); "one and true")]
    #[test_case(&json!("1"), &json!(1); "string and number")]
    #[test_case(&json!(1), &json!(2); "different numbers")]
    #[test_case(&json!(-1), &json!(1); "different signs")]
    #[test_case(&json!(0.1), &json!(0.2); "different floats")]
    #[test_case(&json!([1, 2]), &json!([2, 1]); "array order matters")]
    #[test_case(&json!([1]), &json!([1, 1]); "array lengths")]
    #[test_case(&json!({"a": 1}), &json!({"a": 1, "b": 2}); "object sizes")]
    #[test_case(&json!({"a": 1}), &json!({"b": 1}); "object keys")]
    #[test_case(&json!({}), &json!([]); "empty object and empty array")]
    fn different_values(left: &Value, right: &Value) {
        assert!(!equal(left, right));
        assert!(!equal(right, left));
    }
}
