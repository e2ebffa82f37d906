use jsoncmp::{compare, parse_and_canonicalize, CanonicalDocument, DiffReport};
use serde_json::{json, Value};
use test_case::test_case;

fn documents() -> Vec<Value> {
    vec![
        json!({}),
        json!({"x": 1, "y": {"z": 2}}),
        json!({"x": 1, "y": {"z": 3}, "w": 4}),
        json!({"a": [1, 2, {"b": null}], "c": "text", "d": false}),
        json!({"a": {"b": {"c": {"d": 1.5}}}, "e": []}),
        json!({"a": {"b": 1}, "c": {"d": {}}}),
        json!({"a": 1, "c": {"d": 2}, "f": [3]}),
        json!({"\u{e9}t\u{e9}": {"k": "v"}, "": 0}),
        json!({"a": 1, "b": {"x": 1}}),
        json!({"b": {}}),
    ]
}

fn sorted(paths: &[String]) -> Vec<&str> {
    let mut paths: Vec<&str> = paths.iter().map(String::as_str).collect();
    paths.sort_unstable();
    paths
}

fn differing(report: &DiffReport) -> Vec<String> {
    report.differing().iter().map(ToString::to_string).collect()
}

#[test]
fn missing_lists_are_symmetric() {
    let documents = documents();
    for left in &documents {
        for right in &documents {
            let forward = compare(left, right).expect("Objects");
            let backward = compare(right, left).expect("Objects");
            assert_eq!(
                sorted(forward.missing_in_right()),
                sorted(backward.missing_in_left())
            );
            assert_eq!(
                sorted(forward.missing_in_left()),
                sorted(backward.missing_in_right())
            );
            assert_eq!(forward.differing().len(), backward.differing().len());
        }
    }
}

#[test]
fn swapped_sides_may_reorder_nested_paths() {
    let left = json!({"a": 1, "b": {"x": 1}});
    let right = json!({"b": {}});
    let forward = compare(&left, &right).expect("Objects");
    let backward = compare(&right, &left).expect("Objects");
    assert_eq!(forward.missing_in_right(), ["/a", "/b/x"]);
    assert_eq!(backward.missing_in_left(), ["/b/x", "/a"]);
    assert_eq!(
        sorted(forward.missing_in_right()),
        sorted(backward.missing_in_left())
    );
}

#[test]
fn document_equals_itself() {
    for document in documents() {
        let report = compare(&document, &document).expect("Objects");
        assert!(report.is_empty(), "{document} reported {report:?}");
    }
}

#[test]
fn reference_scenario() {
    let report = compare(
        &json!({"x": 1, "y": {"z": 2}}),
        &json!({"x": 1, "y": {"z": 3}, "w": 4}),
    )
    .expect("Objects");
    assert_eq!(report.missing_in_left(), ["/w"]);
    assert!(report.missing_in_right().is_empty());
    assert_eq!(differing(&report), ["/y/z: 2 != 3"]);
}

#[test_case(r#"{"b": 1, "a": [3, 1, 2]}"#; "flat object")]
#[test_case(r#"{"n": {"z": {"y": 1, "x": [{"q": 1, "p": 2}]}}}"#; "deep object")]
#[test_case(r#"[{"b": 1, "a": 2}, 1e300, -0.5, "s\"q"]"#; "array root")]
#[test_case(r#"18446744073709551615"#; "largest unsigned")]
#[test_case(r#"123456789012345678901234567890"#; "integer beyond u64")]
#[test_case(r#""é😀""#; "non ascii text")]
fn canonicalization_is_idempotent(input: &str) {
    let once = parse_and_canonicalize(input).expect("Valid JSON");
    let twice = parse_and_canonicalize(&once).expect("Canonical output is valid JSON");
    assert_eq!(once, twice);
}

#[test]
fn canonicalization_ignores_key_order() {
    let first = parse_and_canonicalize(r#"{"a": 1, "b": {"c": 2, "d": 3}}"#).expect("Valid JSON");
    let second =
        parse_and_canonicalize(r#"{"b": {"d": 3, "c": 2}, "a": 1}"#).expect("Valid JSON");
    assert_eq!(first, second);
}

#[test]
fn canonicalization_keeps_array_order() {
    let first = parse_and_canonicalize(r#"{"a": [1, 2]}"#).expect("Valid JSON");
    let second = parse_and_canonicalize(r#"{"a": [2, 1]}"#).expect("Valid JSON");
    assert_ne!(first, second);
}

#[test]
fn malformed_input_is_reported() {
    let error = parse_and_canonicalize("{invalid").expect_err("Invalid JSON");
    assert!(!error.to_string().is_empty());
    assert_eq!(error.line(), 1);
}

#[test]
fn differ_follows_source_key_order() {
    let left: Value = serde_json::from_str(r#"{"c": 1, "a": 1, "b": 1}"#).expect("Valid JSON");
    let right: Value = serde_json::from_str(r#"{"q": 1}"#).expect("Valid JSON");
    let report = compare(&left, &right).expect("Objects");
    assert_eq!(report.missing_in_right(), ["/c", "/a", "/b"]);

    let left = CanonicalDocument::from_value(left);
    let report = compare(left.value(), &right).expect("Objects");
    assert_eq!(report.missing_in_right(), ["/a", "/b", "/c"]);
}
