#![no_main]
use libfuzzer_sys::fuzz_target;
use serde_json::Value;

fn sorted(paths: &[String]) -> Vec<&str> {
    let mut paths: Vec<&str> = paths.iter().map(String::as_str).collect();
    paths.sort_unstable();
    paths
}

fuzz_target!(|data: (&[u8], &[u8])| {
    let (Ok(left), Ok(right)) = (
        serde_json::from_slice::<Value>(data.0),
        serde_json::from_slice::<Value>(data.1),
    ) else {
        return;
    };
    let (Ok(forward), Ok(backward)) = (
        jsoncmp::compare(&left, &right),
        jsoncmp::compare(&right, &left),
    ) else {
        return;
    };
    assert_eq!(
        sorted(forward.missing_in_left()),
        sorted(backward.missing_in_right())
    );
    assert_eq!(
        sorted(forward.missing_in_right()),
        sorted(backward.missing_in_left())
    );
    assert_eq!(forward.differing().len(), backward.differing().len());
    assert!(jsoncmp::compare(&left, &left).is_ok_and(|report| report.is_empty()));
});
