#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(canonical) = jsoncmp::parse_and_canonicalize(text) {
            let again = jsoncmp::parse_and_canonicalize(&canonical)
                .expect("Canonical output is valid JSON");
            assert_eq!(canonical, again);
        }
    }
});
