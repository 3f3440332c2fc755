#![no_main]

use libfuzzer_sys::fuzz_target;
use mongodb_uri_builder::{build_from_json, build_from_value};

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(uri) = build_from_json(text) {
            assert!(uri.starts_with("mongodb://"));
        }
    }

    // Untyped values that are not objects still have to build cleanly
    if let Ok(value) = serde_json::from_slice::<serde_json::Value>(data) {
        if let Ok(uri) = build_from_value(&value) {
            assert!(uri.starts_with("mongodb://"));
        }
    }
});
