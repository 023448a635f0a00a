#![no_main]

use ark_locator::parse_marker_import;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(json) = std::str::from_utf8(data) {
        let _ = parse_marker_import(json);
    }
});
