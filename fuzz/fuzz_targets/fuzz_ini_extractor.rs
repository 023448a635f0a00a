#![no_main]

use ark_locator::{extract_waypoints, WaypointRecord};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(content) = std::str::from_utf8(data) else {
        return;
    };
    let records = extract_waypoints(content);

    // Ergebnis ist immer einheitlich: nur eine Variante pro Aufruf
    let first = std::mem::discriminant(match records.first() {
        Some(record) => record,
        None => return,
    });
    assert!(records.iter().all(|r| std::mem::discriminant(r) == first));

    for record in &records {
        if let WaypointRecord::Section(dump) = record {
            assert!(dump.raw.chars().count() <= 203);
        }
    }
});
