//! Strategie 2: lose Koordinatenzeilen `x, y[, z]`.

use super::{non_empty, parse_number};
use crate::core::{CoordinateLine, WaypointRecord};
use regex::Regex;
use std::sync::LazyLock;

static COORDINATES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(-?\d+(?:\.\d+)?)\s*,\s*(-?\d+(?:\.\d+)?)(?:\s*,\s*(-?\d+(?:\.\d+)?))?")
        .expect("statisches Regex-Pattern")
});

/// Durchsucht jede Zeile nach einem Koordinatenmuster.
///
/// Leerzeilen, Kommentare (`;`) und Sektions-Header (`[`) werden übersprungen,
/// Zeilen ohne Treffer stillschweigend ignoriert.
pub(super) fn parse(content: &str) -> Option<Vec<WaypointRecord>> {
    let mut records = Vec::new();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with(';') || line.starts_with('[') {
            continue;
        }
        let Some(caps) = COORDINATES.captures(line) else {
            continue;
        };

        let number = |index: usize| caps.get(index).map(|m| parse_number(m.as_str()));
        let (Some(x), Some(y)) = (number(1), number(2)) else {
            continue;
        };

        records.push(WaypointRecord::CoordinateLine(CoordinateLine {
            label: format!("Waypoint {}", records.len() + 1),
            x,
            y,
            z: number(3).unwrap_or(0.0),
            raw: line.to_string(),
        }));
    }

    non_empty(records)
}
