//! Best-Effort-Parser für Wegpunkte in ARK-Konfigurationsdateien.
//!
//! Drei Strategien werden der Reihe nach probiert; die erste mit nicht-leerem
//! Ergebnis gewinnt, Ergebnisse werden nie gemischt:
//! 1. `MapMarkerEntries=(...)`-Blöcke (strukturiert)
//! 2. lose `x, y[, z]`-Zeilen
//! 3. Roh-Dump aller Sektionen als Diagnose

mod coordinate_lines;
mod marker_entries;
mod sections;

use crate::core::WaypointRecord;
use regex::Regex;
use std::sync::LazyLock;

/// Eine Parser-Strategie: `None` bedeutet "nichts gefunden, nächste probieren".
type Strategy = fn(&str) -> Option<Vec<WaypointRecord>>;

const STRATEGIES: [(&str, Strategy); 3] = [
    ("marker entries", marker_entries::parse),
    ("coordinate lines", coordinate_lines::parse),
    ("section dump", sections::parse),
];

/// Längstes numerisches Präfix, wie es ein nachsichtiger Float-Parser akzeptiert.
static NUMERIC_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:\d+\.?\d*(?:[eE][+-]?\d+)?|\.\d+(?:[eE][+-]?\d+)?|Infinity)")
        .expect("statisches Regex-Pattern")
});

/// Extrahiert Wegpunkte aus dem Text einer Konfigurationsdatei.
///
/// Reine Funktion ohne I/O. Schlägt nie fehl: unbekannte Formate liefern
/// Sektions-Platzhalter, leerer Input eine leere Liste.
pub fn extract_waypoints(content: &str) -> Vec<WaypointRecord> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    for (name, strategy) in STRATEGIES {
        if let Some(records) = strategy(content) {
            log::debug!("Strategie '{}' lieferte {} Datensätze", name, records.len());
            return records;
        }
    }
    log::debug!("Keine Wegpunkte gefunden");
    Vec::new()
}

/// Parst eine Zahl nachsichtig: führender Whitespace wird übersprungen,
/// das längste gültige Zahlen-Präfix zählt (`"12.5abc"` → 12.5).
/// Ohne Zahl am Anfang ergibt sich `NaN`.
fn parse_number(text: &str) -> f64 {
    NUMERIC_PREFIX
        .find(text.trim_start())
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(f64::NAN)
}

/// `None` für leere Ergebnislisten, damit die nächste Strategie greift.
fn non_empty(records: Vec<WaypointRecord>) -> Option<Vec<WaypointRecord>> {
    if records.is_empty() {
        None
    } else {
        Some(records)
    }
}

#[cfg(test)]
mod tests;
