//! Strategie 1: strukturierte `MapMarkerEntries=(Key=Value,...)`-Blöcke.

use super::{non_empty, parse_number};
use crate::core::waypoint_record::UNNAMED_WAYPOINT;
use crate::core::{MarkerEntry, WaypointRecord};
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Blockinhalt bis zur schließenden Klammer; `)` in Anführungszeichen beendet ihn nicht.
static MARKER_ENTRY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)MapMarkerEntries=\(((?:"[^"]*"|[^)"]|")*)\)"#)
        .expect("statisches Regex-Pattern")
});

/// `key=value` mit Wert in Anführungszeichen (ohne Quotes) oder bis zum nächsten Komma.
static KEY_VALUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(\w+)=(?:"([^"]*)"|([^,]*))"#).expect("statisches Regex-Pattern")
});

/// Sucht alle Marker-Blöcke im gesamten Text (nicht zeilenweise).
pub(super) fn parse(content: &str) -> Option<Vec<WaypointRecord>> {
    let records = MARKER_ENTRY
        .captures_iter(content)
        .filter_map(|caps| {
            let body = caps.get(1).map_or("", |m| m.as_str());
            parse_entry(body)
        })
        .map(WaypointRecord::MarkerEntry)
        .collect();
    non_empty(records)
}

/// Wandelt den Inhalt eines Blocks in einen Eintrag um.
///
/// Ohne `x` oder `y` wird der Block verworfen. Nicht-numerische Werte werden
/// nicht validiert und landen als `NaN` im Ergebnis.
fn parse_entry(body: &str) -> Option<MarkerEntry> {
    let fields = parse_fields(body);
    let field = |key: &str| fields.get(key).map(String::as_str).filter(|v| !v.is_empty());

    let (Some(x), Some(y)) = (field("x"), field("y")) else {
        log::debug!("MapMarkerEntries ohne X/Y verworfen: {}", body);
        return None;
    };

    Some(MarkerEntry {
        label: field("name")
            .or_else(|| field("label"))
            .unwrap_or(UNNAMED_WAYPOINT)
            .to_string(),
        x: parse_number(x),
        y: parse_number(y),
        z: field("z").map_or(0.0, parse_number),
        color: field("color").map(str::to_string),
    })
}

/// Zerlegt `Key=Value,...` in eine Map mit kleingeschriebenen Schlüsseln.
/// Spätere Vorkommen eines Schlüssels überschreiben frühere.
fn parse_fields(body: &str) -> HashMap<String, String> {
    KEY_VALUE
        .captures_iter(body)
        .filter_map(|caps| {
            let key = caps.get(1)?.as_str().to_lowercase();
            let value = match (caps.get(2), caps.get(3)) {
                (Some(quoted), _) => quoted.as_str().to_string(),
                (None, Some(plain)) => plain.as_str().trim().to_string(),
                (None, None) => String::new(),
            };
            Some((key, value))
        })
        .collect()
}
