//! Export-Dokumente.

use crate::core::{ArkMap, Category, MapMarker, WaypointRecord};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Export der aus einer Konfigurationsdatei extrahierten Wegpunkte.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionExport<'a> {
    pub export_date: DateTime<Utc>,
    pub source_file: String,
    pub waypoint_count: usize,
    pub waypoints: &'a [WaypointRecord],
}

/// Export der Marker einer Karte inkl. Kategorien.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerExport<'a> {
    pub export_date: DateTime<Utc>,
    pub map_name: ArkMap,
    pub map_display_name: &'static str,
    pub waypoint_count: usize,
    pub categories: &'a [Category],
    pub waypoints: &'a [MapMarker],
}

/// Baut das Export-Dokument für ein Extraktionsergebnis.
pub fn extraction_export<'a>(
    records: &'a [WaypointRecord],
    source_file: &str,
    now: DateTime<Utc>,
) -> ExtractionExport<'a> {
    ExtractionExport {
        export_date: now,
        source_file: source_file.to_string(),
        waypoint_count: records.len(),
        waypoints: records,
    }
}

/// Baut das Export-Dokument für die Marker einer Karte.
pub fn marker_export<'a>(
    map: ArkMap,
    categories: &'a [Category],
    markers: &'a [MapMarker],
    now: DateTime<Utc>,
) -> MarkerExport<'a> {
    MarkerExport {
        export_date: now,
        map_name: map,
        map_display_name: map.display_name(),
        waypoint_count: markers.len(),
        categories,
        waypoints: markers,
    }
}

/// Dateiname für Marker-Exporte: `ark-waypoints-<map>-<millis>.json`.
pub fn export_file_name(map: ArkMap, now: DateTime<Utc>) -> String {
    format!("ark-waypoints-{}-{}.json", map.id(), now.timestamp_millis())
}

/// Dateiname für Extraktions-Exporte: `ark-config-waypoints-<millis>.json`.
pub fn extraction_file_name(now: DateTime<Utc>) -> String {
    format!("ark-config-waypoints-{}.json", now.timestamp_millis())
}

/// Serialisiert ein Dokument eingerückt (2 Leerzeichen).
pub fn to_pretty_json<T: Serialize>(document: &T) -> Result<String> {
    serde_json::to_string_pretty(document).context("JSON-Serialisierung fehlgeschlagen")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{default_categories, MarkerEntry, SectionDump};
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn extraction_export_has_expected_shape() {
        let records = vec![
            WaypointRecord::MarkerEntry(MarkerEntry {
                label: "Cave".into(),
                x: 1.0,
                y: 2.0,
                z: 0.0,
                color: None,
            }),
            WaypointRecord::Section(SectionDump {
                label: "Section: A".into(),
                raw: "b".into(),
            }),
        ];
        let doc = extraction_export(&records, "GameUserSettings.ini", fixed_time());
        let value = serde_json::to_value(&doc).unwrap();

        assert_eq!(value["sourceFile"], "GameUserSettings.ini");
        assert_eq!(value["waypointCount"], 2);
        assert_eq!(value["exportDate"], "2024-03-01T12:00:00Z");
        assert_eq!(value["waypoints"][0]["label"], "Cave");
        assert_eq!(value["waypoints"][1]["isSection"], true);
    }

    #[test]
    fn marker_export_names_map_and_counts_markers() {
        let categories = default_categories();
        let markers = vec![MapMarker::new("Base", "bases", 10.0, 20.0)];
        let doc = marker_export(ArkMap::ScorchedEarth, &categories, &markers, fixed_time());
        let value = serde_json::to_value(&doc).unwrap();

        assert_eq!(value["mapName"], "scorched-earth");
        assert_eq!(value["mapDisplayName"], "Scorched Earth");
        assert_eq!(value["waypointCount"], 1);
        assert!(value["waypoints"][0]["createdAt"].is_string());
        assert_eq!(
            value["categories"].as_array().map(Vec::len),
            Some(categories.len())
        );
    }

    #[test]
    fn file_names_carry_millis() {
        let now = fixed_time();
        let millis = now.timestamp_millis();
        assert_eq!(
            export_file_name(ArkMap::Island, now),
            format!("ark-waypoints-island-{millis}.json")
        );
        assert_eq!(
            extraction_file_name(now),
            format!("ark-config-waypoints-{millis}.json")
        );
    }
}
