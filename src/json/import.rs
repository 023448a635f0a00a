//! Import von Marker-Sets.
//!
//! Akzeptierte Formen:
//! - eigenes Export-Format `{ mapName, waypoints: [...] }` → Marker der genannten Karte
//! - `{ waypoints: [...] }` ohne Kartenname → aktuelle Karte
//! - nacktes Array `[...]` → aktuelle Karte

use crate::core::{ArkMap, MapMarker};
use anyhow::{bail, Context, Result};
use serde_json::Value;

/// Fehlermeldung für nicht lesbare Import-Dateien.
pub const EXPECTED_JSON: &str = "Could not parse file. Expected JSON format.";

/// Ergebnis eines Imports.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportedMarkers {
    /// Zielkarte laut Datei (`None` = aktuelle Karte)
    pub map: Option<ArkMap>,
    pub markers: Vec<MapMarker>,
}

/// Parst eine Import-Datei.
pub fn parse_marker_import(json: &str) -> Result<ImportedMarkers> {
    let document: Value = serde_json::from_str(json).context(EXPECTED_JSON)?;

    let (map, waypoints) = match document {
        Value::Object(mut object) => {
            let Some(waypoints) = object.remove("waypoints") else {
                bail!("{} Kein 'waypoints'-Feld gefunden", EXPECTED_JSON);
            };
            let map = match object.get("mapName") {
                Some(Value::String(name)) if !name.is_empty() => Some(name.parse::<ArkMap>()?),
                _ => None,
            };
            (map, waypoints)
        }
        array @ Value::Array(_) => (None, array),
        _ => bail!(EXPECTED_JSON),
    };

    if !waypoints.is_array() {
        bail!("{} 'waypoints' ist keine Liste", EXPECTED_JSON);
    }

    let markers: Vec<MapMarker> =
        serde_json::from_value(waypoints).context("Ungueltiger Marker-Eintrag in Import-Datei")?;

    log::info!(
        "Import gelesen: {} Marker (Karte: {})",
        markers.len(),
        map.map_or("aktuell", ArkMap::id)
    );

    Ok(ImportedMarkers { map, markers })
}
