//! Eingebaute Preset-Marker je Karte.
//!
//! Die Daten liegen als JSON unter `data/presets/<map-id>.json` und werden
//! beim Kompilieren eingebettet. Format: `{ "<kategorie>": [ {name, lat, lon}, ... ] }`.

use super::ArkMap;
use indexmap::IndexMap;
use serde::Deserialize;

/// Nicht editierbarer, mitgelieferter Marker.
#[derive(Debug, Clone, PartialEq)]
pub struct PresetMarker {
    /// Stabile ID: `<kategorie>:<index in kategorie>`
    pub id: String,
    pub name: String,
    /// Kategorie laut Preset-Datei (ohne Benutzer-Override)
    pub category: String,
    pub lat: f64,
    pub lon: f64,
}

#[derive(Deserialize)]
struct PresetEntry {
    name: String,
    lat: f64,
    lon: f64,
}

fn preset_source(map: ArkMap) -> Option<&'static str> {
    match map {
        ArkMap::Island => Some(include_str!("../../data/presets/island.json")),
        ArkMap::ScorchedEarth => Some(include_str!("../../data/presets/scorched-earth.json")),
        ArkMap::Aberration => Some(include_str!("../../data/presets/aberration.json")),
        ArkMap::Extinction => Some(include_str!("../../data/presets/extinction.json")),
        ArkMap::Ragnarok => Some(include_str!("../../data/presets/ragnarok.json")),
        _ => None,
    }
}

/// Parst eine Preset-Datei in flache Preset-Marker (Reihenfolge wie in der Datei).
pub fn parse_presets(json: &str) -> anyhow::Result<Vec<PresetMarker>> {
    let groups: IndexMap<String, Vec<PresetEntry>> = serde_json::from_str(json)?;
    let presets = groups
        .into_iter()
        .flat_map(|(category, entries)| {
            entries
                .into_iter()
                .enumerate()
                .map(move |(index, entry)| PresetMarker {
                    id: format!("{category}:{index}"),
                    name: entry.name,
                    category: category.clone(),
                    lat: entry.lat,
                    lon: entry.lon,
                })
        })
        .collect();
    Ok(presets)
}

/// Liefert alle Presets einer Karte. Leere Liste wenn keine vorhanden.
pub fn presets_for(map: ArkMap) -> Vec<PresetMarker> {
    let Some(source) = preset_source(map) else {
        return Vec::new();
    };
    match parse_presets(source) {
        Ok(presets) => presets,
        Err(e) => {
            log::warn!("Could not load presets for {}: {}", map, e);
            Vec::new()
        }
    }
}
