//! Use-Cases für mitgelieferte Preset-Marker.

use crate::app::AppState;
use crate::core::{presets_for, MapMarker, PresetMarker};

/// Presets der aktuellen Karte ohne ausgeblendete, mit Kategorie-Overrides.
pub fn effective_presets(state: &AppState) -> Vec<PresetMarker> {
    let hidden = state.hidden_presets.get(&state.current_map);
    let overrides = state.category_overrides.get(&state.current_map);

    presets_for(state.current_map)
        .into_iter()
        .filter(|preset| !hidden.is_some_and(|set| set.contains(&preset.id)))
        .map(|mut preset| {
            if let Some(category) = overrides.and_then(|o| o.get(&preset.id)) {
                preset.category = category.clone();
            }
            preset
        })
        .collect()
}

/// Übernimmt die Presets der aktuellen Karte als Benutzer-Marker.
///
/// Übersprungen wird, was bereits als gleichnamiger Marker im Umkreis
/// von 1 Einheit (je Achse) existiert. Gibt die Anzahl neuer Marker zurück.
pub fn load_presets(state: &mut AppState) -> usize {
    if presets_for(state.current_map).is_empty() {
        log::info!("Keine Presets fuer {}", state.current_map);
        state.ui.status_message = Some("No presets available for this map".to_string());
        return 0;
    }

    let presets = effective_presets(state);
    let markers = state.markers_mut();
    let mut added = 0;

    for preset in presets {
        let exists = markers
            .iter()
            .any(|m| m.matches_location(&preset.name, preset.lat, preset.lon));
        if exists {
            continue;
        }
        let mut marker = MapMarker::new(&preset.name, &preset.category, preset.lat, preset.lon);
        marker.is_preset = true;
        markers.push(marker);
        added += 1;
    }

    log::info!("{} Preset-Marker uebernommen ({})", added, state.current_map);
    state.ui.status_message = Some(format!("Added {} preset markers", added));
    added
}

/// Schaltet die Preset-Anzeige ein oder aus.
pub fn set_presets_enabled(state: &mut AppState, enabled: bool) {
    state.presets_enabled = enabled;
}

/// Blendet ein Preset der aktuellen Karte aus.
pub fn hide_preset(state: &mut AppState, preset_id: &str) {
    if !preset_exists(state, preset_id) {
        return;
    }
    state
        .hidden_presets
        .entry(state.current_map)
        .or_default()
        .insert(preset_id.to_string());
    log::info!("Preset '{}' ausgeblendet", preset_id);
}

/// Blendet ein ausgeblendetes Preset wieder ein.
pub fn unhide_preset(state: &mut AppState, preset_id: &str) {
    let removed = state
        .hidden_presets
        .get_mut(&state.current_map)
        .is_some_and(|set| set.shift_remove(preset_id));
    if !removed {
        log::warn!("Preset '{}' war nicht ausgeblendet", preset_id);
    }
}

/// Setzt (oder entfernt mit `None`) die Kategorie eines Presets auf der aktuellen Karte.
pub fn set_preset_category(state: &mut AppState, preset_id: &str, category: Option<&str>) {
    if !preset_exists(state, preset_id) {
        return;
    }
    match category {
        Some(category) => {
            if state.category(category).is_none() {
                log::warn!("Unbekannte Kategorie '{}'", category);
                return;
            }
            state
                .category_overrides
                .entry(state.current_map)
                .or_default()
                .insert(preset_id.to_string(), category.to_string());
        }
        None => {
            if let Some(overrides) = state.category_overrides.get_mut(&state.current_map) {
                overrides.shift_remove(preset_id);
            }
        }
    }
}

fn preset_exists(state: &AppState, preset_id: &str) -> bool {
    let exists = presets_for(state.current_map)
        .iter()
        .any(|p| p.id == preset_id);
    if !exists {
        log::warn!(
            "Preset '{}' existiert auf {} nicht",
            preset_id,
            state.current_map
        );
    }
    exists
}
