//! Use-Cases für Benutzer-Marker (Dialog, Anlegen, Bearbeiten, Löschen)
//! und die zusammengeführte Marker-Ansicht.

use crate::app::AppState;
use crate::core::{MapCoords, MapMarker, DEFAULT_CATEGORY_ID};
use chrono::Utc;

/// Herkunft eines angezeigten Markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkerSource {
    /// Mitgeliefertes Preset (Preset-ID)
    Preset(String),
    /// Benutzer-Marker (Index in der Markerliste der Karte)
    User(usize),
}

/// Ein Marker, wie er in der Kartenansicht erscheint.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibleMarker {
    pub source: MarkerSource,
    pub name: String,
    /// Wirksame Kategorie (inkl. Override bei Presets)
    pub category: String,
    pub lat: f64,
    pub lon: f64,
}

/// Öffnet den Marker-Dialog für einen neuen Marker an `coords`.
pub fn open_marker_dialog(state: &mut AppState, coords: MapCoords) {
    let dialog = &mut state.ui.marker_dialog;
    dialog.visible = true;
    dialog.editing_index = None;
    dialog.name.clear();
    dialog.category = state.selected_category.clone();
    dialog.lat = coords.lat;
    dialog.lon = coords.lon;
}

/// Öffnet den Marker-Dialog für einen bestehenden Marker.
pub fn open_edit_marker_dialog(state: &mut AppState, index: usize) {
    let Some(marker) = state.markers().get(index).cloned() else {
        log::warn!("Marker {} existiert nicht", index);
        return;
    };
    let dialog = &mut state.ui.marker_dialog;
    dialog.visible = true;
    dialog.editing_index = Some(index);
    dialog.name = marker.name;
    dialog.category = marker.category;
    dialog.lat = marker.lat;
    dialog.lon = marker.lon;
}

/// Schließt den Marker-Dialog und verwirft den Entwurf.
pub fn close_marker_dialog(state: &mut AppState) {
    state.ui.marker_dialog = Default::default();
}

/// Legt einen Marker auf der aktuellen Karte an.
///
/// Ungültige Koordinaten (NaN) werden verworfen. Unbekannte Kategorien
/// fallen auf die Standard-Kategorie zurück.
pub fn add_marker(state: &mut AppState, name: &str, category: &str, lat: f64, lon: f64) {
    if lat.is_nan() || lon.is_nan() {
        log::warn!("Marker '{}' hat ungueltige Koordinaten, verworfen", name);
        return;
    }
    let category = resolve_category(state, category);
    let marker = MapMarker::new(name, &category, lat, lon);
    log::info!(
        "Marker '{}' auf {} erstellt ({:.1}, {:.1}, Kategorie: {})",
        marker.name,
        state.current_map,
        lat,
        lon,
        category
    );
    state.markers_mut().push(marker);
}

/// Aktualisiert einen bestehenden Marker und setzt `updatedAt`.
pub fn update_marker(
    state: &mut AppState,
    index: usize,
    name: &str,
    category: &str,
    lat: f64,
    lon: f64,
) {
    if lat.is_nan() || lon.is_nan() {
        log::warn!("Marker {} hat ungueltige Koordinaten, nicht aktualisiert", index);
        return;
    }
    let category = resolve_category(state, category);
    let Some(marker) = state.markers_mut().get_mut(index) else {
        log::warn!("Marker {} existiert nicht", index);
        return;
    };

    // Gleiche Normalisierung wie beim Anlegen
    let fresh = MapMarker::new(name, &category, lat, lon);
    marker.name = fresh.name;
    marker.category = fresh.category;
    marker.lat = lat;
    marker.lon = lon;
    marker.updated_at = Some(Utc::now());
    log::info!("Marker {} aktualisiert ({})", index, marker.name);
}

/// Löscht einen Marker der aktuellen Karte.
pub fn delete_marker(state: &mut AppState, index: usize) {
    let markers = state.markers_mut();
    if index >= markers.len() {
        log::warn!("Marker {} existiert nicht", index);
        return;
    }
    let removed = markers.remove(index);
    log::info!("Marker {} ({}) entfernt", index, removed.name);
}

/// Anzahl der Benutzer-Marker je Kategorie auf der aktuellen Karte.
pub fn marker_count_for_category(state: &AppState, category_id: &str) -> usize {
    state
        .markers()
        .iter()
        .filter(|m| m.category == category_id)
        .count()
}

/// Führt Presets und Benutzer-Marker der aktuellen Karte zusammen.
///
/// Presets nur wenn aktiviert und nicht ausgeblendet, mit wirksamer Kategorie.
/// Marker unbekannter oder unsichtbarer Kategorien werden nicht angezeigt.
pub fn visible_markers(state: &AppState) -> Vec<VisibleMarker> {
    let presets = if state.presets_enabled {
        super::presets::effective_presets(state)
    } else {
        Vec::new()
    };

    let preset_markers = presets.into_iter().map(|preset| VisibleMarker {
        source: MarkerSource::Preset(preset.id),
        name: preset.name,
        category: preset.category,
        lat: preset.lat,
        lon: preset.lon,
    });
    let user_markers = state
        .markers()
        .iter()
        .enumerate()
        .map(|(index, marker)| VisibleMarker {
            source: MarkerSource::User(index),
            name: marker.name.clone(),
            category: marker.category.clone(),
            lat: marker.lat,
            lon: marker.lon,
        });

    preset_markers
        .chain(user_markers)
        .filter(|m| state.category(&m.category).is_some_and(|c| c.visible))
        .collect()
}

fn resolve_category(state: &AppState, category: &str) -> String {
    if state.category(category).is_some() {
        category.to_string()
    } else {
        log::warn!(
            "Unbekannte Kategorie '{}', verwende '{}'",
            category,
            DEFAULT_CATEGORY_ID
        );
        DEFAULT_CATEGORY_ID.to_string()
    }
}
