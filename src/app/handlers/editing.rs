//! Handler für Marker-Dialog und Marker-Bearbeitung.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::MapCoords;

/// Öffnet den Dialog für einen neuen Marker.
pub fn open_marker_dialog(state: &mut AppState, coords: MapCoords) {
    use_cases::markers::open_marker_dialog(state, coords);
}

/// Öffnet den Dialog für einen bestehenden Marker.
pub fn open_edit_marker_dialog(state: &mut AppState, index: usize) {
    use_cases::markers::open_edit_marker_dialog(state, index);
}

/// Schließt den Marker-Dialog.
pub fn close_marker_dialog(state: &mut AppState) {
    use_cases::markers::close_marker_dialog(state);
}

/// Legt einen Marker an.
pub fn add_marker(state: &mut AppState, name: &str, category: &str, lat: f64, lon: f64) {
    use_cases::markers::add_marker(state, name, category, lat, lon);
}

/// Aktualisiert einen Marker.
pub fn update_marker(
    state: &mut AppState,
    index: usize,
    name: &str,
    category: &str,
    lat: f64,
    lon: f64,
) {
    use_cases::markers::update_marker(state, index, name, category, lat, lon);
}

/// Löscht einen Marker.
pub fn delete_marker(state: &mut AppState, index: usize) {
    use_cases::markers::delete_marker(state, index);
}
