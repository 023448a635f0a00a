//! Handler für Kartenwahl, Pan und Zoom.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::ArkMap;
use glam::DVec2;

/// Wechselt die Karte. Bild und Ansicht werden zurückgesetzt.
pub fn set_current_map(state: &mut AppState, map: ArkMap) {
    log::info!("Karte gewechselt: {}", map.display_name());
    state.current_map = map;
    state.view.image_size = None;
    state.view.hover_coords = None;
    use_cases::camera::reset_view(state);
    use_cases::markers::close_marker_dialog(state);
}

/// Übernimmt die Größe des geladenen Kartenbildes.
pub fn set_image_size(state: &mut AppState, size: DVec2) {
    use_cases::camera::set_image_size(state, size);
}

/// Aktualisiert die Viewport-Größe im State.
pub fn set_viewport_size(state: &mut AppState, size: DVec2) {
    use_cases::camera::set_viewport_size(state, size);
}

/// Setzt die Ansicht auf den Standardzustand zurück.
pub fn reset_view(state: &mut AppState) {
    use_cases::camera::reset_view(state);
}

/// Zoomt um einen Faktor.
pub fn zoom_by(state: &mut AppState, factor: f64) {
    use_cases::camera::zoom_by(state, factor);
}

/// Startet einen Pan-Vorgang.
pub fn begin_pan(state: &mut AppState, pointer: DVec2) {
    use_cases::camera::begin_pan(state, pointer);
}

/// Setzt einen Pan-Vorgang fort.
pub fn pan_to(state: &mut AppState, pointer: DVec2) {
    use_cases::camera::pan_to(state, pointer);
}

/// Beendet einen Pan-Vorgang.
pub fn end_pan(state: &mut AppState) {
    use_cases::camera::end_pan(state);
}

/// Aktualisiert die Koordinatenanzeige.
pub fn update_hover_coords(state: &mut AppState, pointer: DVec2) {
    use_cases::camera::update_hover_coords(state, pointer);
}

/// Zentriert die Ansicht auf einen Marker.
pub fn center_on_marker(state: &mut AppState, index: usize) {
    use_cases::camera::center_on_marker(state, index);
}
