//! Use-Case-Funktionen für die Kartenansicht (Pan, Zoom, Zentrieren).

use crate::app::AppState;
use glam::DVec2;

/// Setzt die Ansicht auf Default zurück.
pub fn reset_view(state: &mut AppState) {
    state.view.map_view.reset();
}

/// Zoomt um `factor`, sofern die Grenzen aus den Optionen eingehalten werden.
pub fn zoom_by(state: &mut AppState, factor: f64) {
    let changed = state.view.map_view.zoom_by_clamped(
        factor,
        state.options.view_zoom_min,
        state.options.view_zoom_max,
    );
    if !changed {
        log::debug!(
            "Zoom {:.2} x {:.2} ausserhalb der Grenzen, ignoriert",
            state.view.map_view.scale,
            factor
        );
    }
}

/// Aktualisiert die Viewport-Größe im State.
pub fn set_viewport_size(state: &mut AppState, size: DVec2) {
    state.view.viewport_size = size;
}

/// Übernimmt die Größe eines frisch geladenen Kartenbildes und setzt die Ansicht zurück.
pub fn set_image_size(state: &mut AppState, size: DVec2) {
    if size.x <= 0.0 || size.y <= 0.0 {
        log::warn!("Kartenbild ohne Groesse ({} x {}), ignoriert", size.x, size.y);
        state.view.image_size = None;
        return;
    }
    state.view.image_size = Some(size);
    state.view.map_view.reset();
}

/// Startet einen Pan-Vorgang.
pub fn begin_pan(state: &mut AppState, pointer: DVec2) {
    state.view.map_view.begin_pan(pointer);
}

/// Verschiebt die Karte zur Zeigerposition.
pub fn pan_to(state: &mut AppState, pointer: DVec2) {
    state.view.map_view.pan_to(pointer);
}

/// Beendet einen Pan-Vorgang.
pub fn end_pan(state: &mut AppState) {
    state.view.map_view.end_pan();
}

/// Aktualisiert die Koordinatenanzeige unter dem Zeiger.
pub fn update_hover_coords(state: &mut AppState, pointer: DVec2) {
    state.view.hover_coords = state.view.coords_at(pointer);
}

/// Zentriert die Ansicht auf den Marker mit Index `index` der aktuellen Karte.
pub fn center_on_marker(state: &mut AppState, index: usize) {
    let Some(marker) = state.markers().get(index) else {
        log::warn!("Marker {} existiert nicht", index);
        return;
    };
    let coords = crate::core::MapCoords::new(marker.lat, marker.lon);
    let Some(image_size) = state.view.image_size else {
        log::warn!("Kein Kartenbild geladen, Zentrieren nicht moeglich");
        return;
    };
    state.view.map_view.center_on(coords, image_size);
}
