//! Handler für Kategorien.

use crate::app::use_cases;
use crate::app::AppState;

/// Wählt die Kategorie für neue Marker.
pub fn select(state: &mut AppState, id: &str) {
    use_cases::categories::select_category(state, id);
}

/// Schaltet die Sichtbarkeit einer Kategorie um.
pub fn toggle_visibility(state: &mut AppState, id: &str) {
    use_cases::categories::toggle_visibility(state, id);
}

/// Legt eine Kategorie an.
pub fn add(state: &mut AppState, name: &str, color: &str) {
    use_cases::categories::add_category(state, name, color);
}
