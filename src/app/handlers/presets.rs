//! Handler für Preset-Marker.

use crate::app::use_cases;
use crate::app::AppState;

/// Übernimmt die Presets der aktuellen Karte als Marker.
pub fn load(state: &mut AppState) {
    use_cases::presets::load_presets(state);
}

/// Schaltet die Preset-Anzeige.
pub fn set_enabled(state: &mut AppState, enabled: bool) {
    use_cases::presets::set_presets_enabled(state, enabled);
}

/// Blendet ein Preset aus.
pub fn hide(state: &mut AppState, preset_id: &str) {
    use_cases::presets::hide_preset(state, preset_id);
}

/// Blendet ein Preset wieder ein.
pub fn unhide(state: &mut AppState, preset_id: &str) {
    use_cases::presets::unhide_preset(state, preset_id);
}

/// Überschreibt oder entfernt die Kategorie eines Presets.
pub fn set_category(state: &mut AppState, preset_id: &str, category: Option<&str>) {
    use_cases::presets::set_preset_category(state, preset_id, category);
}
