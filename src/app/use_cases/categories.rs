//! Use-Cases für Marker-Kategorien.

use crate::app::AppState;
use crate::core::Category;
use chrono::Utc;

/// Wählt die Kategorie für neue Marker.
pub fn select_category(state: &mut AppState, id: &str) {
    if state.category(id).is_none() {
        log::warn!("Unbekannte Kategorie '{}'", id);
        return;
    }
    state.selected_category = id.to_string();
}

/// Schaltet die Sichtbarkeit einer Kategorie um.
pub fn toggle_visibility(state: &mut AppState, id: &str) {
    let Some(category) = state.categories.iter_mut().find(|c| c.id == id) else {
        log::warn!("Unbekannte Kategorie '{}'", id);
        return;
    };
    category.visible = !category.visible;
    log::info!(
        "Kategorie '{}' {}",
        category.name,
        if category.visible { "eingeblendet" } else { "ausgeblendet" }
    );
}

/// Legt eine benutzerdefinierte Kategorie an. Leere Namen werden verworfen.
pub fn add_category(state: &mut AppState, name: &str, color: &str) {
    let Some(category) = Category::user_defined(name, color, Utc::now().timestamp_millis())
    else {
        log::warn!("Kategorie ohne Namen verworfen");
        return;
    };
    log::info!("Kategorie '{}' angelegt ({})", category.name, category.id);
    state.categories.push(category);
}
