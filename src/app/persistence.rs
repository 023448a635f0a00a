//! Speichern und Laden des Anwendungszustands als JSON-Datei.
//!
//! Persistiert wird nur der fachliche Teil ([`PersistedState`]);
//! Ansicht, Dialoge und Optionen gehören nicht dazu.

use super::AppState;
use crate::core::{ArkMap, Category, MapMarker, DEFAULT_CATEGORY_ID};
use anyhow::{Context, Result};
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Serialisierbarer Ausschnitt des [`AppState`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedState {
    #[serde(default)]
    pub current_map: ArkMap,
    #[serde(default)]
    pub markers: IndexMap<ArkMap, Vec<MapMarker>>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default = "default_selected_category")]
    pub selected_category: String,
    #[serde(default)]
    pub category_overrides: IndexMap<ArkMap, IndexMap<String, String>>,
    #[serde(default)]
    pub hidden_presets: IndexMap<ArkMap, IndexSet<String>>,
    #[serde(default = "default_true")]
    pub presets_enabled: bool,
}

fn default_selected_category() -> String {
    DEFAULT_CATEGORY_ID.to_string()
}

fn default_true() -> bool {
    true
}

impl PersistedState {
    /// Erstellt einen Snapshot des fachlichen Zustands.
    pub fn from_state(state: &AppState) -> Self {
        Self {
            current_map: state.current_map,
            markers: state.user_markers.clone(),
            categories: state.categories.clone(),
            selected_category: state.selected_category.clone(),
            category_overrides: state.category_overrides.clone(),
            hidden_presets: state.hidden_presets.clone(),
            presets_enabled: state.presets_enabled,
        }
    }

    /// Überträgt den Snapshot in den AppState.
    ///
    /// Eine leere Kategorienliste behält die Standardkategorien.
    pub fn apply_to(self, state: &mut AppState) {
        state.current_map = self.current_map;
        state.user_markers = self.markers;
        if !self.categories.is_empty() {
            state.categories = self.categories;
        }
        state.selected_category = if state.category(&self.selected_category).is_some() {
            self.selected_category
        } else {
            DEFAULT_CATEGORY_ID.to_string()
        };
        state.category_overrides = self.category_overrides;
        state.hidden_presets = self.hidden_presets;
        state.presets_enabled = self.presets_enabled;
    }
}

/// Schreibt den Zustand als JSON nach `path`.
pub fn save_state(state: &AppState, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(&PersistedState::from_state(state))
        .context("State-Serialisierung fehlgeschlagen")?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Verzeichnis nicht anlegbar: {}", parent.display()))?;
    }
    std::fs::write(path, json)
        .with_context(|| format!("State nicht schreibbar: {}", path.display()))?;
    log::debug!("State gespeichert nach: {}", path.display());
    Ok(())
}

/// Lädt den Zustand aus `path` in den AppState.
///
/// Fehlende Datei: nichts zu tun. Fehlerhafte Datei: Warnung, Standardwerte bleiben.
pub fn load_state(state: &mut AppState, path: &Path) {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(_) => {
            log::info!("Keine State-Datei gefunden, starte leer");
            return;
        }
    };
    match serde_json::from_str::<PersistedState>(&content) {
        Ok(persisted) => {
            persisted.apply_to(state);
            log::info!("State geladen aus: {}", path.display());
        }
        Err(e) => {
            log::warn!("State-Datei fehlerhaft, verwende Standardwerte: {}", e);
        }
    }
}

/// Speichert in `state.state_path`, sofern gesetzt.
pub fn persist(state: &AppState) -> Result<()> {
    match state.state_path.as_deref() {
        Some(path) => save_state(state, path),
        None => {
            log::debug!("Kein State-Pfad gesetzt, Speichern uebersprungen");
            Ok(())
        }
    }
}
