use crate::app::CommandLog;
use crate::core::{default_categories, ArkMap, Category, MapMarker, DEFAULT_CATEGORY_ID};
use crate::shared::EditorOptions;
use indexmap::{IndexMap, IndexSet};
use std::path::PathBuf;

use super::{UiState, ViewState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Aktuell angezeigte Karte
    pub current_map: ArkMap,
    /// Benutzer-Marker je Karte
    pub user_markers: IndexMap<ArkMap, Vec<MapMarker>>,
    /// Kategorien in Anzeigereihenfolge
    pub categories: Vec<Category>,
    /// Kategorie für neue Marker
    pub selected_category: String,
    /// Kategorie-Zuordnung von Presets je Karte (Preset-ID → Kategorie-ID)
    pub category_overrides: IndexMap<ArkMap, IndexMap<String, String>>,
    /// Ausgeblendete Presets je Karte
    pub hidden_presets: IndexMap<ArkMap, IndexSet<String>>,
    /// Presets in der Kartenansicht einblenden
    pub presets_enabled: bool,
    /// View-State
    pub view: ViewState,
    /// UI-State
    pub ui: UiState,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Ziel für `PersistState` (None = nicht speichern)
    pub state_path: Option<PathBuf>,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen leeren App-State mit den übergebenen Optionen.
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            current_map: ArkMap::default(),
            user_markers: IndexMap::new(),
            categories: default_categories(),
            selected_category: DEFAULT_CATEGORY_ID.to_string(),
            category_overrides: IndexMap::new(),
            hidden_presets: IndexMap::new(),
            presets_enabled: options.presets_enabled,
            view: ViewState::new(),
            ui: UiState::new(),
            options,
            command_log: CommandLog::new(),
            state_path: None,
        }
    }

    /// Marker der aktuellen Karte.
    pub fn markers(&self) -> &[MapMarker] {
        self.user_markers
            .get(&self.current_map)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Marker der aktuellen Karte (mutable, legt die Liste bei Bedarf an).
    pub fn markers_mut(&mut self) -> &mut Vec<MapMarker> {
        self.user_markers.entry(self.current_map).or_default()
    }

    /// Sucht eine Kategorie per ID.
    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Gibt die Anzahl der Marker auf der aktuellen Karte zurück (für UI-Anzeige)
    pub fn marker_count(&self) -> usize {
        self.markers().len()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
