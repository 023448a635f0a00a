use crate::core::WaypointRecord;
use std::path::PathBuf;

/// Zustand des Marker-Bearbeiten-Dialogs
#[derive(Debug, Clone, Default)]
pub struct MarkerDialogState {
    /// Ob der Dialog sichtbar ist
    pub visible: bool,
    /// Index des bearbeiteten Markers (None = neuer Marker)
    pub editing_index: Option<usize>,
    /// Marker-Name im Dialog
    pub name: String,
    /// Kategorie-ID im Dialog
    pub category: String,
    pub lat: f64,
    pub lon: f64,
}

impl MarkerDialogState {
    /// Erstellt einen geschlossenen Marker-Dialog-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gibt `true` zurück wenn der Dialog einen bestehenden Marker bearbeitet.
    pub fn is_editing(&self) -> bool {
        self.editing_index.is_some()
    }
}

/// UI-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Temporäre Statusnachricht (Import, Export, Presets, Extraktion)
    pub status_message: Option<String>,
    /// Marker-Bearbeiten-Dialog
    pub marker_dialog: MarkerDialogState,
    /// Für die Extraktion ausgewählte Konfigurationsdatei
    pub selected_config_file: Option<PathBuf>,
    /// Ergebnis der letzten Extraktion
    pub extraction: Vec<WaypointRecord>,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand (alle Dialoge geschlossen).
    pub fn new() -> Self {
        Self::default()
    }
}
