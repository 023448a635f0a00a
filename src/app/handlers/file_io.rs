//! Handler für Datei-Operationen (Import, Export, Extraktion, State).

use crate::app::{persistence, use_cases};
use crate::app::AppState;
use std::path::PathBuf;

/// Importiert Marker aus einer Datei.
pub fn import(state: &mut AppState, path: PathBuf) -> anyhow::Result<()> {
    use_cases::file_io::import_markers(state, &path)
}

/// Exportiert die Marker der aktuellen Karte.
pub fn export(state: &mut AppState) -> anyhow::Result<()> {
    use_cases::file_io::export_markers(state).map(|_| ())
}

/// Merkt eine Konfigurationsdatei vor.
pub fn select_config_file(state: &mut AppState, path: PathBuf) {
    use_cases::file_io::select_config_file(state, path);
}

/// Extrahiert die Wegpunkte der gewählten Konfigurationsdatei.
pub fn extract(state: &mut AppState) -> anyhow::Result<()> {
    use_cases::file_io::extract_selected_config(state).map(|_| ())
}

/// Exportiert das letzte Extraktionsergebnis.
pub fn export_extraction(state: &mut AppState) -> anyhow::Result<()> {
    use_cases::file_io::export_extraction(state).map(|_| ())
}

/// Schreibt den Anwendungszustand in die State-Datei.
pub fn persist(state: &mut AppState) -> anyhow::Result<()> {
    persistence::persist(state)
}
