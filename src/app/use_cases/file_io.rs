//! Use-Case-Funktionen für Dateiaktionen.
//! Alle Dateisystem-Operationen (I/O) sind hier zentralisiert.

use crate::app::AppState;
use crate::ini::extract_waypoints;
use crate::json::{
    export_file_name, extraction_export, extraction_file_name, marker_export,
    parse_marker_import, to_pretty_json,
};
use anyhow::{bail, Context, Result};
use chrono::Utc;
use std::path::{Path, PathBuf};

/// Importiert Marker aus einer JSON-Datei.
///
/// Die Marker ersetzen die bisherigen Marker der Zielkarte (aus der Datei
/// oder die aktuelle Karte).
pub fn import_markers(state: &mut AppState, path: &Path) -> Result<()> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Import-Datei nicht lesbar: {}", path.display()))?;
    let imported = match parse_marker_import(&content) {
        Ok(imported) => imported,
        Err(e) => {
            state.ui.status_message = Some(format!("{:#}", e));
            return Err(e);
        }
    };

    let map = imported.map.unwrap_or(state.current_map);
    log::info!(
        "{} Marker nach {} importiert aus {}",
        imported.markers.len(),
        map,
        path.display()
    );
    state.user_markers.insert(map, imported.markers);
    state.ui.status_message = Some("Import successful!".to_string());
    Ok(())
}

/// Exportiert die Marker der aktuellen Karte ins Export-Verzeichnis.
///
/// Gibt den Pfad der geschriebenen Datei zurück.
pub fn export_markers(state: &mut AppState) -> Result<PathBuf> {
    if state.markers().is_empty() {
        state.ui.status_message = Some("No markers to export".to_string());
        bail!("No markers to export");
    }

    let now = Utc::now();
    let file_name = export_file_name(state.current_map, now);
    let document = marker_export(state.current_map, &state.categories, state.markers(), now);
    let json = to_pretty_json(&document)?;

    let path = state.options.resolved_export_dir().join(&file_name);
    write_export(&path, &json)?;

    state.ui.status_message = Some(format!("Exported: {}", file_name));
    Ok(path)
}

/// Merkt eine Konfigurationsdatei für die Extraktion vor.
pub fn select_config_file(state: &mut AppState, path: PathBuf) {
    log::info!("Konfigurationsdatei gewaehlt: {}", path.display());
    state.ui.selected_config_file = Some(path);
}

/// Liest die gewählte Konfigurationsdatei und extrahiert die Wegpunkte.
///
/// Ein leeres Ergebnis ist kein Fehler, sondern eine Statusmeldung.
pub fn extract_selected_config(state: &mut AppState) -> Result<usize> {
    let Some(path) = state.ui.selected_config_file.clone() else {
        bail!("Keine Konfigurationsdatei ausgewaehlt");
    };
    let bytes = std::fs::read(&path)
        .with_context(|| format!("Konfigurationsdatei nicht lesbar: {}", path.display()))?;
    // Ungültiges UTF-8 wird ersetzt, nicht abgelehnt
    let content = String::from_utf8_lossy(&bytes);

    let records = extract_waypoints(&content);
    let count = records.len();
    log::info!("{} Wegpunkte aus {} extrahiert", count, path.display());

    state.ui.status_message = Some(if count == 0 {
        "No waypoints found in file".to_string()
    } else {
        format!("Found {} waypoints", count)
    });
    state.ui.extraction = records;
    Ok(count)
}

/// Exportiert das letzte Extraktionsergebnis ins Export-Verzeichnis.
pub fn export_extraction(state: &mut AppState) -> Result<PathBuf> {
    if state.ui.extraction.is_empty() {
        state.ui.status_message = Some("No waypoints to export".to_string());
        bail!("No waypoints to export");
    }

    let source_file = state
        .ui
        .selected_config_file
        .as_deref()
        .and_then(Path::file_name)
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let now = Utc::now();
    let document = extraction_export(&state.ui.extraction, &source_file, now);
    let json = to_pretty_json(&document)?;

    let file_name = extraction_file_name(now);
    let path = state.options.resolved_export_dir().join(&file_name);
    write_export(&path, &json)?;

    state.ui.status_message = Some(format!("Exported: {}", file_name));
    Ok(path)
}

fn write_export(path: &Path, json: &str) -> Result<()> {
    std::fs::write(path, json)
        .with_context(|| format!("Export fehlgeschlagen: {}", path.display()))?;
    log::info!("Export geschrieben: {}", path.display());
    Ok(())
}
