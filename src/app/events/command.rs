use crate::core::{ArkMap, MapCoords};
use glam::DVec2;
use std::path::PathBuf;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Karte wechseln
    SetCurrentMap { map: ArkMap },
    /// Natürliche Bildgröße setzen (setzt die Ansicht zurück)
    SetImageSize { size: DVec2 },
    /// Viewport-Größe setzen
    SetViewportSize { size: DVec2 },
    /// Ansicht zurücksetzen
    ResetView,
    /// Zoom um Faktor (innerhalb der Grenzen aus den Optionen)
    ZoomBy { factor: f64 },
    /// Pan beginnen
    BeginPan { pointer: DVec2 },
    /// Pan fortsetzen
    PanTo { pointer: DVec2 },
    /// Pan beenden
    EndPan,
    /// Koordinatenanzeige aktualisieren
    UpdateHoverCoords { pointer: DVec2 },

    /// Marker-Dialog für neuen Marker öffnen
    OpenMarkerDialog { coords: MapCoords },
    /// Marker-Dialog für bestehenden Marker öffnen
    OpenEditMarkerDialog { index: usize },
    /// Marker-Dialog schließen
    CloseMarkerDialog,
    /// Marker anlegen
    AddMarker {
        name: String,
        category: String,
        lat: f64,
        lon: f64,
    },
    /// Marker aktualisieren
    UpdateMarker {
        index: usize,
        name: String,
        category: String,
        lat: f64,
        lon: f64,
    },
    /// Marker löschen
    DeleteMarker { index: usize },
    /// Ansicht auf Marker zentrieren
    CenterOnMarker { index: usize },

    /// Kategorie auswählen
    SelectCategory { id: String },
    /// Kategorie-Sichtbarkeit umschalten
    ToggleCategoryVisibility { id: String },
    /// Kategorie anlegen
    AddCategory { name: String, color: String },

    /// Presets als Marker übernehmen
    LoadPresets,
    /// Preset-Anzeige setzen
    SetPresetsEnabled { enabled: bool },
    /// Preset ausblenden
    HidePreset { preset_id: String },
    /// Preset einblenden
    UnhidePreset { preset_id: String },
    /// Preset-Kategorie überschreiben oder zurücksetzen
    SetPresetCategory {
        preset_id: String,
        category: Option<String>,
    },

    /// Marker aus Datei importieren
    ImportMarkers { path: PathBuf },
    /// Marker der aktuellen Karte exportieren
    ExportMarkers,
    /// Konfigurationsdatei für Extraktion merken
    SelectConfigFile { path: PathBuf },
    /// Wegpunkte aus der gemerkten Konfigurationsdatei extrahieren
    ExtractWaypoints,
    /// Extraktionsergebnis exportieren
    ExportExtraction,

    /// Anwendungszustand in die State-Datei schreiben
    PersistState,
}
