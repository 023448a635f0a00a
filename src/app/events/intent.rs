use crate::core::ArkMap;
use glam::DVec2;
use std::path::PathBuf;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/CLI ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Andere Karte auswählen
    MapSelected { map: ArkMap },
    /// Kartenbild wurde geladen (natürliche Größe in Pixel)
    MapImageLoaded { size: DVec2 },
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: DVec2 },
    /// Ansicht auf Standard zurücksetzen
    ResetViewRequested,
    /// Stufenweise hineinzoomen
    ZoomInRequested,
    /// Stufenweise herauszoomen
    ZoomOutRequested,
    /// Mausrad über der Karte (`delta_y > 0` = heraus)
    MapScrolled { delta_y: f64 },
    /// Pan beginnt (Mittlere/Rechte Maustaste oder Leertaste + Links)
    PanStarted { pointer: DVec2 },
    /// Zeiger bewegt sich (Koordinatenanzeige, ggf. Pan)
    PointerMoved { pointer: DVec2 },
    /// Pan endet
    PanEnded,
    /// Linksklick auf die Karte (Viewport-Position)
    MapClicked { pointer: DVec2 },

    /// Marker-Dialog für bestehenden Marker öffnen
    MarkerEditRequested { index: usize },
    /// Marker-Dialog bestätigt
    MarkerDialogConfirmed {
        name: String,
        category: String,
        lat: f64,
        lon: f64,
    },
    /// Marker-Dialog abgebrochen
    MarkerDialogCancelled,
    /// Marker direkt anlegen (ohne Dialog); `None` = ausgewählte Kategorie
    AddMarkerRequested {
        name: String,
        category: Option<String>,
        lat: f64,
        lon: f64,
    },
    /// Marker löschen
    DeleteMarkerRequested { index: usize },
    /// Ansicht auf einen Marker zentrieren
    PanToMarkerRequested { index: usize },

    /// Kategorie für neue Marker wählen
    CategorySelected { id: String },
    /// Sichtbarkeit einer Kategorie umschalten
    CategoryVisibilityToggled { id: String },
    /// Neue Kategorie anlegen
    CategoryAddRequested { name: String, color: String },

    /// Presets der aktuellen Karte als Marker übernehmen
    LoadPresetsRequested,
    /// Preset-Anzeige ein-/ausschalten
    PresetsToggled { enabled: bool },
    /// Preset ausblenden
    PresetHideRequested { preset_id: String },
    /// Ausgeblendetes Preset wieder einblenden
    PresetUnhideRequested { preset_id: String },
    /// Kategorie eines Presets überschreiben (`None` = zurücksetzen)
    PresetCategoryChangeRequested {
        preset_id: String,
        category: Option<String>,
    },

    /// Import-Datei wurde ausgewählt
    ImportFileSelected { path: PathBuf },
    /// Marker der aktuellen Karte exportieren
    ExportRequested,
    /// Konfigurationsdatei wurde ausgewählt und soll extrahiert werden
    ConfigFileSelected { path: PathBuf },
    /// Letztes Extraktionsergebnis exportieren
    ExtractionExportRequested,

    /// Anwendungszustand speichern
    SaveStateRequested,
}
