//! Zentrale Konfiguration für ARK Locator.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ── Kartenansicht ───────────────────────────────────────────────────

/// Minimaler Zoom-Faktor.
pub const VIEW_ZOOM_MIN: f64 = 0.5;
/// Maximaler Zoom-Faktor.
pub const VIEW_ZOOM_MAX: f64 = 5.0;
/// Zoom-Faktor der Zoom-In-Schaltfläche.
pub const VIEW_ZOOM_IN_STEP: f64 = 1.2;
/// Zoom-Faktor der Zoom-Out-Schaltfläche.
pub const VIEW_ZOOM_OUT_STEP: f64 = 0.8;
/// Zoom-Faktor beim Mausrad nach oben.
pub const VIEW_SCROLL_ZOOM_IN: f64 = 1.1;
/// Zoom-Faktor beim Mausrad nach unten.
pub const VIEW_SCROLL_ZOOM_OUT: f64 = 0.9;

// ── Dateien ─────────────────────────────────────────────────────────

/// Dateiname der Optionen neben der Binary.
pub const OPTIONS_FILE_NAME: &str = "ark_locator.toml";
/// Dateiname des gespeicherten Anwendungszustands.
pub const STATE_FILE_NAME: &str = "ark_locator_state.json";

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Optionen.
/// Wird als `ark_locator.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── Kartenansicht ───────────────────────────────────────────
    /// Minimaler Zoom-Faktor
    pub view_zoom_min: f64,
    /// Maximaler Zoom-Faktor
    pub view_zoom_max: f64,
    /// Zoom-Schritt der Zoom-In-Schaltfläche
    pub view_zoom_in_step: f64,
    /// Zoom-Schritt der Zoom-Out-Schaltfläche
    pub view_zoom_out_step: f64,
    /// Zoom-Schritt beim Mausrad (hinein)
    #[serde(default = "default_scroll_zoom_in")]
    pub view_scroll_zoom_in: f64,
    /// Zoom-Schritt beim Mausrad (heraus)
    #[serde(default = "default_scroll_zoom_out")]
    pub view_scroll_zoom_out: f64,

    // ── Presets ─────────────────────────────────────────────────
    /// Preset-Marker in der Kartenansicht einblenden
    #[serde(default = "default_true")]
    pub presets_enabled: bool,

    // ── Dateien ─────────────────────────────────────────────────
    /// Zielverzeichnis für Exporte (None = Desktop)
    #[serde(default)]
    pub export_dir: Option<PathBuf>,
    /// Pfad der State-Datei (None = neben der Binary)
    #[serde(default)]
    pub state_file: Option<PathBuf>,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            view_zoom_min: VIEW_ZOOM_MIN,
            view_zoom_max: VIEW_ZOOM_MAX,
            view_zoom_in_step: VIEW_ZOOM_IN_STEP,
            view_zoom_out_step: VIEW_ZOOM_OUT_STEP,
            view_scroll_zoom_in: VIEW_SCROLL_ZOOM_IN,
            view_scroll_zoom_out: VIEW_SCROLL_ZOOM_OUT,
            presets_enabled: true,
            export_dir: None,
            state_file: None,
        }
    }
}

/// Serde-Default für `view_scroll_zoom_in` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_scroll_zoom_in() -> f64 {
    VIEW_SCROLL_ZOOM_IN
}

/// Serde-Default für `view_scroll_zoom_out`.
fn default_scroll_zoom_out() -> f64 {
    VIEW_SCROLL_ZOOM_OUT
}

fn default_true() -> bool {
    true
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> PathBuf {
        binary_dir().join(OPTIONS_FILE_NAME)
    }

    /// Pfad der State-Datei: konfiguriert oder neben der Binary.
    pub fn resolved_state_file(&self) -> PathBuf {
        self.state_file
            .clone()
            .unwrap_or_else(|| binary_dir().join(STATE_FILE_NAME))
    }

    /// Export-Verzeichnis: konfiguriert, sonst Desktop, sonst Home, sonst `.`.
    pub fn resolved_export_dir(&self) -> PathBuf {
        self.export_dir
            .clone()
            .or_else(dirs::desktop_dir)
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

fn binary_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}
