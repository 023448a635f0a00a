//! Suche nach ARK-Konfigurationsdateien auf dem lokalen System.

use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};

const GAME_DIR: &str = "ARK Survival Ascended";

/// Standard-Konfigurationsverzeichnisse von ARK für die aktuelle Plattform.
///
/// Unter Windows `%LOCALAPPDATA%/ARK Survival Ascended/Saved/...`,
/// unter macOS `~/Library/Application Support/ARK Survival Ascended/Saved/Config`.
/// Andere Plattformen haben keine Standardpfade.
pub fn default_config_dirs() -> Vec<PathBuf> {
    if cfg!(target_os = "windows") {
        dirs::data_local_dir()
            .map(|local| {
                let saved = local.join(GAME_DIR).join("Saved");
                vec![saved.join("Config").join("Windows"), saved.join("LocalProfiles")]
            })
            .unwrap_or_default()
    } else if cfg!(target_os = "macos") {
        dirs::data_dir()
            .map(|support| vec![support.join(GAME_DIR).join("Saved").join("Config")])
            .unwrap_or_default()
    } else {
        Vec::new()
    }
}

/// Listet alle `.ini`-Dateien eines Verzeichnisses (sortiert, nicht rekursiv).
pub fn list_config_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        bail!("Directory not found: {}", dir.display());
    }

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("Verzeichnis nicht lesbar: {}", dir.display()))?
    {
        let path = entry?.path();
        let is_ini = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("ini"));
        if path.is_file() && is_ini {
            files.push(path);
        }
    }
    files.sort();

    log::info!("{} INI-Dateien in {}", files.len(), dir.display());
    Ok(files)
}

/// Sammelt `.ini`-Dateien aus allen existierenden Standardverzeichnissen.
pub fn discover_default_config_files() -> Vec<PathBuf> {
    default_config_dirs()
        .iter()
        .filter(|dir| dir.is_dir())
        .filter_map(|dir| match list_config_files(dir) {
            Ok(files) => Some(files),
            Err(e) => {
                log::warn!("Konfigurationsverzeichnis uebersprungen: {:#}", e);
                None
            }
        })
        .flatten()
        .collect()
}
