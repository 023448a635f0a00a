//! Marker-Kategorien (Farbe, Icon, Sichtbarkeit).

use serde::{Deserialize, Serialize};

/// ID der Standard-Kategorie ("General").
pub const DEFAULT_CATEGORY_ID: &str = "default";

/// Standardfarbe neuer Kategorien.
pub const DEFAULT_CATEGORY_COLOR: &str = "#00d9ff";

const ICON_CDN: &str = "https://r2.wikily.gg/images/ark/icons";

/// Gruppierung und Darstellungsstil für Marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Eindeutige ID
    pub id: String,
    /// Anzeigename
    pub name: String,
    /// Farbe als Hex-String (`#rrggbb`)
    pub color: String,
    /// Optionale Icon-URL
    #[serde(default)]
    pub icon: Option<String>,
    /// Marker dieser Kategorie werden angezeigt
    #[serde(default = "default_visible")]
    pub visible: bool,
}

fn default_visible() -> bool {
    true
}

impl Category {
    fn builtin(id: &str, name: &str, color: &str, icon: Option<&str>) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            color: color.to_string(),
            icon: icon.map(|file| format!("{ICON_CDN}/{file}")),
            visible: true,
        }
    }

    /// Erstellt eine benutzerdefinierte Kategorie.
    ///
    /// Die ID setzt sich aus dem kleingeschriebenen Namen (Whitespace → `-`)
    /// und einem Millisekunden-Zeitstempel zusammen. Gibt `None` zurück,
    /// wenn der Name leer ist.
    pub fn user_defined(name: &str, color: &str, timestamp_millis: i64) -> Option<Self> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        let slug = name
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-");
        Some(Self {
            id: format!("{slug}-{timestamp_millis}"),
            name: name.to_string(),
            color: color.to_string(),
            icon: None,
            visible: true,
        })
    }
}

/// Eingebaute Kategorien in Anzeigereihenfolge.
pub fn default_categories() -> Vec<Category> {
    vec![
        Category::builtin(DEFAULT_CATEGORY_ID, "General", DEFAULT_CATEGORY_COLOR, None),
        Category::builtin(
            "bases",
            "Base Locations",
            "#ff9800",
            Some("ThatchFoundation_Icon.webp"),
        ),
        Category::builtin("caves", "Caves", "#9c27b0", Some("Artifact_Icon.webp")),
        Category::builtin("obelisks", "Obelisks", "#00bcd4", Some("Tribute_Icon.webp")),
        Category::builtin("metal", "Metal", "#78909c", Some("MetalOre_Icon.webp")),
        Category::builtin("crystal", "Crystal", "#e1bee7", Some("Crystal_Icon.webp")),
        Category::builtin("obsidian", "Obsidian", "#37474f", Some("Obsidian_Icon.webp")),
        Category::builtin("oil", "Oil", "#212121", Some("OilFuel_Icon.webp")),
        Category::builtin("pearls", "Silica Pearls", "#fff59d", Some("Pearl_Icon.webp")),
        Category::builtin("notes", "Explorer Notes", "#ffcc80", Some("NoteIcon.webp")),
        Category::builtin(
            "loot-crates",
            "Loot Crates",
            "#2196f3",
            Some("SupplyCrate_Icon.webp"),
        ),
        Category::builtin("drops-veins", "Drops & Veins", "#9c27b0", None),
        Category::builtin(
            "wyvern-eggs",
            "Wyvern Eggs",
            "#e91e63",
            Some("WyvernEgg_Icon.webp"),
        ),
        Category::builtin("danger", "Danger Zones", "#ff5252", None),
    ]
}
