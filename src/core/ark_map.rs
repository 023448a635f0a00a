//! Katalog der unterstützten ARK-Karten.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const WIKILY_CDN: &str = "https://r2.wikily.gg/images/ark/maps";

/// Eine unterstützte ARK-Karte. Serialisiert als Kebab-Case-ID (`scorched-earth`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArkMap {
    #[default]
    Island,
    ScorchedEarth,
    Aberration,
    Extinction,
    TheCenter,
    Ragnarok,
    Valguero,
    #[serde(rename = "genesis-1")]
    Genesis1,
    CrystalIsles,
    #[serde(rename = "genesis-2")]
    Genesis2,
    LostIsland,
    Fjordur,
    LostColony,
    Astraeos,
}

impl ArkMap {
    /// Alle Karten in Menü-Reihenfolge.
    pub const ALL: [ArkMap; 14] = [
        ArkMap::Island,
        ArkMap::ScorchedEarth,
        ArkMap::Aberration,
        ArkMap::Extinction,
        ArkMap::TheCenter,
        ArkMap::Ragnarok,
        ArkMap::Valguero,
        ArkMap::Genesis1,
        ArkMap::CrystalIsles,
        ArkMap::Genesis2,
        ArkMap::LostIsland,
        ArkMap::Fjordur,
        ArkMap::LostColony,
        ArkMap::Astraeos,
    ];

    /// Stabile ID (Dateinamen, JSON-Schlüssel).
    pub fn id(self) -> &'static str {
        match self {
            ArkMap::Island => "island",
            ArkMap::ScorchedEarth => "scorched-earth",
            ArkMap::Aberration => "aberration",
            ArkMap::Extinction => "extinction",
            ArkMap::TheCenter => "the-center",
            ArkMap::Ragnarok => "ragnarok",
            ArkMap::Valguero => "valguero",
            ArkMap::Genesis1 => "genesis-1",
            ArkMap::CrystalIsles => "crystal-isles",
            ArkMap::Genesis2 => "genesis-2",
            ArkMap::LostIsland => "lost-island",
            ArkMap::Fjordur => "fjordur",
            ArkMap::LostColony => "lost-colony",
            ArkMap::Astraeos => "astraeos",
        }
    }

    /// Anzeigename.
    pub fn display_name(self) -> &'static str {
        match self {
            ArkMap::Island => "The Island",
            ArkMap::ScorchedEarth => "Scorched Earth",
            ArkMap::Aberration => "Aberration",
            ArkMap::Extinction => "Extinction",
            ArkMap::TheCenter => "The Center",
            ArkMap::Ragnarok => "Ragnarok",
            ArkMap::Valguero => "Valguero",
            ArkMap::Genesis1 => "Genesis: Part 1",
            ArkMap::CrystalIsles => "Crystal Isles",
            ArkMap::Genesis2 => "Genesis: Part 2",
            ArkMap::LostIsland => "Lost Island",
            ArkMap::Fjordur => "Fjordur",
            ArkMap::LostColony => "Lost Colony",
            ArkMap::Astraeos => "Astraeos",
        }
    }

    /// Quelle des Kartenbilds (CDN-URL oder lokaler Asset-Pfad).
    ///
    /// `None` wenn für die Karte kein Bild verfügbar ist.
    pub fn image_source(self) -> Option<String> {
        let file = match self {
            ArkMap::Island => "TheIsland.webp",
            ArkMap::ScorchedEarth => "ScorchedEarth.webp",
            ArkMap::Aberration => "Aberration.webp",
            ArkMap::Extinction => "Extinction.webp",
            ArkMap::TheCenter => "TheCenter.webp",
            ArkMap::Ragnarok => "Ragnarok.webp",
            ArkMap::Valguero => "Valguero.webp",
            // Genesis 1 und 2 teilen sich ein Bild
            ArkMap::Genesis1 | ArkMap::Genesis2 => "Genesis.webp",
            ArkMap::CrystalIsles => "CrystalIsles.webp",
            ArkMap::LostIsland => "LostIsland.webp",
            ArkMap::Fjordur => "Fjordur.webp",
            ArkMap::Astraeos => return Some("assets/maps/astraeos.jpg".to_string()),
            ArkMap::LostColony => return None,
        };
        Some(format!("{WIKILY_CDN}/{file}"))
    }
}

impl fmt::Display for ArkMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ArkMap {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        ArkMap::ALL
            .into_iter()
            .find(|map| map.id().eq_ignore_ascii_case(needle))
            .ok_or_else(|| anyhow::anyhow!("Unbekannte Karte: '{}'", s))
    }
}
