use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::category::DEFAULT_CATEGORY_ID;

/// Name für Marker, die ohne Namen gespeichert werden.
pub const UNNAMED_MARKER: &str = "Unnamed Marker";

/// Vom Benutzer gesetzter Marker auf einer Karte.
///
/// `lat`/`lon` sind ARK-Kartenkoordinaten (0–100), `lat` vertikal, `lon` horizontal.
/// Das JSON-Format ist kompatibel zu den Exporten älterer Versionen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapMarker {
    /// Anzeigename
    pub name: String,
    /// Kategorie-ID
    #[serde(default = "default_category")]
    pub category: String,
    pub lat: f64,
    pub lon: f64,
    /// Erstellungszeitpunkt
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    /// Letzte Bearbeitung
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    /// Aus einem Preset übernommen
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_preset: bool,
}

fn default_category() -> String {
    DEFAULT_CATEGORY_ID.to_string()
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl MapMarker {
    /// Erstellt einen neuen Marker mit aktuellem Zeitstempel.
    ///
    /// Ein leerer Name wird durch [`UNNAMED_MARKER`] ersetzt.
    pub fn new(name: &str, category: &str, lat: f64, lon: f64) -> Self {
        let name = name.trim();
        Self {
            name: if name.is_empty() {
                UNNAMED_MARKER.to_string()
            } else {
                name.to_string()
            },
            category: category.to_string(),
            lat,
            lon,
            created_at: Utc::now(),
            updated_at: None,
            is_preset: false,
        }
    }

    /// Prüft ob dieser Marker denselben Ort mit gleichem Namen beschreibt.
    ///
    /// Toleranz: weniger als 1 Einheit Abstand je Achse.
    pub fn matches_location(&self, name: &str, lat: f64, lon: f64) -> bool {
        self.name == name && (self.lat - lat).abs() < 1.0 && (self.lon - lon).abs() < 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_name_falls_back_to_unnamed() {
        let marker = MapMarker::new("   ", "caves", 10.0, 20.0);
        assert_eq!(marker.name, UNNAMED_MARKER);
        assert_eq!(marker.category, "caves");
        assert!(!marker.is_preset);
    }

    #[test]
    fn matches_location_uses_one_unit_tolerance() {
        let marker = MapMarker::new("Red Obelisk", "obelisks", 20.5, 82.0);
        assert!(marker.matches_location("Red Obelisk", 21.2, 81.3));
        assert!(!marker.matches_location("Red Obelisk", 21.5, 82.0));
        assert!(!marker.matches_location("Blue Obelisk", 20.5, 82.0));
    }

    #[test]
    fn deserializes_legacy_export_entry() {
        let json = r#"{"name":"Base","category":"bases","lat":50.1,"lon":40.2,
            "createdAt":"2024-05-01T12:00:00.000Z"}"#;
        let marker: MapMarker = serde_json::from_str(json).unwrap();
        assert_eq!(marker.name, "Base");
        assert_eq!(marker.category, "bases");
        assert!(marker.updated_at.is_none());
        assert!(!marker.is_preset);
    }

    #[test]
    fn missing_category_and_timestamp_get_defaults() {
        let marker: MapMarker = serde_json::from_str(r#"{"name":"X","lat":1,"lon":2}"#).unwrap();
        assert_eq!(marker.category, DEFAULT_CATEGORY_ID);
    }
}
