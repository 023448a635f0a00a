//! Ergebnis-Datensätze der Wegpunkt-Extraktion aus ARK-Konfigurationsdateien.
//!
//! Jede Extraktion liefert ausschließlich Datensätze einer einzigen Variante,
//! je nachdem welche Parser-Strategie gegriffen hat.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// Standard-Label für strukturierte Einträge ohne `Name`/`Label`.
pub const UNNAMED_WAYPOINT: &str = "Unnamed Waypoint";

/// Ein extrahierter Datensatz.
///
/// `MarkerEntry` und `CoordinateLine` tragen Koordinaten, `Section` ist ein
/// reiner Diagnose-Platzhalter für nicht erkannte Dateiformate.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum WaypointRecord {
    /// Aus einem `MapMarkerEntries=(...)`-Block gelesen
    MarkerEntry(MarkerEntry),
    /// Aus einer losen `x, y[, z]`-Zeile gelesen
    CoordinateLine(CoordinateLine),
    /// Roh-Inhalt einer INI-Sektion (keine Koordinaten)
    Section(SectionDump),
}

/// Strukturierter Marker-Eintrag.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerEntry {
    pub label: String,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    /// Farbangabe aus der Config, `null` wenn nicht vorhanden
    pub color: Option<String>,
}

/// Koordinaten aus einer freien Textzeile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoordinateLine {
    /// Synthetisiert: `Waypoint <n>`
    pub label: String,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    /// Getrimmte Originalzeile
    pub raw: String,
}

/// Diagnose-Datensatz für eine nicht geparste Sektion.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionDump {
    /// `Section: <Name>`
    pub label: String,
    /// Getrimmter, ggf. gekürzter Sektionsinhalt
    pub raw: String,
}

impl Serialize for SectionDump {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("SectionDump", 3)?;
        s.serialize_field("label", &self.label)?;
        s.serialize_field("raw", &self.raw)?;
        s.serialize_field("isSection", &true)?;
        s.end()
    }
}

impl WaypointRecord {
    /// Anzeigename des Datensatzes.
    pub fn label(&self) -> &str {
        match self {
            Self::MarkerEntry(entry) => &entry.label,
            Self::CoordinateLine(line) => &line.label,
            Self::Section(section) => &section.label,
        }
    }

    /// Koordinaten `(x, y, z)`, `None` für Sektions-Platzhalter.
    pub fn position(&self) -> Option<(f64, f64, f64)> {
        match self {
            Self::MarkerEntry(entry) => Some((entry.x, entry.y, entry.z)),
            Self::CoordinateLine(line) => Some((line.x, line.y, line.z)),
            Self::Section(_) => None,
        }
    }

    /// Gibt `true` zurück für Diagnose-Datensätze ohne Koordinaten.
    pub fn is_section(&self) -> bool {
        matches!(self, Self::Section(_))
    }

    /// Farbangabe (nur bei strukturierten Einträgen).
    pub fn color(&self) -> Option<&str> {
        match self {
            Self::MarkerEntry(entry) => entry.color.as_deref(),
            _ => None,
        }
    }

    /// Originalfragment aus der Quelldatei, falls vorhanden.
    pub fn raw(&self) -> Option<&str> {
        match self {
            Self::MarkerEntry(_) => None,
            Self::CoordinateLine(line) => Some(&line.raw),
            Self::Section(section) => Some(&section.raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn marker_entry_serializes_null_color() {
        let record = WaypointRecord::MarkerEntry(MarkerEntry {
            label: "Cave".into(),
            x: 10.5,
            y: 20.25,
            z: 1.0,
            color: None,
        });
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            json!({"label": "Cave", "x": 10.5, "y": 20.25, "z": 1.0, "color": null})
        );
    }

    #[test]
    fn section_serializes_is_section_flag_without_coordinates() {
        let record = WaypointRecord::Section(SectionDump {
            label: "Section: Foo".into(),
            raw: "bar".into(),
        });
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            json!({"label": "Section: Foo", "raw": "bar", "isSection": true})
        );
        assert!(record.position().is_none());
        assert!(record.is_section());
    }

    #[test]
    fn coordinate_line_keeps_raw_and_has_no_color() {
        let record = WaypointRecord::CoordinateLine(CoordinateLine {
            label: "Waypoint 1".into(),
            x: 1.0,
            y: 2.0,
            z: 0.0,
            raw: "1.0,2.0".into(),
        });
        assert_eq!(record.raw(), Some("1.0,2.0"));
        assert_eq!(record.color(), None);
        assert_eq!(record.position(), Some((1.0, 2.0, 0.0)));
    }

    #[test]
    fn nan_coordinates_serialize_as_null() {
        let record = WaypointRecord::MarkerEntry(MarkerEntry {
            label: UNNAMED_WAYPOINT.into(),
            x: f64::NAN,
            y: 3.0,
            z: 0.0,
            color: Some("Red".into()),
        });
        let value = serde_json::to_value(&record).unwrap();
        assert!(value["x"].is_null());
        assert_eq!(value["color"], json!("Red"));
    }
}
