//! Core-Domänentypen: Karten, Marker, Kategorien, Presets, Kartenansicht.

pub mod ark_map;
pub mod category;
pub mod map_marker;
pub mod map_view;
pub mod presets;
/// Ergebnis-Datensätze der Wegpunkt-Extraktion
pub mod waypoint_record;

pub use ark_map::ArkMap;
pub use category::{default_categories, Category, DEFAULT_CATEGORY_COLOR, DEFAULT_CATEGORY_ID};
pub use map_marker::{MapMarker, UNNAMED_MARKER};
pub use map_view::{MapCoords, MapView};
pub use presets::{presets_for, PresetMarker};
pub use waypoint_record::{CoordinateLine, MarkerEntry, SectionDump, WaypointRecord};
