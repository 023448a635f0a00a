//! ARK Locator Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod ini;
pub mod json;
pub mod shared;

pub use app::{
    visible_markers, AppCommand, AppController, AppIntent, AppState, MarkerSource,
    PersistedState, UiState, ViewState, VisibleMarker,
};
pub use core::{
    default_categories, presets_for, ArkMap, Category, CoordinateLine, MapCoords, MapMarker,
    MapView, MarkerEntry, PresetMarker, SectionDump, WaypointRecord,
};
pub use ini::extract_waypoints;
pub use json::{parse_marker_import, ImportedMarkers};
pub use shared::EditorOptions;
