//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod persistence;
/// Application State
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Marker, Kategorien, Ansicht, Dialoge).
pub mod state;
pub mod use_cases;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use persistence::PersistedState;
pub use state::{AppState, MarkerDialogState, UiState, ViewState};
pub use use_cases::markers::{visible_markers, MarkerSource, VisibleMarker};
