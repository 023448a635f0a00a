//! Application State: zentrale Datenhaltung.

mod app_state;
mod dialogs;
mod view;

pub use app_state::AppState;
pub use dialogs::{MarkerDialogState, UiState};
pub use view::ViewState;
