//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die Laufzeit-Optionen, die von `app` und dem CLI-Frontend
//! gemeinsam genutzt werden.

pub mod options;

pub use options::EditorOptions;
pub use options::{OPTIONS_FILE_NAME, STATE_FILE_NAME};
