//! JSON-Import/Export für Marker-Sets und Extraktionsergebnisse.
//!
//! Dieses Modul erzeugt und liest nur Dokumente (Strings); Dateizugriffe
//! liegen in `app::use_cases::file_io`.

pub mod export;
pub mod import;

pub use export::{
    export_file_name, extraction_export, extraction_file_name, marker_export, to_pretty_json,
    ExtractionExport, MarkerExport,
};
pub use import::{parse_marker_import, ImportedMarkers};
