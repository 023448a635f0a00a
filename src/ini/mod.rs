//! Wegpunkt-Import aus ARK-Konfigurationsdateien.
//!
//! Die Dateien sind INI-ähnlich (`[Sektion]`, `Key=Value`) mit eingebetteten
//! `MapMarkerEntries=(...)`-Blöcken. Ein formales Grammatik-Dokument gibt es
//! nicht, daher arbeitet der Parser als Kaskade von Heuristiken.

pub mod parser;

pub use parser::extract_waypoints;
