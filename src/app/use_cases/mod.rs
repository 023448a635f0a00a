//! Use-Cases der Application-Layer-Orchestrierung.

pub mod camera;
pub mod categories;
pub mod discovery;
pub mod file_io;
pub mod markers;
pub mod presets;
