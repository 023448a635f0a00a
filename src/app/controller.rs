//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};

/// Orchestriert UI-/CLI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Karte & Ansicht ===
            AppCommand::SetCurrentMap { map } => handlers::view::set_current_map(state, map),
            AppCommand::SetImageSize { size } => handlers::view::set_image_size(state, size),
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),
            AppCommand::ResetView => handlers::view::reset_view(state),
            AppCommand::ZoomBy { factor } => handlers::view::zoom_by(state, factor),
            AppCommand::BeginPan { pointer } => handlers::view::begin_pan(state, pointer),
            AppCommand::PanTo { pointer } => handlers::view::pan_to(state, pointer),
            AppCommand::EndPan => handlers::view::end_pan(state),
            AppCommand::UpdateHoverCoords { pointer } => {
                handlers::view::update_hover_coords(state, pointer)
            }
            AppCommand::CenterOnMarker { index } => handlers::view::center_on_marker(state, index),

            // === Marker ===
            AppCommand::OpenMarkerDialog { coords } => {
                handlers::editing::open_marker_dialog(state, coords)
            }
            AppCommand::OpenEditMarkerDialog { index } => {
                handlers::editing::open_edit_marker_dialog(state, index)
            }
            AppCommand::CloseMarkerDialog => handlers::editing::close_marker_dialog(state),
            AppCommand::AddMarker {
                name,
                category,
                lat,
                lon,
            } => handlers::editing::add_marker(state, &name, &category, lat, lon),
            AppCommand::UpdateMarker {
                index,
                name,
                category,
                lat,
                lon,
            } => handlers::editing::update_marker(state, index, &name, &category, lat, lon),
            AppCommand::DeleteMarker { index } => handlers::editing::delete_marker(state, index),

            // === Kategorien ===
            AppCommand::SelectCategory { id } => handlers::categories::select(state, &id),
            AppCommand::ToggleCategoryVisibility { id } => {
                handlers::categories::toggle_visibility(state, &id)
            }
            AppCommand::AddCategory { name, color } => {
                handlers::categories::add(state, &name, &color)
            }

            // === Presets ===
            AppCommand::LoadPresets => handlers::presets::load(state),
            AppCommand::SetPresetsEnabled { enabled } => {
                handlers::presets::set_enabled(state, enabled)
            }
            AppCommand::HidePreset { preset_id } => handlers::presets::hide(state, &preset_id),
            AppCommand::UnhidePreset { preset_id } => {
                handlers::presets::unhide(state, &preset_id)
            }
            AppCommand::SetPresetCategory {
                preset_id,
                category,
            } => handlers::presets::set_category(state, &preset_id, category.as_deref()),

            // === Datei-I/O ===
            AppCommand::ImportMarkers { path } => handlers::file_io::import(state, path)?,
            AppCommand::ExportMarkers => handlers::file_io::export(state)?,
            AppCommand::SelectConfigFile { path } => {
                handlers::file_io::select_config_file(state, path)
            }
            AppCommand::ExtractWaypoints => handlers::file_io::extract(state)?,
            AppCommand::ExportExtraction => handlers::file_io::export_extraction(state)?,
            AppCommand::PersistState => handlers::file_io::persist(state)?,
        }

        Ok(())
    }
}
