//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::MapSelected { map } => vec![AppCommand::SetCurrentMap { map }],
        AppIntent::MapImageLoaded { size } => vec![AppCommand::SetImageSize { size }],
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::ResetViewRequested => vec![AppCommand::ResetView],
        AppIntent::ZoomInRequested => vec![AppCommand::ZoomBy {
            factor: state.options.view_zoom_in_step,
        }],
        AppIntent::ZoomOutRequested => vec![AppCommand::ZoomBy {
            factor: state.options.view_zoom_out_step,
        }],
        AppIntent::MapScrolled { delta_y } => {
            let factor = if delta_y > 0.0 {
                state.options.view_scroll_zoom_out
            } else {
                state.options.view_scroll_zoom_in
            };
            vec![AppCommand::ZoomBy { factor }]
        }
        AppIntent::PanStarted { pointer } => vec![AppCommand::BeginPan { pointer }],
        AppIntent::PointerMoved { pointer } => {
            let mut commands = vec![AppCommand::UpdateHoverCoords { pointer }];
            if state.view.map_view.is_panning() {
                commands.push(AppCommand::PanTo { pointer });
            }
            commands
        }
        AppIntent::PanEnded => vec![AppCommand::EndPan],
        AppIntent::MapClicked { pointer } => {
            // Klick nach/während Pan setzt keinen Marker
            if state.view.map_view.is_panning() {
                return Vec::new();
            }
            match state.view.coords_at(pointer) {
                Some(coords) if coords.is_on_map() => {
                    vec![AppCommand::OpenMarkerDialog { coords }]
                }
                _ => Vec::new(),
            }
        }

        AppIntent::MarkerEditRequested { index } => {
            vec![AppCommand::OpenEditMarkerDialog { index }]
        }
        AppIntent::MarkerDialogConfirmed {
            name,
            category,
            lat,
            lon,
        } => {
            let edit = match state.ui.marker_dialog.editing_index {
                Some(index) => AppCommand::UpdateMarker {
                    index,
                    name,
                    category,
                    lat,
                    lon,
                },
                None => AppCommand::AddMarker {
                    name,
                    category,
                    lat,
                    lon,
                },
            };
            vec![edit, AppCommand::CloseMarkerDialog]
        }
        AppIntent::MarkerDialogCancelled => vec![AppCommand::CloseMarkerDialog],
        AppIntent::AddMarkerRequested {
            name,
            category,
            lat,
            lon,
        } => vec![AppCommand::AddMarker {
            name,
            category: category.unwrap_or_else(|| state.selected_category.clone()),
            lat,
            lon,
        }],
        AppIntent::DeleteMarkerRequested { index } => {
            let mut commands = vec![AppCommand::DeleteMarker { index }];
            if state.ui.marker_dialog.editing_index == Some(index) {
                commands.push(AppCommand::CloseMarkerDialog);
            }
            commands
        }
        AppIntent::PanToMarkerRequested { index } => vec![AppCommand::CenterOnMarker { index }],

        AppIntent::CategorySelected { id } => vec![AppCommand::SelectCategory { id }],
        AppIntent::CategoryVisibilityToggled { id } => {
            vec![AppCommand::ToggleCategoryVisibility { id }]
        }
        AppIntent::CategoryAddRequested { name, color } => {
            vec![AppCommand::AddCategory { name, color }]
        }

        AppIntent::LoadPresetsRequested => vec![AppCommand::LoadPresets],
        AppIntent::PresetsToggled { enabled } => vec![AppCommand::SetPresetsEnabled { enabled }],
        AppIntent::PresetHideRequested { preset_id } => {
            vec![AppCommand::HidePreset { preset_id }]
        }
        AppIntent::PresetUnhideRequested { preset_id } => {
            vec![AppCommand::UnhidePreset { preset_id }]
        }
        AppIntent::PresetCategoryChangeRequested {
            preset_id,
            category,
        } => vec![AppCommand::SetPresetCategory {
            preset_id,
            category,
        }],

        AppIntent::ImportFileSelected { path } => vec![AppCommand::ImportMarkers { path }],
        AppIntent::ExportRequested => vec![AppCommand::ExportMarkers],
        AppIntent::ConfigFileSelected { path } => vec![
            AppCommand::SelectConfigFile { path },
            AppCommand::ExtractWaypoints,
        ],
        AppIntent::ExtractionExportRequested => vec![AppCommand::ExportExtraction],

        AppIntent::SaveStateRequested => vec![AppCommand::PersistState],
    }
}

#[cfg(test)]
mod tests;
