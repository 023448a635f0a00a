use crate::app::{AppCommand, AppIntent, AppState};
use crate::core::MapCoords;
use glam::DVec2;

use super::map_intent_to_commands;

fn state_with_image() -> AppState {
    let mut state = AppState::new();
    state.view.viewport_size = DVec2::new(800.0, 600.0);
    state.view.image_size = Some(DVec2::new(400.0, 400.0));
    state
}

#[test]
fn zoom_buttons_use_configured_steps() {
    let mut state = AppState::new();
    state.options.view_zoom_in_step = 1.5;

    let commands = map_intent_to_commands(&state, AppIntent::ZoomInRequested);
    assert!(matches!(commands[..], [AppCommand::ZoomBy { factor }] if factor == 1.5));

    let commands = map_intent_to_commands(&state, AppIntent::ZoomOutRequested);
    assert!(matches!(commands[..], [AppCommand::ZoomBy { factor }] if factor == 0.8));
}

#[test]
fn scrolling_down_zooms_out() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::MapScrolled { delta_y: 120.0 });
    assert!(matches!(commands[..], [AppCommand::ZoomBy { factor }] if factor == 0.9));

    let commands = map_intent_to_commands(&state, AppIntent::MapScrolled { delta_y: -120.0 });
    assert!(matches!(commands[..], [AppCommand::ZoomBy { factor }] if factor == 1.1));
}

#[test]
fn click_inside_map_opens_marker_dialog() {
    let state = state_with_image();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::MapClicked {
            pointer: DVec2::new(400.0, 300.0),
        },
    );

    assert_eq!(commands.len(), 1);
    match &commands[0] {
        AppCommand::OpenMarkerDialog { coords } => {
            assert_eq!(*coords, MapCoords::new(50.0, 50.0));
        }
        other => panic!("Unerwarteter Command: {other:?}"),
    }
}

#[test]
fn click_outside_map_or_without_image_does_nothing() {
    let state = state_with_image();
    let outside = AppIntent::MapClicked {
        pointer: DVec2::new(10.0, 10.0),
    };
    assert!(map_intent_to_commands(&state, outside).is_empty());

    let empty = AppState::new();
    let center = AppIntent::MapClicked {
        pointer: DVec2::new(400.0, 300.0),
    };
    assert!(map_intent_to_commands(&empty, center).is_empty());
}

#[test]
fn click_while_panning_does_nothing() {
    let mut state = state_with_image();
    state.view.map_view.begin_pan(DVec2::new(400.0, 300.0));

    let commands = map_intent_to_commands(
        &state,
        AppIntent::MapClicked {
            pointer: DVec2::new(400.0, 300.0),
        },
    );
    assert!(commands.is_empty());
}

#[test]
fn pointer_move_pans_only_while_panning() {
    let mut state = AppState::new();
    let pointer = DVec2::new(5.0, 5.0);

    let commands = map_intent_to_commands(&state, AppIntent::PointerMoved { pointer });
    assert_eq!(commands.len(), 1);

    state.view.map_view.begin_pan(DVec2::ZERO);
    let commands = map_intent_to_commands(&state, AppIntent::PointerMoved { pointer });
    assert_eq!(commands.len(), 2);
    assert!(matches!(commands[1], AppCommand::PanTo { .. }));
}

#[test]
fn dialog_confirm_adds_or_updates_depending_on_dialog() {
    let mut state = AppState::new();
    let confirm = || AppIntent::MarkerDialogConfirmed {
        name: "Base".into(),
        category: "bases".into(),
        lat: 1.0,
        lon: 2.0,
    };

    let commands = map_intent_to_commands(&state, confirm());
    assert!(matches!(commands[0], AppCommand::AddMarker { .. }));
    assert!(matches!(commands[1], AppCommand::CloseMarkerDialog));

    state.ui.marker_dialog.editing_index = Some(3);
    let commands = map_intent_to_commands(&state, confirm());
    assert!(matches!(commands[0], AppCommand::UpdateMarker { index: 3, .. }));
}

#[test]
fn add_marker_without_category_uses_selected_category() {
    let mut state = AppState::new();
    state.selected_category = "caves".into();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::AddMarkerRequested {
            name: "Cave".into(),
            category: None,
            lat: 1.0,
            lon: 1.0,
        },
    );

    match &commands[0] {
        AppCommand::AddMarker { category, .. } => assert_eq!(category, "caves"),
        other => panic!("Unerwarteter Command: {other:?}"),
    }
}

#[test]
fn config_file_selection_extracts_immediately() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::ConfigFileSelected {
            path: "GameUserSettings.ini".into(),
        },
    );

    assert_eq!(commands.len(), 2);
    assert!(matches!(commands[0], AppCommand::SelectConfigFile { .. }));
    assert!(matches!(commands[1], AppCommand::ExtractWaypoints));
}
