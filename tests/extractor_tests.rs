/// Integrationstests: Wegpunkt-Extraktion aus realistischen Konfigurationsdateien
use ark_locator::{extract_waypoints, WaypointRecord};

const GAME_USER_SETTINGS: &str = include_str!("fixtures/GameUserSettings.ini");
const LOCAL_PROFILE: &str = include_str!("fixtures/LocalProfile.ini");
const ENGINE: &str = include_str!("fixtures/Engine.ini");

#[test]
fn test_game_user_settings_yields_structured_entries() {
    let records = extract_waypoints(GAME_USER_SETTINGS);

    let labels: Vec<_> = records.iter().map(WaypointRecord::label).collect();
    assert_eq!(labels, vec!["Red Obelisk", "Hidden Cave", "Named Wins"]);
    assert!(records
        .iter()
        .all(|r| matches!(r, WaypointRecord::MarkerEntry(_))));

    assert_eq!(records[0].position(), Some((123.5, -456.25, 12.0)));
    assert_eq!(records[0].color(), Some("Red"));
    assert_eq!(records[1].position(), Some((-20500.75, 80300.0, 0.0)));
    assert_eq!(records[2].position(), Some((1000.0, 2000.0, 0.0)));
    assert_eq!(records[2].color(), None);
}

#[test]
fn test_local_profile_falls_back_to_coordinate_lines() {
    let records = extract_waypoints(LOCAL_PROFILE);

    assert_eq!(records.len(), 3);
    assert!(records
        .iter()
        .all(|r| matches!(r, WaypointRecord::CoordinateLine(_))));
    assert_eq!(records[0].label(), "Waypoint 1");
    assert_eq!(records[1].position(), Some((80.3, 53.5, -12.0)));
    assert_eq!(records[2].label(), "Waypoint 3");
    assert_eq!(records[2].raw(), Some("Trader = 12.75 , 33.1"));
}

#[test]
fn test_engine_ini_is_dumped_as_sections() {
    let records = extract_waypoints(ENGINE);

    assert_eq!(records.len(), 2);
    assert!(records.iter().all(WaypointRecord::is_section));
    assert_eq!(records[0].label(), "Section: Core.System");
    assert_eq!(
        records[0].raw(),
        Some("Paths=../../../Engine/Content\nPaths=%GAMEDIR%Content")
    );
    assert_eq!(
        records[1].label(),
        "Section: /Script/Engine.RendererSettings"
    );
}

#[test]
fn test_long_section_is_truncated_for_preview() {
    let body = "Key=Value;".repeat(50);
    let records = extract_waypoints(&format!("[Huge]\n{body}"));

    let raw = records[0].raw().unwrap();
    assert!(raw.ends_with("..."));
    assert_eq!(raw.chars().count(), 203);
}

#[test]
fn test_section_record_serializes_with_flag_and_without_coordinates() {
    let records = extract_waypoints(ENGINE);
    let value = serde_json::to_value(&records[0]).unwrap();

    assert_eq!(value["isSection"], true);
    assert_eq!(value["label"], "Section: Core.System");
    assert!(value.get("x").is_none());
}

#[test]
fn test_nan_coordinates_serialize_as_null() {
    let records = extract_waypoints("MapMarkerEntries=(X=north,Y=2)");
    let value = serde_json::to_value(&records[0]).unwrap();

    assert!(value["x"].is_null());
    assert_eq!(value["y"], 2.0);
    assert_eq!(value["label"], "Unnamed Waypoint");
}

#[test]
fn test_crlf_input_is_handled_like_lf() {
    let unix = extract_waypoints(LOCAL_PROFILE);
    let windows = extract_waypoints(&LOCAL_PROFILE.replace('\n', "\r\n"));
    assert_eq!(unix, windows);
}
