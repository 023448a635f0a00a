use super::*;
use crate::core::waypoint_record::UNNAMED_WAYPOINT;
use crate::core::{CoordinateLine, MarkerEntry};

#[test]
fn test_single_structured_entry() {
    let records = extract_waypoints(r#"MapMarkerEntries=(X=10.5,Y=20.25,Z=1,Name="Cave")"#);

    assert_eq!(
        records,
        vec![WaypointRecord::MarkerEntry(MarkerEntry {
            label: "Cave".into(),
            x: 10.5,
            y: 20.25,
            z: 1.0,
            color: None,
        })]
    );
}

#[test]
fn test_structured_entries_keep_order_and_take_precedence() {
    let content = "[Markers]\n\
        1.0,2.0\n\
        MapMarkerEntries=(X=1,Y=2,Name=\"First\")\n\
        Foo=Bar MapMarkerEntries=(X=3,Y=4,Color=\"Blue\")\n";

    let records = extract_waypoints(content);

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].label(), "First");
    assert_eq!(records[1].label(), UNNAMED_WAYPOINT);
    assert_eq!(records[1].color(), Some("Blue"));
    assert!(records
        .iter()
        .all(|r| matches!(r, WaypointRecord::MarkerEntry(_))));
}

#[test]
fn test_marker_key_is_case_insensitive() {
    let records = extract_waypoints("mapmarkerentries=(x=5,y=6,z=7)");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].position(), Some((5.0, 6.0, 7.0)));
}

#[test]
fn test_entry_without_y_is_dropped_not_partial() {
    let content = "MapMarkerEntries=(X=1,Name=\"Broken\")\nMapMarkerEntries=(X=2,Y=3)";
    let records = extract_waypoints(content);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].position(), Some((2.0, 3.0, 0.0)));
}

#[test]
fn test_non_numeric_coordinate_becomes_nan() {
    let records = extract_waypoints("MapMarkerEntries=(X=abc,Y=5,Name=\"Odd\")");
    assert_eq!(records.len(), 1);
    let (x, y, z) = records[0].position().unwrap();
    assert!(x.is_nan());
    assert_eq!(y, 5.0);
    assert_eq!(z, 0.0);
}

#[test]
fn test_coordinate_lines_fallback() {
    let records = extract_waypoints("foo\n1.0,2.0\n;comment\n[Section]\nbar\n3.5, 4.5, 6.0");

    assert_eq!(
        records,
        vec![
            WaypointRecord::CoordinateLine(CoordinateLine {
                label: "Waypoint 1".into(),
                x: 1.0,
                y: 2.0,
                z: 0.0,
                raw: "1.0,2.0".into(),
            }),
            WaypointRecord::CoordinateLine(CoordinateLine {
                label: "Waypoint 2".into(),
                x: 3.5,
                y: 4.5,
                z: 6.0,
                raw: "3.5, 4.5, 6.0".into(),
            }),
        ]
    );
}

#[test]
fn test_section_dump_only_when_nothing_else_matches() {
    let content = "[ServerSettings]\nDifficultyOffset=1.0\n\
        [Empty]\n\n\
        [SessionSettings]\nSessionName=My Server\n";

    let records = extract_waypoints(content);

    assert_eq!(records.len(), 2);
    assert!(records.iter().all(WaypointRecord::is_section));
    assert_eq!(records[0].label(), "Section: ServerSettings");
    assert_eq!(records[0].raw(), Some("DifficultyOffset=1.0"));
    assert_eq!(records[1].label(), "Section: SessionSettings");
    assert_eq!(records[1].raw(), Some("SessionName=My Server"));
}

#[test]
fn test_empty_input_yields_empty_result() {
    assert!(extract_waypoints("").is_empty());
    assert!(extract_waypoints(" \n\t\n").is_empty());
}

#[test]
fn test_garbage_input_degrades_gracefully() {
    assert!(extract_waypoints("\u{0}\u{1}\u{7f}ÿþ garbage )(=,\"").is_empty());
}

#[test]
fn test_extraction_is_deterministic() {
    let content = "MapMarkerEntries=(X=nope,Y=1)\nMapMarkerEntries=(X=2,Y=3,Name=\"B\")";
    let first = extract_waypoints(content);
    let second = extract_waypoints(content);
    assert_eq!(format!("{first:?}"), format!("{second:?}"));
}

#[test]
fn test_parse_number_is_lenient() {
    assert_eq!(parse_number("12.5abc"), 12.5);
    assert_eq!(parse_number("  -3"), -3.0);
    assert_eq!(parse_number(".5"), 0.5);
    assert_eq!(parse_number("1e3x"), 1000.0);
    assert!(parse_number("Infinity").is_infinite());
    assert!(parse_number("abc").is_nan());
    assert!(parse_number("").is_nan());
}

#[test]
fn test_parenthesis_inside_quoted_value() {
    let records =
        extract_waypoints(r#"MapMarkerEntries=(X=1,Y=2,Name="Cave (North)",Color="Red")"#);

    assert_eq!(
        records,
        vec![WaypointRecord::MarkerEntry(MarkerEntry {
            label: "Cave (North)".into(),
            x: 1.0,
            y: 2.0,
            z: 0.0,
            color: Some("Red".into()),
        })]
    );
}

#[test]
fn test_leading_bom_is_ignored() {
    let records = extract_waypoints("\u{feff};1,2\n3, 4\n");

    assert_eq!(
        records,
        vec![WaypointRecord::CoordinateLine(CoordinateLine {
            label: "Waypoint 1".into(),
            x: 3.0,
            y: 4.0,
            z: 0.0,
            raw: "3, 4".into(),
        })]
    );
}
