use ark_locator::{extract_waypoints, parse_marker_import};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::fmt::Write;
use std::hint::black_box;

fn bench_fixture_extraction(c: &mut Criterion) {
    let fixtures = [
        (
            "game_user_settings",
            include_str!("../tests/fixtures/GameUserSettings.ini"),
        ),
        ("local_profile", include_str!("../tests/fixtures/LocalProfile.ini")),
        ("engine", include_str!("../tests/fixtures/Engine.ini")),
    ];

    let mut group = c.benchmark_group("extract_fixture");
    for (name, content) in fixtures {
        group.bench_with_input(BenchmarkId::from_parameter(name), content, |b, content| {
            b.iter(|| black_box(extract_waypoints(black_box(content)).len()))
        });
    }
    group.finish();
}

fn build_marker_config(entry_count: usize) -> String {
    let mut content = String::from("[/Script/ShooterGame.ShooterGameUserSettings]\n");
    for index in 0..entry_count {
        let x = (index % 1000) as f64 * 12.5 - 6000.0;
        let y = (index / 1000) as f64 * 40.0 + 0.25;
        let _ = writeln!(
            content,
            "MapMarkerEntries=(X={x},Y={y},Z=0,Name=\"Marker {index}\",Color=\"Red\")"
        );
    }
    content
}

fn build_section_config(section_count: usize) -> String {
    let mut content = String::new();
    for index in 0..section_count {
        let _ = writeln!(
            content,
            "[Section.{index}]\nbEnabled=True\nQuality=High\nPath=/Game/Maps/Level{index}\n"
        );
    }
    content
}

fn bench_synthetic_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_synthetic");

    for &count in &[100usize, 10_000usize] {
        let markers = build_marker_config(count);
        group.bench_with_input(
            BenchmarkId::new("marker_entries", count),
            &markers,
            |b, content| b.iter(|| black_box(extract_waypoints(black_box(content)).len())),
        );

        let sections = build_section_config(count);
        group.bench_with_input(
            BenchmarkId::new("section_fallback", count),
            &sections,
            |b, content| b.iter(|| black_box(extract_waypoints(black_box(content)).len())),
        );
    }

    group.finish();
}

fn bench_marker_import(c: &mut Criterion) {
    let waypoints: Vec<String> = (0..5_000)
        .map(|i| {
            format!(
                r#"{{"name":"Spot {i}","category":"default","lat":{},"lon":{}}}"#,
                (i % 100) as f64,
                ((i * 7) % 100) as f64
            )
        })
        .collect();
    let document = format!(
        r#"{{"mapName":"island","waypoints":[{}]}}"#,
        waypoints.join(",")
    );

    c.bench_function("import_5000_markers", |b| {
        b.iter(|| {
            let imported = parse_marker_import(black_box(&document)).expect("Import fehlgeschlagen");
            black_box(imported.markers.len())
        })
    });
}

criterion_group!(
    benches,
    bench_fixture_extraction,
    bench_synthetic_extraction,
    bench_marker_import
);
criterion_main!(benches);
