//! ARK Locator.
//!
//! Kommandozeilen-Frontend für Marker-Verwaltung und Wegpunkt-Extraktion
//! aus ARK-Konfigurationsdateien.

use ark_locator::app::persistence;
use ark_locator::app::use_cases::{discovery, markers};
use ark_locator::{
    visible_markers, AppController, AppIntent, AppState, ArkMap, EditorOptions, MarkerSource,
    WaypointRecord,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ARK-Locator", version)]
#[command(about = "Karten-Marker und Wegpunkt-Extraktion fuer ARK: Survival Ascended", long_about = None)]
struct Cli {
    #[arg(long, global = true, value_name = "PATH", help = "Pfad der State-Datei")]
    state: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Wegpunkte aus einer Konfigurationsdatei extrahieren
    Extract {
        #[arg(value_name = "FILE")]
        file: PathBuf,
        #[arg(long, help = "Ergebnis als JSON ins Export-Verzeichnis schreiben")]
        export: bool,
    },
    /// INI-Dateien in einem Verzeichnis (oder den ARK-Standardpfaden) auflisten
    Discover {
        #[arg(value_name = "DIR")]
        dir: Option<PathBuf>,
    },
    /// Sichtbare Marker einer Karte auflisten
    Markers {
        #[arg(long)]
        map: Option<ArkMap>,
    },
    /// Marker anlegen
    Add {
        name: String,
        #[arg(allow_negative_numbers = true)]
        lat: f64,
        #[arg(allow_negative_numbers = true)]
        lon: f64,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        map: Option<ArkMap>,
    },
    /// Marker aus einer JSON-Datei importieren
    Import {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Marker einer Karte als JSON exportieren
    Export {
        #[arg(long)]
        map: Option<ArkMap>,
    },
    /// Preset-Marker einer Karte übernehmen
    LoadPresets {
        #[arg(long)]
        map: Option<ArkMap>,
    },
}

fn main() {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("ARK Locator v{} startet...", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        log::error!("Event handling failed: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    // Optionen aus TOML laden (oder Standardwerte)
    let options = EditorOptions::load_from_file(&EditorOptions::config_path());
    let state_path = cli
        .state
        .clone()
        .unwrap_or_else(|| options.resolved_state_file());

    let mut state = AppState::with_options(options);
    persistence::load_state(&mut state, &state_path);
    state.state_path = Some(state_path);

    let mut controller = AppController::new();

    match cli.command {
        Command::Extract { file, export } => {
            controller.handle_intent(&mut state, AppIntent::ConfigFileSelected { path: file })?;
            print_records(&state.ui.extraction);
            print_status(&state);
            if export && !state.ui.extraction.is_empty() {
                controller.handle_intent(&mut state, AppIntent::ExtractionExportRequested)?;
                print_status(&state);
            }
        }
        Command::Discover { dir } => {
            let files = match dir {
                Some(dir) => discovery::list_config_files(&dir)?,
                None => discovery::discover_default_config_files(),
            };
            if files.is_empty() {
                println!("Keine INI-Dateien gefunden");
            }
            for file in files {
                println!("{}", file.display());
            }
        }
        Command::Markers { map } => {
            select_map(&mut controller, &mut state, map)?;
            match state.current_map.image_source() {
                Some(source) => println!("{} ({})", state.current_map.display_name(), source),
                None => println!("{} (kein Kartenbild)", state.current_map.display_name()),
            }
            for category in &state.categories {
                let count = markers::marker_count_for_category(&state, &category.id);
                if count > 0 {
                    println!("  {:<20} {}", category.name, count);
                }
            }
            for marker in visible_markers(&state) {
                let source = match marker.source {
                    MarkerSource::Preset(id) => format!("preset {id}"),
                    MarkerSource::User(index) => format!("#{index}"),
                };
                println!(
                    "{:<20} {:<14} {:>6.1} {:>6.1}  {}",
                    source, marker.category, marker.lat, marker.lon, marker.name
                );
            }
        }
        Command::Add {
            name,
            lat,
            lon,
            category,
            map,
        } => {
            select_map(&mut controller, &mut state, map)?;
            controller.handle_intent(
                &mut state,
                AppIntent::AddMarkerRequested {
                    name,
                    category,
                    lat,
                    lon,
                },
            )?;
            controller.handle_intent(&mut state, AppIntent::SaveStateRequested)?;
            println!("{} Marker auf {}", state.marker_count(), state.current_map);
        }
        Command::Import { file } => {
            let result =
                controller.handle_intent(&mut state, AppIntent::ImportFileSelected { path: file });
            print_status(&state);
            result?;
            controller.handle_intent(&mut state, AppIntent::SaveStateRequested)?;
        }
        Command::Export { map } => {
            select_map(&mut controller, &mut state, map)?;
            let result = controller.handle_intent(&mut state, AppIntent::ExportRequested);
            print_status(&state);
            result?;
        }
        Command::LoadPresets { map } => {
            select_map(&mut controller, &mut state, map)?;
            controller.handle_intent(&mut state, AppIntent::LoadPresetsRequested)?;
            print_status(&state);
            controller.handle_intent(&mut state, AppIntent::SaveStateRequested)?;
        }
    }

    Ok(())
}

fn select_map(
    controller: &mut AppController,
    state: &mut AppState,
    map: Option<ArkMap>,
) -> anyhow::Result<()> {
    match map {
        Some(map) if map != state.current_map => {
            controller.handle_intent(state, AppIntent::MapSelected { map })
        }
        _ => Ok(()),
    }
}

fn print_records(records: &[WaypointRecord]) {
    for record in records {
        match (record.position(), record.raw()) {
            (Some((x, y, z)), _) => {
                println!("{:<30} {:>10.2} {:>10.2} {:>10.2}", record.label(), x, y, z)
            }
            (None, Some(raw)) => {
                println!("{}\n  {}", record.label(), raw.replace('\n', "\n  "))
            }
            (None, None) => println!("{}", record.label()),
        }
    }
}

fn print_status(state: &AppState) {
    if let Some(message) = &state.ui.status_message {
        println!("{}", message);
    }
}
