//! AR Path Recorder (Kommandozeile).
//!
//! Hilfswerkzeug rund um gespeicherte Pfade: Archive prüfen und
//! Standard-Optionen schreiben. Die Session selbst läuft in der Host-App.

use ar_path_recorder::{PathArchive, SessionOptions};
use std::path::PathBuf;

const USAGE: &str = "Usage:
  ar-path-recorder inspect [<dir>]        Summarize an archived path
  ar-path-recorder init-config [<file>]   Write default session options";

fn main() -> anyhow::Result<()> {
    AppRunner::run(std::env::args().skip(1).collect())
}

struct AppRunner;

impl AppRunner {
    fn run(args: Vec<String>) -> anyhow::Result<()> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("AR Path Recorder v{} startet...", env!("CARGO_PKG_VERSION"));

        match args.first().map(String::as_str) {
            Some("inspect") => {
                // Ohne Argument: Archiv-Verzeichnis aus den Optionen
                let dir = match args.get(1) {
                    Some(dir) => PathBuf::from(dir),
                    None => SessionOptions::load_from_file(&SessionOptions::config_path())
                        .archive_dir
                        .ok_or_else(|| anyhow::anyhow!("inspect: Verzeichnis fehlt\n{}", USAGE))?,
                };
                Self::inspect(dir)
            }
            Some("init-config") => {
                let path = args
                    .get(1)
                    .map(PathBuf::from)
                    .unwrap_or_else(SessionOptions::config_path);
                Self::init_config(path)
            }
            _ => {
                println!("{}", USAGE);
                Ok(())
            }
        }
    }

    fn inspect(dir: PathBuf) -> anyhow::Result<()> {
        let archive = PathArchive::new(dir);
        let summary = archive.summary()?;

        println!("Archive:        {}", archive.dir().display());
        println!("Map data:       {} bytes", summary.map_data_bytes);
        println!("Waypoints:      {}", summary.waypoint_count);
        println!("Snapshots:      {}", summary.snapshot_count);
        println!("Meshes:         {}", summary.mesh_count);
        println!(
            "Destination:    {}",
            if summary.has_destination_image {
                "image present"
            } else {
                "no image"
            }
        );
        Ok(())
    }

    fn init_config(path: PathBuf) -> anyhow::Result<()> {
        if path.exists() {
            anyhow::bail!("{} existiert bereits", path.display());
        }
        SessionOptions::default().save_to_file(&path)?;
        log::info!("Standard-Optionen geschrieben: {}", path.display());
        Ok(())
    }
}
