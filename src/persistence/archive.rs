//! Verzeichnisbasierte Ablage gespeicherter Pfade.
//!
//! Ein Pfad-Verzeichnis enthält die Anker der Karte (`map.arexperience`,
//! JSON), die opaken Kartendaten (`map.bin`) sowie Start- und Zielbild.
//!
//! `map.arexperience` wird als letzte Datei geschrieben und markiert ein
//! vollständiges Archiv.

use super::{CreatedPath, LoadedPath, PathDelegate};
use crate::core::{Anchor, AnchorId, AnchorKind, PersistedMap, ReferenceSnapshot, SnapshotKind};
use anyhow::Context;
use glam::Mat4;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Dateiname der Anker-Liste, schließt ein Archiv ab.
pub const MAP_FILE_NAME: &str = "map.arexperience";
/// Dateiname der opaken Kartendaten.
pub const MAP_DATA_FILE_NAME: &str = "map.bin";
/// Dateiname des Startbilds.
pub const START_IMAGE_FILE_NAME: &str = "start.jpg";
/// Dateiname des Zielbilds.
pub const DESTINATION_IMAGE_FILE_NAME: &str = "destination.jpg";

#[derive(Serialize)]
struct MapManifestRef<'a> {
    anchors: &'a [Anchor],
}

#[derive(Deserialize)]
struct MapManifest {
    anchors: Vec<Anchor>,
}

/// Kurzübersicht über einen archivierten Pfad.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveSummary {
    /// Anzahl der Wegpunkt-Anker
    pub waypoint_count: usize,
    /// Anzahl der Snapshot-Anker
    pub snapshot_count: usize,
    /// Anzahl der Mesh-Anker
    pub mesh_count: usize,
    /// Größe der opaken Kartendaten in Bytes
    pub map_data_bytes: usize,
    /// Zielbild vorhanden
    pub has_destination_image: bool,
}

/// Pfad-Verzeichnis auf der Platte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathArchive {
    dir: PathBuf,
}

impl PathArchive {
    /// Erstellt ein Archiv für das gegebene Verzeichnis (wird erst beim Schreiben angelegt).
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Archiv-Verzeichnis.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Pfad zur Anker-Liste.
    pub fn map_path(&self) -> PathBuf {
        self.dir.join(MAP_FILE_NAME)
    }

    /// Prüft, ob ein vollständiges Archiv abgelegt ist.
    pub fn has_map_data(&self) -> bool {
        self.map_path().is_file()
    }

    /// Schreibt Bilder, Kartendaten und zuletzt die Anker-Liste.
    ///
    /// Eine vorhandene Anker-Liste wird zuerst entfernt. Bricht das Schreiben
    /// ab, gilt das Verzeichnis nicht als Archiv.
    pub fn write(&self, path: &CreatedPath) -> anyhow::Result<()> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("Archiv-Verzeichnis {} anlegen", self.dir.display()))?;

        let map_path = self.map_path();
        match std::fs::remove_file(&map_path) {
            Ok(()) => log::debug!("Vorherige Anker-Liste {} entfernt", map_path.display()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Anker-Liste {} entfernen", map_path.display()))
            }
        }

        self.write_file(START_IMAGE_FILE_NAME, &path.start_image)?;
        self.write_file(DESTINATION_IMAGE_FILE_NAME, &path.end_image)?;
        self.write_file(MAP_DATA_FILE_NAME, &path.map.data)?;

        let manifest = serde_json::to_vec(&MapManifestRef {
            anchors: &path.map.anchors,
        })?;
        let staging = self.dir.join(format!("{}.tmp", MAP_FILE_NAME));
        std::fs::write(&staging, manifest)
            .with_context(|| format!("Anker-Liste nach {} schreiben", staging.display()))?;
        std::fs::rename(&staging, &map_path)
            .with_context(|| format!("Anker-Liste nach {} verschieben", map_path.display()))?;

        log::info!(
            "Pfad archiviert in {} ({} Anker, {} Bytes Kartendaten)",
            self.dir.display(),
            path.map.anchors.len(),
            path.map.data.len()
        );
        Ok(())
    }

    fn write_file(&self, name: &str, bytes: &[u8]) -> anyhow::Result<()> {
        let target = self.dir.join(name);
        std::fs::write(&target, bytes)
            .with_context(|| format!("{} schreiben", target.display()))
    }

    /// Lädt die Karte aus Anker-Liste und Kartendaten.
    pub fn load_map(&self) -> anyhow::Result<PersistedMap> {
        let bytes = std::fs::read(self.map_path())
            .with_context(|| format!("Anker-Liste {} lesen", self.map_path().display()))?;
        let manifest: MapManifest = serde_json::from_slice(&bytes)
            .with_context(|| format!("Anker-Liste {} dekodieren", self.map_path().display()))?;

        let data_path = self.dir.join(MAP_DATA_FILE_NAME);
        let data = std::fs::read(&data_path)
            .with_context(|| format!("Kartendaten {} lesen", data_path.display()))?;
        Ok(PersistedMap::new(data, manifest.anchors))
    }

    /// Lädt einen Pfad für eine Folge-Session.
    ///
    /// Der Start-Snapshot stammt bevorzugt aus der Karte (mit Pose);
    /// fehlt er dort, wird das Startbild mit Einheits-Pose verwendet.
    pub fn load(&self) -> anyhow::Result<LoadedPath> {
        let map = self.load_map()?;

        let start_snapshot = match map
            .snapshot_anchor()
            .and_then(|a| ReferenceSnapshot::from_anchor(SnapshotKind::Start, a))
        {
            Some(snapshot) => snapshot,
            None => {
                let image_path = self.dir.join(START_IMAGE_FILE_NAME);
                let image_data = std::fs::read(&image_path)
                    .with_context(|| format!("Startbild {} lesen", image_path.display()))?;
                log::warn!("Karte ohne Snapshot-Anker, verwende Startbild ohne Pose");
                let next_id = map.anchors.iter().map(|a| a.id.0).max().unwrap_or(0) + 1;
                ReferenceSnapshot {
                    kind: SnapshotKind::Start,
                    anchor_id: AnchorId(next_id),
                    image_data,
                    transform: Mat4::IDENTITY,
                }
            }
        };

        let destination_image = std::fs::read(self.dir.join(DESTINATION_IMAGE_FILE_NAME)).ok();

        log::info!(
            "Pfad geladen aus {}: {} Wegpunkt-Anker",
            self.dir.display(),
            map.waypoint_count()
        );

        Ok(LoadedPath {
            map,
            start_snapshot,
            destination_image,
        })
    }

    /// Kurzübersicht ohne Dekodieren der Bilder.
    pub fn summary(&self) -> anyhow::Result<ArchiveSummary> {
        let map = self.load_map()?;
        Ok(ArchiveSummary {
            waypoint_count: map.waypoint_count(),
            snapshot_count: map.count_kind(AnchorKind::Snapshot),
            mesh_count: map.count_kind(AnchorKind::Mesh),
            map_data_bytes: map.data.len(),
            has_destination_image: self.dir.join(DESTINATION_IMAGE_FILE_NAME).is_file(),
        })
    }
}

/// Persistenz-Delegate, der jeden erstellten Pfad in ein Archiv schreibt.
#[derive(Debug)]
pub struct ArchiveDelegate {
    archive: PathArchive,
    written: usize,
}

impl ArchiveDelegate {
    /// Erstellt einen Delegate für das Archiv.
    pub fn new(archive: PathArchive) -> Self {
        Self {
            archive,
            written: 0,
        }
    }

    /// Zugrundeliegendes Archiv.
    pub fn archive(&self) -> &PathArchive {
        &self.archive
    }

    /// Anzahl erfolgreich geschriebener Pfade.
    pub fn written(&self) -> usize {
        self.written
    }
}

impl PathDelegate for ArchiveDelegate {
    fn on_path_created(&mut self, path: CreatedPath) -> anyhow::Result<()> {
        self.archive.write(&path)?;
        self.written += 1;
        Ok(())
    }
}
