//! Persistenz: Abgleich zwischen In-Memory-Pfad und persistierter World-Map.
//!
//! - `writer` — Snapshot-Anker vor dem Speichern einbetten
//! - `restore` — Snapshot-Anker nach dem Laden bereinigen, Vorschaubild extrahieren
//! - `archive` — Verzeichnisbasierte Ablage gespeicherter Pfade

mod archive;
mod restore;
mod writer;

pub use archive::{
    ArchiveDelegate, ArchiveSummary, PathArchive, DESTINATION_IMAGE_FILE_NAME,
    MAP_DATA_FILE_NAME, MAP_FILE_NAME, START_IMAGE_FILE_NAME,
};
pub use restore::{prepare_for_restore, RestoredMap, THUMBNAIL_MAX_EDGE};
pub use writer::prepare_for_save;

use crate::core::{PersistedMap, ReferenceSnapshot};

/// Ergebnis eines erfolgreichen Speicherns, übergeben an den Delegate.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatedPath {
    /// Karte mit genau einem eingebetteten Start-Snapshot-Anker
    pub map: PersistedMap,
    /// Kodiertes Startbild
    pub start_image: Vec<u8>,
    /// Kodiertes Zielbild
    pub end_image: Vec<u8>,
}

/// Gespeicherter Pfad, wie ihn eine Folge-Session zum Wiederherstellen erhält.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedPath {
    /// Persistierte Karte
    pub map: PersistedMap,
    /// Start-Snapshot für die Relokalisierung
    pub start_snapshot: ReferenceSnapshot,
    /// Zielbild, falls mitgeliefert
    pub destination_image: Option<Vec<u8>>,
}

/// Ausgehender Persistenz-Vertrag: wird pro vorbereitetem Pfad genau
/// einmal aufgerufen.
pub trait PathDelegate {
    /// Übergibt Karte, Start- und Zielbild. Ein Fehler gilt als nicht gespeichert.
    fn on_path_created(&mut self, path: CreatedPath) -> anyhow::Result<()>;
}

impl<D: PathDelegate + ?Sized> PathDelegate for Box<D> {
    fn on_path_created(&mut self, path: CreatedPath) -> anyhow::Result<()> {
        (**self).on_path_created(path)
    }
}
