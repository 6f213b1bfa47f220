//! Vorbereitung einer geladenen World-Map zur Relokalisierung.

use crate::core::{Anchor, AnchorKind, PersistedMap, ReferenceSnapshot};
use image::RgbaImage;

/// Maximale Kantenlänge des Relokalisierungs-Vorschaubilds in Pixeln.
pub const THUMBNAIL_MAX_EDGE: u32 = 320;

/// Bereinigte Karte plus Vorschaubild für die UI.
#[derive(Debug, Clone)]
pub struct RestoredMap {
    /// Karte mit genau einem (aktuellen) Snapshot-Anker
    pub map: PersistedMap,
    /// Dekodiertes Snapshot-Bild aus der geladenen Karte
    pub display_image: Option<RgbaImage>,
}

/// Extrahiert das eingebettete Snapshot-Bild, entfernt **alle**
/// Snapshot-Anker und hängt den aktuellen Start-Snapshot wieder an.
pub fn prepare_for_restore(mut map: PersistedMap, start: &ReferenceSnapshot) -> RestoredMap {
    let display_image = match map.snapshot_anchor().and_then(Anchor::snapshot_image) {
        Some(data) => decode_thumbnail(data),
        None => {
            log::info!("Kein Snapshot-Bild in der World-Map");
            None
        }
    };

    let removed = map.remove_kind(AnchorKind::Snapshot);
    map.anchors.push(start.to_anchor());

    log::info!(
        "World-Map für Relokalisierung vorbereitet: {} Snapshot-Anker ersetzt, {} Wegpunkt-Anker",
        removed,
        map.waypoint_count()
    );

    RestoredMap { map, display_image }
}

fn decode_thumbnail(data: &[u8]) -> Option<RgbaImage> {
    match image::load_from_memory(data) {
        Ok(image) if image.width().max(image.height()) > THUMBNAIL_MAX_EDGE => Some(
            image
                .thumbnail(THUMBNAIL_MAX_EDGE, THUMBNAIL_MAX_EDGE)
                .to_rgba8(),
        ),
        Ok(image) => Some(image.to_rgba8()),
        Err(e) => {
            log::warn!("Snapshot-Bild in der World-Map nicht lesbar: {}", e);
            None
        }
    }
}
