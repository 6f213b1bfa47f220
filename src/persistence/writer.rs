//! Vorbereitung einer World-Map zum Speichern.

use crate::core::{AnchorKind, PersistedMap, ReferenceSnapshot};

/// Bettet den Start-Snapshot als einzigen Snapshot-Anker in die Karte ein.
///
/// Veraltete Snapshot-Anker werden vorher entfernt. Der Ziel-Snapshot
/// wird nie eingebettet, er reist getrennt zum Delegate.
pub fn prepare_for_save(mut map: PersistedMap, start: &ReferenceSnapshot) -> PersistedMap {
    let stale = map.remove_kind(AnchorKind::Snapshot);
    if stale > 0 {
        log::debug!("{} veraltete Snapshot-Anker vor dem Speichern entfernt", stale);
    }
    map.anchors.push(start.to_anchor());

    log::info!(
        "World-Map vorbereitet: {} Wegpunkt-Anker, {} Anker gesamt",
        map.waypoint_count(),
        map.anchors.len()
    );
    map
}
