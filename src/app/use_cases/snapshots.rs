//! Use-Case-Funktionen für Start- und Ziel-Snapshots.

use crate::app::{Collaborators, SessionState};
use crate::core::{ReferenceSnapshot, SnapshotKind};
use crate::error::PathError;
use crate::shared::SceneCommand;

/// Nimmt einen Referenz-Snapshot auf und ersetzt einen vorhandenen gleicher Art.
///
/// Der Ziel-Snapshot braucht einen platzierten Wegpunkt; an ihm wird die
/// Ziel-Markierung angebracht.
pub fn capture_snapshot(
    state: &mut SessionState,
    collaborators: &mut Collaborators,
    kind: SnapshotKind,
) -> Result<(), PathError> {
    if !state.is_authoring() {
        return Err(PathError::NotAuthoring);
    }
    let top = state.waypoints.peek_top().map(|w| w.id);
    if kind == SnapshotKind::Destination && top.is_none() {
        return Err(PathError::NoWaypointPlaced);
    }

    let Some(captured) = collaborators.capture.capture_snapshot() else {
        log::warn!("Aufnahme des {}-Snapshots fehlgeschlagen", kind);
        return Err(PathError::CaptureFailed(kind));
    };
    let snapshot = ReferenceSnapshot::from_capture(kind, state.allocate_anchor_id(), captured);

    match kind {
        SnapshotKind::Start => state.snapshots.start = Some(snapshot),
        SnapshotKind::Destination => {
            if let Some(previous) = state.snapshots.destination_marker.take() {
                collaborators
                    .scene
                    .apply(SceneCommand::DetachDestinationMarker { id: previous });
            }
            if let Some(id) = top {
                collaborators.scene.apply(SceneCommand::AttachDestinationMarker {
                    id,
                    label: state.options.destination_label.clone(),
                });
                state.snapshots.destination_marker = Some(id);
            }
            state.snapshots.destination = Some(snapshot);
        }
    }

    state.snapshots.confirmation_until =
        Some(state.tracking.last_timestamp + state.options.snapshot_confirmation_secs);
    log::info!("{}-Snapshot aufgenommen", kind);
    Ok(())
}
