//! Use-Case-Funktionen für das Wiederherstellen eines geladenen Pfads.

use crate::app::{Collaborators, FollowPhase, SessionState};
use crate::core::{RunOptions, TrackingConfiguration};
use crate::error::PathError;
use crate::persistence::{prepare_for_restore, LoadedPath};

/// Bereitet die geladene Karte vor und startet das Tracking mit ihr als
/// Relokalisierungs-Grundlage neu.
///
/// Nur einmal, in einer Folge-Session vor dem ersten Frame (Phase `Loading`).
pub fn restore_path(
    state: &mut SessionState,
    collaborators: &mut Collaborators,
    path: LoadedPath,
) -> Result<(), PathError> {
    if state.is_authoring() {
        return Err(PathError::NotFollowing);
    }
    if !state.is_downloading() {
        return Err(PathError::RestoreNotAllowed);
    }

    let LoadedPath {
        map,
        start_snapshot,
        destination_image,
    } = path;

    let restored = prepare_for_restore(map, &start_snapshot);
    if let Some(max_id) = restored.map.anchors.iter().map(|a| a.id).max() {
        state.reserve_anchor_ids_above(max_id);
    }
    log::info!(
        "Pfad geladen: {} Wegpunkt-Anker, Zielbild {}",
        restored.map.waypoint_count(),
        if destination_image.is_some() {
            "vorhanden"
        } else {
            "fehlt"
        }
    );

    let configuration =
        TrackingConfiguration::with_initial_map(state.options.tracking.clone(), restored.map);
    collaborators.tracking.run(configuration, RunOptions::RESET);

    state.snapshots.restored_thumbnail = restored.display_image;
    state.snapshots.start = Some(start_snapshot);
    state.has_prior_map = true;
    state.tracking.active_anchor = None;
    state.tracking.relocalizing_map = true;
    state.set_follow_phase(FollowPhase::Relocalizing);
    Ok(())
}
