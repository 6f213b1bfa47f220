//! Use-Case-Funktionen für das Speichern eines Pfads.

use crate::app::{Collaborators, PendingSave, SessionState};
use crate::core::{PersistedMap, SnapshotKind, TrackingError};
use crate::error::PathError;
use crate::persistence::{prepare_for_save, CreatedPath};

/// Fordert die aktuelle World-Map an, sofern das Gate Speichern erlaubt.
///
/// Es läuft höchstens eine Anfrage gleichzeitig.
pub fn request_world_map(
    state: &mut SessionState,
    collaborators: &mut Collaborators,
) -> Result<(), PathError> {
    if !state.is_authoring() {
        return Err(PathError::NotAuthoring);
    }
    if !state.status.save_enabled {
        return Err(PathError::SaveNotPermitted);
    }
    if state.save_in_flight() {
        return Err(PathError::SaveInFlight);
    }

    let request_id = state.allocate_request_id();
    state.pending_save = Some(PendingSave { request_id });
    collaborators.tracking.request_world_map(request_id);
    log::info!("World-Map angefordert (Anfrage {})", request_id);
    Ok(())
}

/// Verarbeitet die Antwort auf eine World-Map-Anfrage.
///
/// Antworten ohne passende offene Anfrage (z.B. nach einem Tracking-Reset)
/// werden verworfen. Fehler von Tracking oder Delegate werden als Hinweis
/// gemeldet, ohne Wiederholung.
pub fn complete_save(
    state: &mut SessionState,
    collaborators: &mut Collaborators,
    request_id: u64,
    result: Result<PersistedMap, TrackingError>,
) -> Result<(), PathError> {
    match state.pending_save {
        Some(pending) if pending.request_id == request_id => state.pending_save = None,
        _ => {
            log::info!("Veraltete World-Map-Antwort {} verworfen", request_id);
            return Ok(());
        }
    }

    let map = match result {
        Ok(map) => map,
        Err(error) => {
            log::warn!("World-Map nicht verfügbar: {}", error);
            state.ui.notice = Some(format!("Can't get current world map: {}", error));
            return Ok(());
        }
    };

    let start = state
        .snapshots
        .start
        .as_ref()
        .ok_or(PathError::MissingSnapshot(SnapshotKind::Start))?;
    let destination = state
        .snapshots
        .destination
        .as_ref()
        .ok_or(PathError::MissingSnapshot(SnapshotKind::Destination))?;

    let created = CreatedPath {
        map: prepare_for_save(map, start),
        start_image: start.image_data.clone(),
        end_image: destination.image_data.clone(),
    };
    if let Err(error) = collaborators.delegate.on_path_created(created) {
        log::error!("Pfad konnte nicht gespeichert werden: {:#}", error);
        state.ui.notice = Some(format!("Can't save map: {:#}", error));
        return Ok(());
    }
    state.saved_paths += 1;

    log::info!(
        "Pfad gespeichert: {} Wegpunkte, {:.2} m",
        state.waypoints.count(),
        state.waypoints.path_length()
    );
    Ok(())
}
