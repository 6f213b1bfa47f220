//! Handler für Speichern und Wiederherstellen.

use crate::app::use_cases;
use crate::app::{Collaborators, SessionState};
use crate::core::{PersistedMap, TrackingError};
use crate::persistence::LoadedPath;

/// Startet das Speichern über eine World-Map-Anfrage.
pub fn request_save(
    state: &mut SessionState,
    collaborators: &mut Collaborators,
) -> anyhow::Result<()> {
    use_cases::save::request_world_map(state, collaborators)?;
    Ok(())
}

/// Schließt das Speichern mit der World-Map-Antwort ab.
pub fn complete_save(
    state: &mut SessionState,
    collaborators: &mut Collaborators,
    request_id: u64,
    result: Result<PersistedMap, TrackingError>,
) -> anyhow::Result<()> {
    use_cases::save::complete_save(state, collaborators, request_id, result)?;
    Ok(())
}

/// Stellt einen geladenen Pfad wieder her.
pub fn restore(
    state: &mut SessionState,
    collaborators: &mut Collaborators,
    path: LoadedPath,
) -> anyhow::Result<()> {
    use_cases::restore::restore_path(state, collaborators, path)?;
    Ok(())
}
