//! Handler für Referenz-Snapshots.

use crate::app::use_cases;
use crate::app::{Collaborators, SessionState};
use crate::core::SnapshotKind;

/// Nimmt einen Start- oder Ziel-Snapshot auf.
pub fn capture(
    state: &mut SessionState,
    collaborators: &mut Collaborators,
    kind: SnapshotKind,
) -> anyhow::Result<()> {
    use_cases::snapshots::capture_snapshot(state, collaborators, kind)?;
    Ok(())
}
