//! Typisierte Fehler der Pfad-Zustandsmaschine.
//!
//! Vorbedingungsverletzungen werden als `PathError` an den Aufrufer
//! gemeldet. Transiente Fehler (Raycast ohne Treffer, World-Map nicht
//! verfügbar) erscheinen hier bewusst nicht: sie enden als Statusmeldung.

use crate::core::SnapshotKind;
use thiserror::Error;

/// Vertragsverletzungen gegenüber der Pfad-Session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PathError {
    /// Operation ist nur im Aufzeichnungsmodus erlaubt
    #[error("operation requires an authoring session")]
    NotAuthoring,
    /// Operation ist nur im Folgemodus erlaubt
    #[error("operation requires a following session")]
    NotFollowing,
    /// Kamera-Collaborator konnte kein Bild liefern
    #[error("can't take {0} snapshot")]
    CaptureFailed(SnapshotKind),
    /// Ziel-Snapshot ohne platzierten Wegpunkt
    #[error("no waypoint placed yet")]
    NoWaypointPlaced,
    /// Speichern angefordert, obwohl das Tracking-Gate es nicht erlaubt
    #[error("saving is not permitted in the current tracking state")]
    SaveNotPermitted,
    /// Es läuft bereits eine World-Map-Anfrage
    #[error("a save is already in progress")]
    SaveInFlight,
    /// Beim Speichern fehlt ein Referenz-Snapshot
    #[error("missing {0} snapshot")]
    MissingSnapshot(SnapshotKind),
    /// Wiederherstellung nur einmal, während der Ladephase
    #[error("path can only be restored once while loading")]
    RestoreNotAllowed,
}
