//! Persistierte World-Map des Tracking-Collaborators.

use super::{Anchor, AnchorKind};
use serde::{Deserialize, Serialize};

/// World-Map mit eingebetteter Anker-Menge.
///
/// Die Kartendaten selbst gehören dem Tracking-Collaborator und bleiben
/// hier ein opaker Blob. Der Kern bearbeitet nur die Anker.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PersistedMap {
    /// Opake Kartendaten
    pub data: Vec<u8>,
    /// Eingebettete Anker
    pub anchors: Vec<Anchor>,
}

impl PersistedMap {
    /// Erstellt eine Karte aus Rohdaten und Ankern.
    pub fn new(data: Vec<u8>, anchors: Vec<Anchor>) -> Self {
        Self { data, anchors }
    }

    /// Erster eingebetteter Snapshot-Anker.
    pub fn snapshot_anchor(&self) -> Option<&Anchor> {
        self.anchors
            .iter()
            .find(|a| a.kind() == AnchorKind::Snapshot)
    }

    /// Anzahl der Anker einer Art.
    pub fn count_kind(&self, kind: AnchorKind) -> usize {
        self.anchors.iter().filter(|a| a.kind() == kind).count()
    }

    /// Anzahl der Wegpunkt-Anker.
    pub fn waypoint_count(&self) -> usize {
        self.anchors.iter().filter(|a| a.is_waypoint()).count()
    }

    /// Entfernt alle Anker einer Art und gibt deren Anzahl zurück.
    pub fn remove_kind(&mut self, kind: AnchorKind) -> usize {
        let before = self.anchors.len();
        self.anchors.retain(|a| a.kind() != kind);
        before - self.anchors.len()
    }
}
