//! Referenz-Snapshots für Start und Ziel eines Pfads.

use super::{Anchor, AnchorId};
use glam::Mat4;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Art des Referenz-Snapshots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SnapshotKind {
    /// Startpunkt des Pfads
    Start,
    /// Ziel des Pfads
    Destination,
}

impl fmt::Display for SnapshotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Start => "start",
            Self::Destination => "destination",
        })
    }
}

/// Vom Kamera-Collaborator aufgenommenes Bild samt Kamerapose.
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedImage {
    /// Kodiertes Bild (JPEG/PNG)
    pub image_data: Vec<u8>,
    /// Kameratransformation zum Aufnahmezeitpunkt
    pub camera_transform: Mat4,
}

/// Aufgenommenes Referenzbild mit Pose.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceSnapshot {
    /// Start oder Ziel
    pub kind: SnapshotKind,
    /// Anker-ID, unter der der Snapshot in eine Karte eingebettet wird
    pub anchor_id: AnchorId,
    /// Kodiertes Bild
    pub image_data: Vec<u8>,
    /// Kamerapose zum Aufnahmezeitpunkt
    pub transform: Mat4,
}

impl ReferenceSnapshot {
    /// Erstellt einen Snapshot aus einem aufgenommenen Bild.
    pub fn from_capture(kind: SnapshotKind, anchor_id: AnchorId, captured: CapturedImage) -> Self {
        Self {
            kind,
            anchor_id,
            image_data: captured.image_data,
            transform: captured.camera_transform,
        }
    }

    /// Übernimmt einen eingebetteten Snapshot-Anker. `None` für andere Anker-Arten.
    pub fn from_anchor(kind: SnapshotKind, anchor: &Anchor) -> Option<Self> {
        anchor.snapshot_image().map(|image| Self {
            kind,
            anchor_id: anchor.id,
            image_data: image.to_vec(),
            transform: anchor.transform,
        })
    }

    /// Snapshot-Anker zum Einbetten in eine World-Map.
    pub fn to_anchor(&self) -> Anchor {
        Anchor::snapshot(self.anchor_id, self.transform, self.image_data.clone())
    }
}
