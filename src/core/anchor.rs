//! Anker des Tracking-Collaborators als getaggte Varianten.

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// Name, unter dem Wegpunkt-Anker beim Tracking-Collaborator registriert werden.
pub const WAYPOINT_ANCHOR_NAME: &str = "waypoint";

/// Eindeutige Anker-ID innerhalb einer Session bzw. einer World-Map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AnchorId(pub u64);

/// Art eines Ankers (Filterkriterium statt Laufzeit-Typprüfung).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnchorKind {
    /// Benannter Anker, z.B. ein Wegpunkt
    Generic,
    /// Referenz-Snapshot mit eingebettetem Bild
    Snapshot,
    /// Rekonstruiertes Umgebungs-Mesh
    Mesh,
}

/// Nutzdaten je Anker-Art.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AnchorPayload {
    /// Benannter Anker
    Generic { name: String },
    /// Snapshot-Anker mit kodiertem Bild (JPEG/PNG)
    Snapshot { image_data: Vec<u8> },
    /// Mesh-Anker (Geometrie bleibt beim Collaborator)
    Mesh,
}

/// Ein vom Tracking-Collaborator verfolgter Anker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Anchor {
    /// Anker-ID
    pub id: AnchorId,
    /// Welt-Transformation
    pub transform: Mat4,
    /// Art-spezifische Nutzdaten
    pub payload: AnchorPayload,
}

impl Anchor {
    /// Erstellt einen Wegpunkt-Anker.
    pub fn waypoint(id: AnchorId, transform: Mat4) -> Self {
        Self {
            id,
            transform,
            payload: AnchorPayload::Generic {
                name: WAYPOINT_ANCHOR_NAME.to_string(),
            },
        }
    }

    /// Erstellt einen Snapshot-Anker mit eingebettetem Bild.
    pub fn snapshot(id: AnchorId, transform: Mat4, image_data: Vec<u8>) -> Self {
        Self {
            id,
            transform,
            payload: AnchorPayload::Snapshot { image_data },
        }
    }

    /// Erstellt einen Mesh-Anker.
    pub fn mesh(id: AnchorId, transform: Mat4) -> Self {
        Self {
            id,
            transform,
            payload: AnchorPayload::Mesh,
        }
    }

    /// Art des Ankers.
    pub fn kind(&self) -> AnchorKind {
        match self.payload {
            AnchorPayload::Generic { .. } => AnchorKind::Generic,
            AnchorPayload::Snapshot { .. } => AnchorKind::Snapshot,
            AnchorPayload::Mesh => AnchorKind::Mesh,
        }
    }

    /// Weltposition (Translationsanteil der Transformation).
    pub fn position(&self) -> Vec3 {
        self.transform.w_axis.truncate()
    }

    /// Prüft, ob der Anker einen Wegpunkt markiert.
    pub fn is_waypoint(&self) -> bool {
        matches!(&self.payload, AnchorPayload::Generic { name } if name == WAYPOINT_ANCHOR_NAME)
    }

    /// Eingebettetes Snapshot-Bild, falls vorhanden.
    pub fn snapshot_image(&self) -> Option<&[u8]> {
        match &self.payload {
            AnchorPayload::Snapshot { image_data } => Some(image_data),
            _ => None,
        }
    }
}
