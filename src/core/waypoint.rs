//! Einzelner platzierter Wegpunkt.

use super::AnchorId;
use glam::Vec3;
use std::fmt;

/// Identität eines Wegpunkts = seine Stapeltiefe (Einfügereihenfolge).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WaypointId(pub usize);

impl fmt::Display for WaypointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Ein Knoten des aufgezeichneten Pfads
#[derive(Debug, Clone, PartialEq)]
pub struct Waypoint {
    /// Stapeltiefe
    pub id: WaypointId,
    /// Weltposition
    pub position: Vec3,
    /// Beschriftung (nur der erste Wegpunkt)
    pub label: Option<String>,
    /// Zugehöriger Tracking-Anker, falls registriert
    pub anchor_id: Option<AnchorId>,
}
