//! Szenen-Kommandos als expliziter Übergabevertrag zwischen Session und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie erzeugt und `render` sie konsumiert.

use crate::core::{Segment, WaypointId};
use glam::Vec3;

/// Änderung an der dargestellten Pfad-Geometrie, gekeyt nach Wegpunkt-ID.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneCommand {
    /// Punkt-Marker eines Wegpunkts hinzufügen
    AddWaypointMarker {
        id: WaypointId,
        position: Vec3,
        label: Option<String>,
        radius: f32,
    },
    /// Punkt-Marker (inkl. angehängter Ziel-Markierung) entfernen
    RemoveWaypointMarker { id: WaypointId },
    /// Eingehendes Segment eines Wegpunkts hinzufügen
    AddSegment {
        id: WaypointId,
        segment: Segment,
        cap_radius: f32,
    },
    /// Eingehendes Segment eines Wegpunkts entfernen
    RemoveSegment { id: WaypointId },
    /// Ziel-Markierung an einen Wegpunkt hängen
    AttachDestinationMarker { id: WaypointId, label: String },
    /// Ziel-Markierung von einem Wegpunkt lösen
    DetachDestinationMarker { id: WaypointId },
    /// Marker ein- oder ausblenden
    SetWaypointVisible { id: WaypointId, visible: bool },
}
