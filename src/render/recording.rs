//! In-Memory-Szene, die den aktuellen Marker-/Segment-Bestand nachführt.

use super::{SceneCommand, SceneSink};
use crate::core::{Segment, WaypointId};
use glam::Vec3;
use std::collections::BTreeMap;

/// Dargestellter Wegpunkt-Marker
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerNode {
    /// Weltposition
    pub position: Vec3,
    /// Beschriftung
    pub label: Option<String>,
    /// Sichtbarkeit
    pub visible: bool,
    /// Angehängte Ziel-Markierung
    pub destination_label: Option<String>,
}

/// Führt den Szenenbestand und zählt angewendete Kommandos.
#[derive(Debug, Default, Clone)]
pub struct RecordingScene {
    markers: BTreeMap<WaypointId, MarkerNode>,
    segments: BTreeMap<WaypointId, Segment>,
    applied: usize,
}

impl RecordingScene {
    /// Erstellt eine leere Szene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Aktuelle Marker.
    pub fn markers(&self) -> &BTreeMap<WaypointId, MarkerNode> {
        &self.markers
    }

    /// Aktuelle Segmente, gekeyt nach dem späteren Wegpunkt.
    pub fn segments(&self) -> &BTreeMap<WaypointId, Segment> {
        &self.segments
    }

    /// Marker eines Wegpunkts.
    pub fn marker(&self, id: WaypointId) -> Option<&MarkerNode> {
        self.markers.get(&id)
    }

    /// Wegpunkt mit Ziel-Markierung.
    pub fn destination(&self) -> Option<WaypointId> {
        self.markers
            .iter()
            .find(|(_, m)| m.destination_label.is_some())
            .map(|(id, _)| *id)
    }

    /// Anzahl aller bisher angewendeten Kommandos.
    pub fn applied_count(&self) -> usize {
        self.applied
    }
}

impl SceneSink for RecordingScene {
    fn apply(&mut self, command: SceneCommand) {
        self.applied += 1;
        match command {
            SceneCommand::AddWaypointMarker {
                id,
                position,
                label,
                ..
            } => {
                self.markers.insert(
                    id,
                    MarkerNode {
                        position,
                        label,
                        visible: true,
                        destination_label: None,
                    },
                );
            }
            SceneCommand::RemoveWaypointMarker { id } => {
                self.markers.remove(&id);
            }
            SceneCommand::AddSegment { id, segment, .. } => {
                self.segments.insert(id, segment);
            }
            SceneCommand::RemoveSegment { id } => {
                self.segments.remove(&id);
            }
            SceneCommand::AttachDestinationMarker { id, label } => {
                if let Some(marker) = self.markers.get_mut(&id) {
                    marker.destination_label = Some(label);
                }
            }
            SceneCommand::DetachDestinationMarker { id } => {
                if let Some(marker) = self.markers.get_mut(&id) {
                    marker.destination_label = None;
                }
            }
            SceneCommand::SetWaypointVisible { id, visible } => {
                if let Some(marker) = self.markers.get_mut(&id) {
                    marker.visible = visible;
                }
            }
        }
    }
}
