//! Geordneter, rückgängig machbarer Stapel der platzierten Wegpunkte.
//!
//! Wegpunkte liegen in einer Arena, indexiert nach Einfügereihenfolge.
//! Parallel dazu hält ein zweiter Vektor das eingehende Segment je
//! Wegpunkt (Index 0 hat keins). Undo kürzt beide Vektoren um eins.

use super::{AnchorId, Segment, Waypoint, WaypointId};
use glam::Vec3;
use std::collections::HashMap;

/// Ergebnis von `WaypointStack::pop`
#[derive(Debug, Clone, PartialEq)]
pub struct PoppedWaypoint {
    /// Entfernter Wegpunkt
    pub waypoint: Waypoint,
    /// Eingehendes Segment (fehlt beim ersten Wegpunkt)
    pub segment: Option<Segment>,
}

/// LIFO-Stapel aus Wegpunkten und ihren eingehenden Segmenten
#[derive(Debug, Clone, Default)]
pub struct WaypointStack {
    waypoints: Vec<Waypoint>,
    segments: Vec<Option<Segment>>,
    anchor_index: HashMap<AnchorId, WaypointId>,
    origin_label: Option<String>,
}

impl WaypointStack {
    /// Erstellt einen leeren Stapel ohne Start-Beschriftung.
    pub fn new() -> Self {
        Self::default()
    }

    /// Erstellt einen leeren Stapel, dessen erster Wegpunkt `label` trägt.
    pub fn with_origin_label(label: impl Into<String>) -> Self {
        Self {
            origin_label: Some(label.into()),
            ..Self::default()
        }
    }

    /// Legt einen Wegpunkt ohne Tracking-Anker ab.
    pub fn push(&mut self, position: Vec3) -> WaypointId {
        self.push_entry(position, None)
    }

    /// Legt einen Wegpunkt ab, der zu einem Tracking-Anker gehört.
    pub fn push_anchored(&mut self, position: Vec3, anchor_id: AnchorId) -> WaypointId {
        let id = self.push_entry(position, Some(anchor_id));
        self.anchor_index.insert(anchor_id, id);
        id
    }

    fn push_entry(&mut self, position: Vec3, anchor_id: Option<AnchorId>) -> WaypointId {
        let id = WaypointId(self.waypoints.len());

        let segment = self
            .waypoints
            .last()
            .map(|previous| Segment::between(previous.position, position));
        let label = if self.waypoints.is_empty() {
            self.origin_label.clone()
        } else {
            None
        };

        self.waypoints.push(Waypoint {
            id,
            position,
            label,
            anchor_id,
        });
        self.segments.push(segment);
        id
    }

    /// Entfernt den zuletzt abgelegten Wegpunkt samt eingehendem Segment.
    ///
    /// Auf einem leeren Stapel `None` (kein Fehler).
    pub fn pop(&mut self) -> Option<PoppedWaypoint> {
        let waypoint = self.waypoints.pop()?;
        let segment = self.segments.pop().flatten();
        if let Some(anchor_id) = waypoint.anchor_id {
            self.anchor_index.remove(&anchor_id);
        }
        Some(PoppedWaypoint { waypoint, segment })
    }

    /// Leert den Stapel und liefert die Einträge in Pop-Reihenfolge.
    pub fn drain(&mut self) -> Vec<PoppedWaypoint> {
        std::iter::from_fn(|| self.pop()).collect()
    }

    /// Oberster Wegpunkt.
    pub fn peek_top(&self) -> Option<&Waypoint> {
        self.waypoints.last()
    }

    /// Wegpunkt per ID.
    pub fn get(&self, id: WaypointId) -> Option<&Waypoint> {
        self.waypoints.get(id.0)
    }

    /// Eingehendes Segment eines Wegpunkts.
    pub fn incoming_segment(&self, id: WaypointId) -> Option<&Segment> {
        self.segments.get(id.0).and_then(Option::as_ref)
    }

    /// Anzahl der Wegpunkte.
    pub fn count(&self) -> usize {
        self.waypoints.len()
    }

    /// Gibt `true` zurück, wenn kein Wegpunkt liegt.
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Anzahl der Segmente (immer `max(0, count - 1)`).
    pub fn segment_count(&self) -> usize {
        self.segments.iter().flatten().count()
    }

    /// Alle Wegpunkte in Platzierungsreihenfolge.
    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    /// Alle Segmente, jeweils mit dem späteren Wegpunkt des Paares.
    pub fn segments(&self) -> impl Iterator<Item = (WaypointId, &Segment)> {
        self.segments
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.as_ref().map(|s| (WaypointId(i), s)))
    }

    /// Prüft, ob ein Tracking-Anker bereits einen Wegpunkt besitzt.
    pub fn contains_anchor(&self, anchor_id: AnchorId) -> bool {
        self.anchor_index.contains_key(&anchor_id)
    }

    /// Wegpunkt zu einem Tracking-Anker.
    pub fn find_by_anchor(&self, anchor_id: AnchorId) -> Option<WaypointId> {
        self.anchor_index.get(&anchor_id).copied()
    }

    /// Gesamtlänge des Pfads.
    pub fn path_length(&self) -> f32 {
        self.segments().map(|(_, s)| s.length).sum()
    }
}

#[cfg(test)]
mod tests;
