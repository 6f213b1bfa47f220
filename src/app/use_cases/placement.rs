//! Use-Case-Funktionen für Platzieren, Abgleichen und Entfernen von Wegpunkten.

use crate::app::{Collaborators, SessionState};
use crate::core::{Anchor, AnchorId, PoppedWaypoint, RaycastQuery, WaypointId};
use crate::error::PathError;
use crate::shared::SceneCommand;
use glam::{Vec2, Vec3};

/// Platziert einen Wegpunkt am ersten Raycast-Treffer unter `screen_point`.
///
/// Nur beim Aufzeichnen. Eine Aufzeichnungs-Session relokalisiert nie gegen
/// eine geladene Karte, daher gibt es hier keine Relokalisierungs-Sperre.
/// Kein Treffer: stiller No-op.
pub fn place_waypoint(
    state: &mut SessionState,
    collaborators: &mut Collaborators,
    screen_point: Vec2,
) -> Result<(), PathError> {
    if !state.is_authoring() {
        return Err(PathError::NotAuthoring);
    }

    let query = RaycastQuery::horizontal_plane(screen_point);
    let Some(hit) = collaborators.tracking.raycast(&query).into_iter().next() else {
        log::debug!("Kein Raycast-Treffer bei {:?}", screen_point);
        return Ok(());
    };

    let anchor = Anchor::waypoint(state.allocate_anchor_id(), hit.world_transform);
    let anchor_id = anchor.id;
    let id = state.waypoints.push_anchored(anchor.position(), anchor_id);
    state.tracking.active_anchor = Some(anchor_id);
    collaborators.tracking.add_anchor(anchor);
    show_waypoint(state, collaborators, id);

    log::info!(
        "Wegpunkt {} platziert ({} gesamt)",
        id,
        state.waypoints.count()
    );
    Ok(())
}

/// Übernimmt vom Tracking gemeldete Wegpunkt-Anker, die noch nicht im Stapel liegen.
///
/// So baut eine Folge-Session die Marker einer geladenen Karte auf. Die
/// Reihenfolge folgt den Anker-IDs, nicht der Meldereihenfolge. Meldet das
/// Tracking eine ID unterhalb des obersten Ankers nach, wird der Stapel neu
/// aufgebaut. Beim Aufzeichnen legt `place_waypoint` selbst ab, Meldungen
/// werden dort ignoriert.
pub fn reconcile_anchors(
    state: &mut SessionState,
    collaborators: &mut Collaborators,
    anchors: &[Anchor],
) {
    if state.is_authoring() {
        log::debug!(
            "Anker-Meldung beim Aufzeichnen ignoriert ({} Anker)",
            anchors.len()
        );
        return;
    }

    let mut fresh: Vec<(AnchorId, Vec3)> = Vec::new();
    for anchor in anchors.iter().filter(|a| a.is_waypoint()) {
        state.reserve_anchor_ids_above(anchor.id);
        let known = state.waypoints.contains_anchor(anchor.id)
            || fresh.iter().any(|(id, _)| *id == anchor.id);
        if !known {
            fresh.push((anchor.id, anchor.position()));
        }
    }
    if fresh.is_empty() {
        return;
    }
    fresh.sort_by_key(|(id, _)| *id);

    let added = fresh.len();
    if top_anchor(state).is_some_and(|top| fresh[0].0 < top) {
        log::info!(
            "Nachgemeldeter Anker {:?}, Pfad wird neu aufgebaut",
            fresh[0].0
        );
        for popped in state.waypoints.drain() {
            hide_waypoint(state, collaborators, &popped);
            if let Some(anchor_id) = popped.waypoint.anchor_id {
                fresh.push((anchor_id, popped.waypoint.position));
            }
        }
        fresh.sort_by_key(|(id, _)| *id);
    }

    for (anchor_id, position) in fresh {
        let id = state.waypoints.push_anchored(position, anchor_id);
        show_waypoint(state, collaborators, id);
    }
    state.tracking.active_anchor = top_anchor(state);

    log::info!(
        "{} Wegpunkt-Anker übernommen ({} gesamt)",
        added,
        state.waypoints.count()
    );
}

/// Entfernt den obersten Wegpunkt samt Segment, Marker und Tracking-Anker.
///
/// Auf leerem Stapel ein stiller No-op.
pub fn undo_waypoint(
    state: &mut SessionState,
    collaborators: &mut Collaborators,
) -> Result<(), PathError> {
    if !state.is_authoring() {
        return Err(PathError::NotAuthoring);
    }
    let Some(popped) = state.waypoints.pop() else {
        log::debug!("Undo auf leerem Stapel ignoriert");
        return Ok(());
    };

    let id = popped.waypoint.id;
    hide_waypoint(state, collaborators, &popped);

    if let Some(anchor_id) = popped.waypoint.anchor_id {
        collaborators.tracking.remove_anchor(anchor_id);
    }
    state.tracking.active_anchor = top_anchor(state);

    log::info!(
        "Wegpunkt {} entfernt ({} verbleibend)",
        id,
        state.waypoints.count()
    );
    Ok(())
}

fn top_anchor(state: &SessionState) -> Option<AnchorId> {
    state.waypoints.peek_top().and_then(|w| w.anchor_id)
}

/// Entfernt Segment, Ziel-Markierung und Marker eines entnommenen Wegpunkts aus der Szene.
fn hide_waypoint(
    state: &mut SessionState,
    collaborators: &mut Collaborators,
    popped: &PoppedWaypoint,
) {
    let id = popped.waypoint.id;
    if popped.segment.is_some() {
        collaborators.scene.apply(SceneCommand::RemoveSegment { id });
    }
    if state.snapshots.destination_marker == Some(id) {
        collaborators
            .scene
            .apply(SceneCommand::DetachDestinationMarker { id });
        state.snapshots.destination_marker = None;
    }
    collaborators
        .scene
        .apply(SceneCommand::RemoveWaypointMarker { id });
    state.tracking.hidden_waypoints.remove(&id);
}

/// Schickt Marker und eingehendes Segment eines Wegpunkts an die Szene.
fn show_waypoint(state: &SessionState, collaborators: &mut Collaborators, id: WaypointId) {
    let Some(waypoint) = state.waypoints.get(id) else {
        return;
    };
    collaborators.scene.apply(SceneCommand::AddWaypointMarker {
        id,
        position: waypoint.position,
        label: waypoint.label.clone(),
        radius: state.options.waypoint_marker_radius,
    });
    if let Some(segment) = state.waypoints.incoming_segment(id) {
        collaborators.scene.apply(SceneCommand::AddSegment {
            id,
            segment: *segment,
            cap_radius: state.options.segment_cap_radius,
        });
    }
}
