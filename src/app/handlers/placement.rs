//! Handler für Platzieren und Entfernen von Wegpunkten.

use crate::app::use_cases;
use crate::app::{Collaborators, SessionState};
use crate::core::Anchor;
use glam::Vec2;

/// Platziert einen Wegpunkt am Bildschirmpunkt.
pub fn place(
    state: &mut SessionState,
    collaborators: &mut Collaborators,
    screen_point: Vec2,
) -> anyhow::Result<()> {
    use_cases::placement::place_waypoint(state, collaborators, screen_point)?;
    Ok(())
}

/// Gleicht vom Tracking gemeldete Anker mit dem Stapel ab.
pub fn reconcile(state: &mut SessionState, collaborators: &mut Collaborators, anchors: Vec<Anchor>) {
    use_cases::placement::reconcile_anchors(state, collaborators, &anchors);
}

/// Entfernt den obersten Wegpunkt.
pub fn undo(state: &mut SessionState, collaborators: &mut Collaborators) -> anyhow::Result<()> {
    use_cases::placement::undo_waypoint(state, collaborators)?;
    Ok(())
}
