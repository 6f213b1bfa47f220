//! Use-Case-Funktionen für Tracking-Lebenszyklus und Frame-Verarbeitung.

use crate::app::tracking_gate;
use crate::app::{Collaborators, FollowPhase, RecoveryAction, RecoveryAlert, SessionState};
use crate::core::{RunOptions, TrackingConfiguration, TrackingError, TrackingFrame};
use crate::persistence::PathArchive;
use crate::shared::SceneCommand;

/// Titel des Alarms nach einem Session-Fehler
pub const SESSION_FAILED_TITLE: &str = "The AR session failed.";

/// Startet das Tracking mit der Standardkonfiguration.
pub fn start_tracking(state: &mut SessionState, collaborators: &mut Collaborators) {
    if state.is_authoring() {
        state.has_prior_map = state
            .options
            .archive_dir
            .as_ref()
            .is_some_and(|dir| PathArchive::new(dir).has_map_data());
    }
    collaborators
        .tracking
        .run(default_configuration(state), RunOptions::default());
    log::info!("Tracking gestartet ({:?})", state.mode());
}

/// Pausiert das Tracking.
pub fn pause_tracking(collaborators: &mut Collaborators) {
    collaborators.tracking.pause();
    log::info!("Tracking pausiert");
}

/// Setzt das Tracking auf die Standardkonfiguration zurück.
///
/// Der Wegpunkt-Stapel bleibt erhalten; eine offene Speicher-Anfrage wird
/// verworfen. Mehrfaches Ausführen ändert nichts weiter.
pub fn reset_tracking(state: &mut SessionState, collaborators: &mut Collaborators) {
    collaborators
        .tracking
        .run(default_configuration(state), RunOptions::RESET);

    state.tracking.active_anchor = None;
    state.tracking.active_anchor_tracked = false;
    state.tracking.relocalizing_map = false;
    if let Some(pending) = state.pending_save.take() {
        log::info!("Offene World-Map-Anfrage {} verworfen", pending.request_id);
    }
    state.ui.recovery = None;
    state.ui.notice = None;
    if state.is_relocalizing() {
        state.set_follow_phase(FollowPhase::Guiding);
    }
    log::info!("Tracking zurückgesetzt");
}

/// Übernimmt Status, Anker und Kameraposition eines Frames.
pub fn apply_frame(
    state: &mut SessionState,
    collaborators: &mut Collaborators,
    frame: &TrackingFrame,
) {
    state.tracking.latest = Some(frame.status);
    state.tracking.last_timestamp = frame.timestamp;
    state.tracking.waypoint_anchor_tracked = frame.anchors.iter().any(|a| a.is_waypoint());
    state.tracking.active_anchor_tracked = state
        .tracking
        .active_anchor
        .is_some_and(|id| frame.anchors.iter().any(|a| a.id == id));

    if state.is_relocalizing() && frame.status.quality.is_normal() {
        state.set_follow_phase(FollowPhase::Guiding);
    }
    if state.ui.recovery.is_none() {
        state.ui.notice = None;
    }
    if state
        .snapshots
        .confirmation_until
        .is_some_and(|until| frame.timestamp >= until)
    {
        state.snapshots.confirmation_until = None;
    }

    update_visibility(state, collaborators, frame);
}

/// Blendet Marker außerhalb der Sichtweite aus; nur Änderungen gehen an die Szene.
fn update_visibility(
    state: &mut SessionState,
    collaborators: &mut Collaborators,
    frame: &TrackingFrame,
) {
    let max_distance = state.options.marker_visibility_distance;
    for waypoint in state.waypoints.waypoints() {
        let visible = waypoint.position.distance(frame.camera_position) < max_distance;
        let changed = if visible {
            state.tracking.hidden_waypoints.remove(&waypoint.id)
        } else {
            state.tracking.hidden_waypoints.insert(waypoint.id)
        };
        if changed {
            collaborators.scene.apply(SceneCommand::SetWaypointVisible {
                id: waypoint.id,
                visible,
            });
        }
    }
}

/// Wertet das Tracking-Gate für den letzten Frame aus.
pub fn evaluate_gate(state: &mut SessionState) {
    let Some(input) = state.gate_input() else {
        return;
    };
    let decision = tracking_gate::evaluate(&input);
    if decision != state.status {
        log::debug!(
            "Gate: \"{}\" (Speichern {})",
            decision.message,
            decision.save_enabled
        );
        state.status = decision;
    }
}

/// Zeigt einen Lebenszyklus-Hinweis an.
pub fn show_notice(state: &mut SessionState, text: String) {
    log::info!("{}", text);
    state.ui.notice = Some(text);
}

/// Meldet einen harten Session-Fehler und bietet den Tracking-Neustart an.
pub fn report_session_failure(state: &mut SessionState, error: &TrackingError) {
    log::error!("Session fehlgeschlagen: {}", error);
    state.ui.notice = Some(format!("Session failed: {}", error));
    state.ui.recovery = Some(RecoveryAlert {
        title: SESSION_FAILED_TITLE,
        message: error.alert_message(),
        action: RecoveryAction::RestartTracking,
    });
}

fn default_configuration(state: &SessionState) -> TrackingConfiguration {
    TrackingConfiguration::new(state.options.tracking.clone())
}
