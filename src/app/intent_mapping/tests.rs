use crate::app::{SessionCommand, SessionIntent, SessionState};
use crate::core::{
    MappingStatus, SnapshotKind, TrackingError, TrackingFrame, TrackingQuality, TrackingStatus,
};
use crate::shared::SessionOptions;
use glam::{Vec2, Vec3};

use super::map_intent_to_commands;

fn frame() -> TrackingFrame {
    TrackingFrame {
        timestamp: 1.0,
        status: TrackingStatus::new(TrackingQuality::Normal, MappingStatus::Mapped),
        camera_position: Vec3::ZERO,
        anchors: Vec::new(),
    }
}

#[test]
fn screen_tap_while_authoring_maps_to_place_waypoint() {
    let state = SessionState::authoring(SessionOptions::default());

    let commands = map_intent_to_commands(
        &state,
        SessionIntent::ScreenTapped {
            screen_point: Vec2::new(120.0, 300.0),
        },
    );

    assert_eq!(commands.len(), 1);
    assert!(matches!(
        commands[0],
        SessionCommand::PlaceWaypoint { screen_point } if screen_point == Vec2::new(120.0, 300.0)
    ));
}

#[test]
fn screen_tap_while_following_is_dropped() {
    let state = SessionState::following(SessionOptions::default());

    let commands = map_intent_to_commands(
        &state,
        SessionIntent::ScreenTapped {
            screen_point: Vec2::ZERO,
        },
    );

    assert!(commands.is_empty());
}

#[test]
fn frame_update_maps_to_apply_and_evaluate_in_order() {
    let state = SessionState::authoring(SessionOptions::default());

    let commands = map_intent_to_commands(&state, SessionIntent::FrameUpdated { frame: frame() });

    assert_eq!(commands.len(), 2);
    assert!(matches!(commands[0], SessionCommand::ApplyFrame { .. }));
    assert!(matches!(commands[1], SessionCommand::EvaluateGate));
}

#[test]
fn destination_snapshot_maps_to_capture_with_kind() {
    let state = SessionState::authoring(SessionOptions::default());

    let commands = map_intent_to_commands(&state, SessionIntent::DestinationSnapshotRequested);

    assert!(matches!(
        commands[0],
        SessionCommand::CaptureSnapshot {
            kind: SnapshotKind::Destination
        }
    ));
}

#[test]
fn lifecycle_intents_map_to_notices() {
    let state = SessionState::authoring(SessionOptions::default());

    let interrupted = map_intent_to_commands(&state, SessionIntent::SessionInterrupted);
    let ended = map_intent_to_commands(&state, SessionIntent::InterruptionEnded);

    assert!(matches!(
        &interrupted[0],
        SessionCommand::ShowNotice { text } if text == "Session was interrupted"
    ));
    assert!(matches!(
        &ended[0],
        SessionCommand::ShowNotice { text } if text == "Session interruption ended"
    ));
}

#[test]
fn session_failure_and_restart_map_to_recovery_commands() {
    let state = SessionState::authoring(SessionOptions::default());

    let failed = map_intent_to_commands(
        &state,
        SessionIntent::SessionFailed {
            error: TrackingError::new("Camera access denied"),
        },
    );
    let restart = map_intent_to_commands(&state, SessionIntent::RestartTrackingRequested);

    assert!(matches!(failed[0], SessionCommand::ReportSessionFailure { .. }));
    assert_eq!(restart.len(), 2);
    assert!(matches!(restart[0], SessionCommand::ResetTracking));
    assert!(matches!(restart[1], SessionCommand::EvaluateGate));
}
