//! Mapping von Session-Intents auf mutierende Session-Commands.

use super::{SessionCommand, SessionIntent, SessionState};
use crate::core::SnapshotKind;

/// Übersetzt einen `SessionIntent` in eine Sequenz ausführbarer `SessionCommand`s.
pub fn map_intent_to_commands(state: &SessionState, intent: SessionIntent) -> Vec<SessionCommand> {
    match intent {
        SessionIntent::SessionStarted => vec![SessionCommand::StartTracking],
        SessionIntent::SessionPaused => vec![SessionCommand::PauseTracking],
        SessionIntent::ScreenTapped { screen_point } => {
            if !state.is_authoring() {
                log::debug!("Tipp im Folge-Modus ignoriert");
                return Vec::new();
            }
            vec![SessionCommand::PlaceWaypoint { screen_point }]
        }
        SessionIntent::UndoRequested => vec![SessionCommand::UndoWaypoint],
        SessionIntent::StartSnapshotRequested => vec![SessionCommand::CaptureSnapshot {
            kind: SnapshotKind::Start,
        }],
        SessionIntent::DestinationSnapshotRequested => vec![SessionCommand::CaptureSnapshot {
            kind: SnapshotKind::Destination,
        }],
        SessionIntent::SaveRequested => vec![SessionCommand::RequestWorldMap],
        SessionIntent::PathLoaded { path } => vec![
            SessionCommand::RestorePath { path },
            SessionCommand::EvaluateGate,
        ],
        SessionIntent::FrameUpdated { frame } => vec![
            SessionCommand::ApplyFrame { frame },
            SessionCommand::EvaluateGate,
        ],
        SessionIntent::AnchorsAdded { anchors } => {
            vec![SessionCommand::ReconcileAnchors { anchors }]
        }
        SessionIntent::WorldMapResolved { request_id, result } => {
            vec![SessionCommand::CompleteSave { request_id, result }]
        }
        SessionIntent::SessionInterrupted => vec![SessionCommand::ShowNotice {
            text: "Session was interrupted".to_string(),
        }],
        SessionIntent::InterruptionEnded => vec![SessionCommand::ShowNotice {
            text: "Session interruption ended".to_string(),
        }],
        SessionIntent::SessionFailed { error } => {
            vec![SessionCommand::ReportSessionFailure { error }]
        }
        SessionIntent::RestartTrackingRequested => vec![
            SessionCommand::ResetTracking,
            SessionCommand::EvaluateGate,
        ],
    }
}

#[cfg(test)]
mod tests;
