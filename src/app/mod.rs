//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod collaborators;
pub mod command_log;
pub mod controller;
pub mod dispatch;
pub mod events;
pub mod handlers;
mod intent_mapping;
/// Session State
///
/// Modus, Wegpunkte, Snapshots und Tracking-Zustand einer Pfad-Session.
pub mod state;
pub mod tracking_gate;
pub mod use_cases;

pub use collaborators::{Collaborators, SnapshotCapture, TrackingSession};
pub use command_log::CommandLog;
pub use controller::PathSessionController;
pub use dispatch::{IntentQueue, IntentSender};
pub use events::{CommandKind, SessionCommand, SessionIntent};
pub use state::{
    FollowPhase, PendingSave, RecoveryAction, RecoveryAlert, SessionMode, SessionState,
    SnapshotState, TrackingState, UiState,
};
pub use tracking_gate::GateInput;
