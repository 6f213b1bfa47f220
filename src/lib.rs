//! AR Path Recorder Library.
//! Pfad-Zustandsmaschine als Library exportiert für Host-Apps, Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod error;
pub mod persistence;
pub mod render;
pub mod shared;

pub use app::{
    Collaborators, FollowPhase, IntentQueue, IntentSender, PathSessionController, SessionCommand,
    SessionIntent, SessionMode, SessionState, SnapshotCapture, TrackingSession,
};
pub use core::{
    Anchor, AnchorId, AnchorKind, MappingStatus, PersistedMap, ReferenceSnapshot, Segment,
    SnapshotKind, TrackingFrame, TrackingQuality, TrackingStatus, Waypoint, WaypointId,
    WaypointStack,
};
pub use error::PathError;
pub use persistence::{ArchiveDelegate, CreatedPath, LoadedPath, PathArchive, PathDelegate};
pub use render::{NullScene, RecordingScene, SceneSink};
pub use shared::{GateDecision, SceneCommand, SessionOptions};
