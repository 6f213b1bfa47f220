//! Core-Domänentypen: Wegpunkte, Segmente, Anker, Snapshots, Tracking-Status.

pub mod anchor;
pub mod segment;
pub mod snapshot;
pub mod tracking;
pub mod waypoint;
/// Geordneter Wegpunkt-Stapel
///
/// Hält die Wegpunkte in Platzierungsreihenfolge und je Wegpunkt
/// das eingehende Verbindungssegment.
pub mod waypoint_stack;
pub mod world_map;

pub use anchor::{Anchor, AnchorId, AnchorKind, AnchorPayload, WAYPOINT_ANCHOR_NAME};
pub use segment::{Segment, DEGENERATE_LENGTH, SEGMENT_BASE_TILT};
pub use snapshot::{CapturedImage, ReferenceSnapshot, SnapshotKind};
pub use tracking::{
    LimitedReason, MappingStatus, RaycastAlignment, RaycastHit, RaycastQuery, RaycastTarget,
    RunOptions, TrackingConfiguration, TrackingError, TrackingFeatures, TrackingFrame,
    TrackingQuality, TrackingStatus,
};
pub use waypoint::{Waypoint, WaypointId};
pub use waypoint_stack::{PoppedWaypoint, WaypointStack};
pub use world_map::PersistedMap;
