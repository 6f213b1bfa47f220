//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app`, `render` und `persistence` geteilt
//! werden, um direkte Abhängigkeiten zu vermeiden.

pub mod options;
mod scene;
mod session_status;

pub use options::SessionOptions;
pub use options::{MARKER_VISIBILITY_DISTANCE, SNAPSHOT_CONFIRMATION_SECS};
pub use scene::SceneCommand;
pub use session_status::GateDecision;
