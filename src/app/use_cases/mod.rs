//! Use-Cases der Application-Layer-Orchestrierung.

pub mod placement;
pub mod restore;
pub mod save;
pub mod snapshots;
pub mod tracking;
