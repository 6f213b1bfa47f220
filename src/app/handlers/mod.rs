//! Feature-Handler für SessionCommand-Verarbeitung.
//!
//! Jeder Handler gruppiert die Command-Ausführung eines Feature-Bereichs.
//! Der Controller dispatcht an die passende Handler-Funktion.

pub mod persistence;
pub mod placement;
pub mod session;
pub mod snapshots;
