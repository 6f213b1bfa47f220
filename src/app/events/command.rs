use crate::core::{Anchor, PersistedMap, SnapshotKind, TrackingError, TrackingFrame};
use crate::persistence::LoadedPath;
use glam::Vec2;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum SessionCommand {
    /// Tracking mit Standardkonfiguration starten
    StartTracking,
    /// Tracking pausieren
    PauseTracking,
    /// Wegpunkt per Raycast am Bildschirmpunkt platzieren
    PlaceWaypoint { screen_point: Vec2 },
    /// Vom Tracking gemeldete Anker abgleichen
    ReconcileAnchors { anchors: Vec<Anchor> },
    /// Obersten Wegpunkt entfernen
    UndoWaypoint,
    /// Referenz-Snapshot aufnehmen
    CaptureSnapshot { kind: SnapshotKind },
    /// World Map zum Speichern anfordern
    RequestWorldMap,
    /// World-Map-Antwort verarbeiten
    CompleteSave {
        request_id: u64,
        result: Result<PersistedMap, TrackingError>,
    },
    /// Geladenen Pfad wiederherstellen
    RestorePath { path: LoadedPath },
    /// Frame-Status übernehmen
    ApplyFrame { frame: TrackingFrame },
    /// Tracking-Gate neu auswerten
    EvaluateGate,
    /// Lebenszyklus-Hinweis anzeigen
    ShowNotice { text: String },
    /// Harten Session-Fehler melden
    ReportSessionFailure { error: TrackingError },
    /// Tracking zurücksetzen und neu starten
    ResetTracking,
}

/// Art eines Commands ohne Nutzdaten (für das Command-Log).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    StartTracking,
    PauseTracking,
    PlaceWaypoint,
    ReconcileAnchors,
    UndoWaypoint,
    CaptureSnapshot,
    RequestWorldMap,
    CompleteSave,
    RestorePath,
    ApplyFrame,
    EvaluateGate,
    ShowNotice,
    ReportSessionFailure,
    ResetTracking,
}

impl SessionCommand {
    /// Art des Commands.
    pub fn kind(&self) -> CommandKind {
        match self {
            Self::StartTracking => CommandKind::StartTracking,
            Self::PauseTracking => CommandKind::PauseTracking,
            Self::PlaceWaypoint { .. } => CommandKind::PlaceWaypoint,
            Self::ReconcileAnchors { .. } => CommandKind::ReconcileAnchors,
            Self::UndoWaypoint => CommandKind::UndoWaypoint,
            Self::CaptureSnapshot { .. } => CommandKind::CaptureSnapshot,
            Self::RequestWorldMap => CommandKind::RequestWorldMap,
            Self::CompleteSave { .. } => CommandKind::CompleteSave,
            Self::RestorePath { .. } => CommandKind::RestorePath,
            Self::ApplyFrame { .. } => CommandKind::ApplyFrame,
            Self::EvaluateGate => CommandKind::EvaluateGate,
            Self::ShowNotice { .. } => CommandKind::ShowNotice,
            Self::ReportSessionFailure { .. } => CommandKind::ReportSessionFailure,
            Self::ResetTracking => CommandKind::ResetTracking,
        }
    }

    /// Läuft mit jedem Frame und wird nicht geloggt.
    pub fn is_per_frame(&self) -> bool {
        matches!(self, Self::ApplyFrame { .. } | Self::EvaluateGate)
    }
}
