use crate::core::{Anchor, PersistedMap, TrackingError, TrackingFrame};
use crate::persistence::LoadedPath;
use glam::Vec2;

/// Intents sind Eingaben aus UI, Tracking und Host ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum SessionIntent {
    /// Ansicht erscheint, Tracking soll laufen
    SessionStarted,
    /// Ansicht verschwindet, Tracking pausieren
    SessionPaused,
    /// Tipp auf den Bildschirm
    ScreenTapped { screen_point: Vec2 },
    /// Letzten Wegpunkt entfernen
    UndoRequested,
    /// Start-Snapshot aufnehmen
    StartSnapshotRequested,
    /// Ziel-Snapshot aufnehmen
    DestinationSnapshotRequested,
    /// Pfad speichern
    SaveRequested,
    /// Gespeicherter Pfad wurde geladen
    PathLoaded { path: LoadedPath },
    /// Neuer Tracking-Frame
    FrameUpdated { frame: TrackingFrame },
    /// Tracking meldet neue Anker
    AnchorsAdded { anchors: Vec<Anchor> },
    /// Antwort auf eine World-Map-Anfrage
    WorldMapResolved {
        request_id: u64,
        result: Result<PersistedMap, TrackingError>,
    },
    /// Session wurde unterbrochen
    SessionInterrupted,
    /// Unterbrechung beendet
    InterruptionEnded,
    /// Session ist mit Fehler abgebrochen
    SessionFailed { error: TrackingError },
    /// Nutzer bestätigt den Neustart im Fehler-Alarm
    RestartTrackingRequested,
}
