//! Session State — zentrale Datenhaltung einer Pfad-Session.

use super::tracking_gate::GateInput;
use super::CommandLog;
use crate::core::{AnchorId, ReferenceSnapshot, TrackingStatus, WaypointId, WaypointStack};
use crate::shared::{GateDecision, SessionOptions};
use image::RgbaImage;
use std::collections::HashSet;

/// Unterphase einer Folge-Session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowPhase {
    /// Pfaddaten werden noch geladen
    Loading,
    /// Karte ist gesetzt, Tracking relokalisiert
    Relocalizing,
    /// Nutzer wird zum Ziel geführt
    Guiding,
}

/// Modus einer Session, für ihre gesamte Lebensdauer fest
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionMode {
    /// Wegpunkte setzen und Pfad aufbauen
    Authoring,
    /// Geladenem Pfad folgen
    Following(FollowPhase),
}

/// Referenz-Snapshots und ihre Darstellung
#[derive(Debug, Clone, Default)]
pub struct SnapshotState {
    /// Start-Snapshot (genau einer aktiv)
    pub start: Option<ReferenceSnapshot>,
    /// Ziel-Snapshot (höchstens einer aktiv)
    pub destination: Option<ReferenceSnapshot>,
    /// Wegpunkt, an dem die Ziel-Markierung hängt
    pub destination_marker: Option<WaypointId>,
    /// Bestätigung sichtbar bis zu diesem Frame-Zeitstempel
    pub confirmation_until: Option<f64>,
    /// Vorschaubild aus der geladenen Karte
    pub restored_thumbnail: Option<RgbaImage>,
}

/// Zuletzt gemeldeter Tracking-Zustand
#[derive(Debug, Clone, Default)]
pub struct TrackingState {
    /// Status des letzten Frames
    pub latest: Option<TrackingStatus>,
    /// Zeitstempel des letzten Frames
    pub last_timestamp: f64,
    /// Zuletzt platzierter Wegpunkt-Anker
    pub active_anchor: Option<AnchorId>,
    /// Letzter Frame enthielt mindestens einen Wegpunkt-Anker
    pub waypoint_anchor_tracked: bool,
    /// Letzter Frame enthielt den aktiven Anker
    pub active_anchor_tracked: bool,
    /// Wegen Entfernung ausgeblendete Marker
    pub hidden_waypoints: HashSet<WaypointId>,
    /// Geladene Karte ist Relokalisierungs-Referenz, bis das Tracking zurückgesetzt wird
    pub relocalizing_map: bool,
}

/// Einzige Wiederherstellungsaktion nach einem Session-Fehler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoveryAction {
    /// Tracking mit Standardkonfiguration neu starten
    RestartTracking,
}

/// Alarm nach hartem Session-Fehler
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecoveryAlert {
    /// Alarmtitel
    pub title: &'static str,
    /// Beschreibung, Ursache und Vorschlag
    pub message: String,
    /// Angebotene Aktion
    pub action: RecoveryAction,
}

/// UI-bezogener Zustand außerhalb der Gate-Entscheidung
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Lebenszyklus- oder Fehlermeldung, überschreibt die Gate-Meldung
    pub notice: Option<String>,
    /// Offener Wiederherstellungs-Alarm
    pub recovery: Option<RecoveryAlert>,
}

/// Laufende World-Map-Anfrage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingSave {
    /// ID der Anfrage beim Tracking-Collaborator
    pub request_id: u64,
}

/// Gesamter Zustand einer Pfad-Session
pub struct SessionState {
    mode: SessionMode,
    /// Platzierte Wegpunkte und Segmente
    pub waypoints: WaypointStack,
    /// Referenz-Snapshots
    pub snapshots: SnapshotState,
    /// Tracking-Zustand
    pub tracking: TrackingState,
    /// UI-Meldungen
    pub ui: UiState,
    /// Letzte Gate-Entscheidung
    pub status: GateDecision,
    /// Laufende Speicher-Anfrage (höchstens eine)
    pub pending_save: Option<PendingSave>,
    /// Anzahl erfolgreich gespeicherter Pfade
    pub saved_paths: usize,
    /// Frühere Kartendaten vorhanden
    pub has_prior_map: bool,
    /// Laufzeit-Optionen
    pub options: SessionOptions,
    /// Log ausgeführter Commands
    pub command_log: CommandLog,
    next_anchor_id: u64,
    next_request_id: u64,
}

impl SessionState {
    /// Erstellt eine Aufzeichnungs-Session.
    pub fn authoring(options: SessionOptions) -> Self {
        Self::with_mode(SessionMode::Authoring, options)
    }

    /// Erstellt eine Folge-Session in der Ladephase.
    pub fn following(options: SessionOptions) -> Self {
        Self::with_mode(SessionMode::Following(FollowPhase::Loading), options)
    }

    fn with_mode(mode: SessionMode, options: SessionOptions) -> Self {
        Self {
            mode,
            waypoints: WaypointStack::with_origin_label(options.origin_label.clone()),
            snapshots: SnapshotState::default(),
            tracking: TrackingState::default(),
            ui: UiState::default(),
            status: GateDecision::default(),
            pending_save: None,
            saved_paths: 0,
            has_prior_map: false,
            options,
            command_log: CommandLog::new(),
            next_anchor_id: 1,
            next_request_id: 1,
        }
    }

    /// Aktueller Modus.
    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    /// Gibt `true` zurück für eine Aufzeichnungs-Session.
    pub fn is_authoring(&self) -> bool {
        self.mode == SessionMode::Authoring
    }

    /// Unterphase einer Folge-Session.
    pub fn follow_phase(&self) -> Option<FollowPhase> {
        match self.mode {
            SessionMode::Authoring => None,
            SessionMode::Following(phase) => Some(phase),
        }
    }

    /// Wechselt die Unterphase. Der Modus selbst bleibt unveränderlich.
    pub(crate) fn set_follow_phase(&mut self, phase: FollowPhase) {
        if let SessionMode::Following(current) = self.mode {
            if current != phase {
                log::info!("Folge-Phase: {:?} -> {:?}", current, phase);
                self.mode = SessionMode::Following(phase);
            }
        }
    }

    /// Relokalisierung gegen eine geladene Karte läuft.
    pub fn is_relocalizing(&self) -> bool {
        self.follow_phase() == Some(FollowPhase::Relocalizing)
    }

    /// Pfaddaten werden noch geladen.
    pub fn is_downloading(&self) -> bool {
        self.follow_phase() == Some(FollowPhase::Loading)
    }

    /// Es läuft eine World-Map-Anfrage.
    pub fn save_in_flight(&self) -> bool {
        self.pending_save.is_some()
    }

    /// Vergibt eine neue Anker-ID.
    pub(crate) fn allocate_anchor_id(&mut self) -> AnchorId {
        let id = AnchorId(self.next_anchor_id);
        self.next_anchor_id += 1;
        id
    }

    /// Stellt sicher, dass künftige Anker-IDs oberhalb von `used` liegen.
    pub(crate) fn reserve_anchor_ids_above(&mut self, used: AnchorId) {
        self.next_anchor_id = self.next_anchor_id.max(used.0 + 1);
    }

    /// Vergibt eine neue Anfrage-ID.
    pub(crate) fn allocate_request_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    /// Momentaufnahme der Gate-Eingaben (ohne Frame: `None`).
    pub fn gate_input(&self) -> Option<GateInput> {
        let status = self.tracking.latest?;
        Some(GateInput {
            status,
            has_waypoints: self.tracking.waypoint_anchor_tracked,
            has_placed_anchor: self.tracking.active_anchor_tracked,
            is_authoring: self.is_authoring(),
            is_relocalizing: self.tracking.relocalizing_map,
            has_prior_map: self.has_prior_map,
            is_downloading: self.is_downloading(),
            has_start_snapshot: self.snapshots.start.is_some(),
            has_destination_snapshot: self.snapshots.destination.is_some(),
        })
    }

    /// Anzuzeigende Meldung: Lebenszyklus-Hinweis vor Gate-Meldung.
    pub fn display_message(&self) -> &str {
        self.ui.notice.as_deref().unwrap_or(self.status.message)
    }

    /// Diagnosezeile "Mapping: …\nTracking: …" des letzten Frames.
    pub fn diagnostics(&self) -> Option<String> {
        self.tracking.latest.map(|status| status.to_string())
    }

    /// Aufnahme-Bestätigung gerade sichtbar.
    pub fn snapshot_confirmation_visible(&self) -> bool {
        self.snapshots.confirmation_until.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MappingStatus, TrackingQuality};

    #[test]
    fn mode_is_fixed_but_phase_moves() {
        let mut state = SessionState::following(SessionOptions::default());
        assert!(state.is_downloading());

        state.set_follow_phase(FollowPhase::Relocalizing);
        assert!(state.is_relocalizing());
        assert!(!state.is_authoring());

        let mut authoring = SessionState::authoring(SessionOptions::default());
        authoring.set_follow_phase(FollowPhase::Guiding);
        assert_eq!(authoring.mode(), SessionMode::Authoring);
    }

    #[test]
    fn gate_keeps_relocalizing_until_reset_flag_clears() {
        let mut state = SessionState::following(SessionOptions::default());
        state.tracking.latest = Some(TrackingStatus::new(
            TrackingQuality::Normal,
            MappingStatus::Mapped,
        ));
        state.set_follow_phase(FollowPhase::Guiding);
        state.tracking.relocalizing_map = true;

        let input = state.gate_input().expect("Frame vorhanden");
        assert!(input.is_relocalizing);
        assert!(!state.is_relocalizing());

        state.tracking.relocalizing_map = false;
        let input = state.gate_input().expect("Frame vorhanden");
        assert!(!input.is_relocalizing);
    }

    #[test]
    fn gate_input_requires_a_frame() {
        let mut state = SessionState::authoring(SessionOptions::default());
        assert!(state.gate_input().is_none());

        state.tracking.latest = Some(TrackingStatus::new(
            TrackingQuality::Normal,
            MappingStatus::Mapped,
        ));
        let input = state.gate_input().expect("Frame vorhanden");
        assert!(input.is_authoring);
        assert!(!input.has_start_snapshot);
    }

    #[test]
    fn anchor_ids_stay_above_reserved() {
        let mut state = SessionState::following(SessionOptions::default());
        state.reserve_anchor_ids_above(AnchorId(41));
        assert_eq!(state.allocate_anchor_id(), AnchorId(42));
        state.reserve_anchor_ids_above(AnchorId(3));
        assert_eq!(state.allocate_anchor_id(), AnchorId(43));
    }

    #[test]
    fn notice_overrides_gate_message() {
        let mut state = SessionState::authoring(SessionOptions::default());
        state.status.message = "Tap on the screen to place a marker";
        assert_eq!(state.display_message(), "Tap on the screen to place a marker");

        state.ui.notice = Some("Session was interrupted".to_string());
        assert_eq!(state.display_message(), "Session was interrupted");
    }
}
