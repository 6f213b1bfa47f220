//! Externe Collaborator-Verträge der Session.
//!
//! Tracking, Bildaufnahme, Persistenz-Delegate und Szene werden als
//! Trait-Objekte übergeben, damit Host und Tests eigene Implementierungen
//! einsetzen können.

use crate::core::{
    Anchor, AnchorId, CapturedImage, RaycastHit, RaycastQuery, RunOptions, TrackingConfiguration,
};
use crate::persistence::PathDelegate;
use crate::render::SceneSink;

/// Vertrag mit der Tracking-Session der Plattform.
///
/// Frames, neue Anker und World-Map-Antworten kommen als `SessionIntent`s
/// zurück (siehe `IntentQueue`).
pub trait TrackingSession {
    /// Startet das Tracking mit einer Konfiguration.
    fn run(&mut self, configuration: TrackingConfiguration, options: RunOptions);
    /// Pausiert das Tracking.
    fn pause(&mut self);
    /// Strahltest vom Bildschirmpunkt in die Umgebung, nächster Treffer zuerst.
    fn raycast(&mut self, query: &RaycastQuery) -> Vec<RaycastHit>;
    /// Fordert die aktuelle World-Map asynchron an.
    /// Antwort: `SessionIntent::WorldMapResolved` mit derselben `request_id`.
    fn request_world_map(&mut self, request_id: u64);
    /// Registriert einen Anker.
    fn add_anchor(&mut self, anchor: Anchor);
    /// Entfernt einen Anker.
    fn remove_anchor(&mut self, anchor_id: AnchorId);
}

/// Vertrag mit der Bildaufnahme.
pub trait SnapshotCapture {
    /// Nimmt das aktuelle Kamerabild auf. `None`, wenn kein Bild verfügbar ist.
    fn capture_snapshot(&mut self) -> Option<CapturedImage>;
}

impl<T: TrackingSession + ?Sized> TrackingSession for Box<T> {
    fn run(&mut self, configuration: TrackingConfiguration, options: RunOptions) {
        (**self).run(configuration, options);
    }

    fn pause(&mut self) {
        (**self).pause();
    }

    fn raycast(&mut self, query: &RaycastQuery) -> Vec<RaycastHit> {
        (**self).raycast(query)
    }

    fn request_world_map(&mut self, request_id: u64) {
        (**self).request_world_map(request_id);
    }

    fn add_anchor(&mut self, anchor: Anchor) {
        (**self).add_anchor(anchor);
    }

    fn remove_anchor(&mut self, anchor_id: AnchorId) {
        (**self).remove_anchor(anchor_id);
    }
}

impl<C: SnapshotCapture + ?Sized> SnapshotCapture for Box<C> {
    fn capture_snapshot(&mut self) -> Option<CapturedImage> {
        (**self).capture_snapshot()
    }
}

/// Alle Collaborator einer Session.
pub struct Collaborators {
    /// Tracking-Session
    pub tracking: Box<dyn TrackingSession>,
    /// Bildaufnahme
    pub capture: Box<dyn SnapshotCapture>,
    /// Empfänger gespeicherter Pfade
    pub delegate: Box<dyn PathDelegate>,
    /// Szene
    pub scene: Box<dyn SceneSink>,
}

impl Collaborators {
    /// Bündelt die Collaborator einer Session.
    pub fn new(
        tracking: impl TrackingSession + 'static,
        capture: impl SnapshotCapture + 'static,
        delegate: impl PathDelegate + 'static,
        scene: impl SceneSink + 'static,
    ) -> Self {
        Self {
            tracking: Box::new(tracking),
            capture: Box::new(capture),
            delegate: Box::new(delegate),
            scene: Box::new(scene),
        }
    }
}
