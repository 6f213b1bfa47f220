//! In-Memory-Collaborator für Controller-Tests.

#![allow(dead_code)]

use ar_path_recorder::core::{
    CapturedImage, RaycastHit, RaycastQuery, RunOptions, TrackingConfiguration,
};
use ar_path_recorder::{
    Anchor, AnchorId, Collaborators, CreatedPath, MappingStatus, PathDelegate,
    PathSessionController, PersistedMap, RecordingScene, SessionIntent, SessionOptions,
    SessionState, SnapshotCapture, TrackingFrame, TrackingQuality, TrackingSession,
    TrackingStatus,
};
use glam::{Mat4, Vec2, Vec3};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// Aufzeichnung aller Aufrufe an die Tracking-Session.
#[derive(Debug, Default)]
pub struct TrackingLog {
    /// `run`-Aufrufe: (mitgegebene Karte, Optionen)
    pub runs: Vec<(Option<PersistedMap>, RunOptions)>,
    pub pauses: usize,
    pub world_map_requests: Vec<u64>,
    /// Aktuell getrackte Anker
    pub anchors: Vec<Anchor>,
    pub removed: Vec<AnchorId>,
    /// Treffer für die nächsten Raycasts
    pub hits: VecDeque<Vec3>,
    pub raycasts: usize,
}

pub struct FakeTracking(pub Rc<RefCell<TrackingLog>>);

impl TrackingSession for FakeTracking {
    fn run(&mut self, configuration: TrackingConfiguration, options: RunOptions) {
        let mut log = self.0.borrow_mut();
        if options.remove_existing_anchors {
            log.anchors.clear();
        }
        log.runs.push((configuration.initial_map, options));
    }

    fn pause(&mut self) {
        self.0.borrow_mut().pauses += 1;
    }

    fn raycast(&mut self, _query: &RaycastQuery) -> Vec<RaycastHit> {
        let mut log = self.0.borrow_mut();
        log.raycasts += 1;
        log.hits
            .pop_front()
            .map(|position| RaycastHit {
                world_transform: Mat4::from_translation(position),
            })
            .into_iter()
            .collect()
    }

    fn request_world_map(&mut self, request_id: u64) {
        self.0.borrow_mut().world_map_requests.push(request_id);
    }

    fn add_anchor(&mut self, anchor: Anchor) {
        self.0.borrow_mut().anchors.push(anchor);
    }

    fn remove_anchor(&mut self, anchor_id: AnchorId) {
        let mut log = self.0.borrow_mut();
        log.anchors.retain(|a| a.id != anchor_id);
        log.removed.push(anchor_id);
    }
}

/// Bildaufnahme mit abschaltbarem Ergebnis.
#[derive(Debug)]
pub struct CaptureLog {
    pub available: bool,
    pub captures: usize,
}

pub struct FakeCapture(pub Rc<RefCell<CaptureLog>>);

impl SnapshotCapture for FakeCapture {
    fn capture_snapshot(&mut self) -> Option<CapturedImage> {
        let mut log = self.0.borrow_mut();
        if !log.available {
            return None;
        }
        log.captures += 1;
        Some(CapturedImage {
            image_data: vec![0xFF, 0xD8, log.captures as u8],
            camera_transform: Mat4::from_translation(Vec3::new(0.0, 1.5, 0.0)),
        })
    }
}

pub struct CollectingDelegate(pub Rc<RefCell<Vec<CreatedPath>>>);

impl PathDelegate for CollectingDelegate {
    fn on_path_created(&mut self, path: CreatedPath) -> anyhow::Result<()> {
        self.0.borrow_mut().push(path);
        Ok(())
    }
}

/// Controller, State und geteilte Sicht auf alle Collaborator.
pub struct Harness {
    pub controller: PathSessionController,
    pub state: SessionState,
    pub tracking: Rc<RefCell<TrackingLog>>,
    pub capture: Rc<RefCell<CaptureLog>>,
    pub created: Rc<RefCell<Vec<CreatedPath>>>,
    pub scene: Rc<RefCell<RecordingScene>>,
    pub timestamp: f64,
}

impl Harness {
    pub fn authoring() -> Self {
        Self::with_state(SessionState::authoring(SessionOptions::default()))
    }

    pub fn following() -> Self {
        Self::with_state(SessionState::following(SessionOptions::default()))
    }

    pub fn with_state(state: SessionState) -> Self {
        let tracking = Rc::new(RefCell::new(TrackingLog::default()));
        let capture = Rc::new(RefCell::new(CaptureLog {
            available: true,
            captures: 0,
        }));
        let created = Rc::new(RefCell::new(Vec::new()));
        let scene = Rc::new(RefCell::new(RecordingScene::new()));

        let collaborators = Collaborators::new(
            FakeTracking(Rc::clone(&tracking)),
            FakeCapture(Rc::clone(&capture)),
            CollectingDelegate(Rc::clone(&created)),
            Rc::clone(&scene),
        );

        Self {
            controller: PathSessionController::new(collaborators),
            state,
            tracking,
            capture,
            created,
            scene,
            timestamp: 0.0,
        }
    }

    pub fn send(&mut self, intent: SessionIntent) -> anyhow::Result<()> {
        self.controller.handle_intent(&mut self.state, intent)
    }

    /// Tippt auf den Bildschirm; der Raycast trifft `position`.
    pub fn tap_at(&mut self, position: Vec3) -> anyhow::Result<()> {
        self.tracking.borrow_mut().hits.push_back(position);
        self.send(SessionIntent::ScreenTapped {
            screen_point: Vec2::new(200.0, 400.0),
        })
    }

    /// Tippt ins Leere (kein Raycast-Treffer).
    pub fn tap_miss(&mut self) -> anyhow::Result<()> {
        self.send(SessionIntent::ScreenTapped {
            screen_point: Vec2::new(10.0, 10.0),
        })
    }

    /// Liefert einen Frame mit allen aktuell getrackten Ankern, Kamera im Ursprung.
    pub fn frame(&mut self, quality: TrackingQuality, mapping: MappingStatus) {
        self.frame_at(Vec3::ZERO, quality, mapping);
    }

    pub fn frame_at(&mut self, camera: Vec3, quality: TrackingQuality, mapping: MappingStatus) {
        self.timestamp += 0.5;
        let frame = TrackingFrame {
            timestamp: self.timestamp,
            status: TrackingStatus::new(quality, mapping),
            camera_position: camera,
            anchors: self.tracking.borrow().anchors.clone(),
        };
        self.send(SessionIntent::FrameUpdated { frame })
            .expect("Frame-Verarbeitung sollte nicht fehlschlagen");
    }

    pub fn normal_frame(&mut self) {
        self.frame(TrackingQuality::Normal, MappingStatus::Mapped);
    }

    /// Zwei Wegpunkte, beide Snapshots und ein kartierter Frame.
    pub fn prepare_saveable_path(&mut self) {
        self.send(SessionIntent::SessionStarted)
            .expect("Start sollte funktionieren");
        self.tap_at(Vec3::ZERO)
            .expect("Platzieren sollte funktionieren");
        self.send(SessionIntent::StartSnapshotRequested)
            .expect("Start-Snapshot sollte funktionieren");
        self.tap_at(Vec3::new(1.0, 0.0, 0.0))
            .expect("Platzieren sollte funktionieren");
        self.send(SessionIntent::DestinationSnapshotRequested)
            .expect("Ziel-Snapshot sollte funktionieren");
        self.normal_frame();
    }

    /// Id der letzten World-Map-Anfrage.
    pub fn last_request_id(&self) -> u64 {
        *self
            .tracking
            .borrow()
            .world_map_requests
            .last()
            .expect("Es sollte eine World-Map-Anfrage geben")
    }

    /// World-Map, wie sie das Tracking aktuell liefern würde.
    pub fn current_world_map(&self) -> PersistedMap {
        PersistedMap::new(vec![1, 2, 3, 4], self.tracking.borrow().anchors.clone())
    }
}
