//! Render-Anbindung: Senke für Szenen-Kommandos.
//!
//! Der eigentliche Renderer ist ein externer Collaborator. Die Session
//! schickt ihm nur `SceneCommand`s; Rückmeldungen gibt es keine.

mod recording;

pub use crate::shared::SceneCommand;
pub use recording::{MarkerNode, RecordingScene};

use std::cell::RefCell;
use std::rc::Rc;

/// Empfänger der Pfad-Geometrie.
pub trait SceneSink {
    /// Wendet ein Szenen-Kommando an.
    fn apply(&mut self, command: SceneCommand);
}

impl<S: SceneSink + ?Sized> SceneSink for Box<S> {
    fn apply(&mut self, command: SceneCommand) {
        (**self).apply(command);
    }
}

/// Geteilte Senke: der Host behält Lesezugriff, die Session schreibt.
impl<S: SceneSink> SceneSink for Rc<RefCell<S>> {
    fn apply(&mut self, command: SceneCommand) {
        self.borrow_mut().apply(command);
    }
}

/// Senke, die alles verwirft (Headless-Betrieb).
#[derive(Debug, Default, Clone, Copy)]
pub struct NullScene;

impl SceneSink for NullScene {
    fn apply(&mut self, _command: SceneCommand) {}
}
