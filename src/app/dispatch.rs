//! Übergabe von Collaborator-Rückmeldungen an den Besitzer-Thread.
//!
//! Frames, Anker und World-Map-Antworten können auf beliebigen Threads
//! eintreffen. Sie werden als `SessionIntent` eingereiht und nur auf dem
//! Thread, der `SessionState` besitzt, verarbeitet.

use super::{PathSessionController, SessionIntent, SessionState};
use std::sync::mpsc::{self, Receiver, Sender};

/// Sendeseite der Intent-Warteschlange, beliebig klon- und zwischen Threads verschiebbar.
#[derive(Debug, Clone)]
pub struct IntentSender {
    sender: Sender<SessionIntent>,
}

impl IntentSender {
    /// Reiht einen Intent ein. `false`, wenn die Warteschlange nicht mehr existiert.
    pub fn send(&self, intent: SessionIntent) -> bool {
        self.sender.send(intent).is_ok()
    }
}

/// Intent-Warteschlange des Besitzer-Threads.
pub struct IntentQueue {
    sender: Sender<SessionIntent>,
    receiver: Receiver<SessionIntent>,
}

impl Default for IntentQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl IntentQueue {
    /// Erstellt eine leere Warteschlange.
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self { sender, receiver }
    }

    /// Neue Sendeseite für einen Collaborator.
    pub fn sender(&self) -> IntentSender {
        IntentSender {
            sender: self.sender.clone(),
        }
    }

    /// Verarbeitet alle wartenden Intents in Eingangsreihenfolge.
    ///
    /// Fehler einzelner Intents werden geloggt und brechen die Verarbeitung
    /// nicht ab. Rückgabe: Anzahl verarbeiteter Intents.
    pub fn drain(&self, controller: &mut PathSessionController, state: &mut SessionState) -> usize {
        let mut processed = 0;
        while let Ok(intent) = self.receiver.try_recv() {
            if let Err(e) = controller.handle_intent(state, intent) {
                log::error!("Fehler bei Intent-Verarbeitung: {:#}", e);
            }
            processed += 1;
        }
        processed
    }
}
