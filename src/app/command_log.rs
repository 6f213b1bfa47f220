//! Begrenztes Command-Log für Diagnose und Tests.

use super::{CommandKind, SessionCommand};

/// Speichert ausgeführte Commands in Reihenfolge.
///
/// Abgelegt wird nur die Art des Commands; Kartendaten und Frames
/// werden nicht dupliziert. Per-Frame-Commands werden übersprungen.
#[derive(Debug, Default)]
pub struct CommandLog {
    entries: Vec<CommandKind>,
}

impl CommandLog {
    const MAX_ENTRIES: usize = 1000;
}

impl CommandLog {
    /// Erstellt ein leeres Command-Log.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Fügt einen ausgeführten Command hinzu.
    /// Begrenzt auf MAX_ENTRIES, ältere Einträge werden verworfen.
    pub fn record(&mut self, command: &SessionCommand) {
        if command.is_per_frame() {
            return;
        }
        if self.entries.len() >= Self::MAX_ENTRIES {
            self.entries.drain(..Self::MAX_ENTRIES / 2);
        }
        self.entries.push(command.kind());
    }

    /// Gibt die Anzahl der geloggten Commands zurück.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück, wenn keine Commands vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Liefert eine read-only Sicht auf alle Einträge.
    pub fn entries(&self) -> &[CommandKind] {
        &self.entries
    }

    /// Zuletzt geloggter Command.
    pub fn last(&self) -> Option<CommandKind> {
        self.entries.last().copied()
    }
}
