//! Gate-Entscheidung als Vertrag zwischen Session und UI.

/// Ergebnis einer Tracking-Gate-Auswertung für einen Frame.
///
/// Nur `&'static str` und Flags: die Auswertung läuft in jedem Frame
/// und darf nicht allokieren.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GateDecision {
    /// Statusmeldung für den Nutzer (leer = Info-Leiste ausblenden)
    pub message: &'static str,
    /// Speichern-Button aktiv
    pub save_enabled: bool,
    /// Snapshot-Vorschaubild zur Relokalisierung anzeigen
    pub snapshot_thumbnail_visible: bool,
}

impl GateDecision {
    /// Gibt `true` zurück, wenn die Info-Leiste sichtbar sein soll.
    pub fn info_visible(&self) -> bool {
        !self.message.is_empty()
    }
}
