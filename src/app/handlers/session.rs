//! Handler für Tracking-Lebenszyklus, Frames und Hinweise.

use crate::app::use_cases;
use crate::app::{Collaborators, SessionState};
use crate::core::{TrackingError, TrackingFrame};

/// Startet das Tracking.
pub fn start(state: &mut SessionState, collaborators: &mut Collaborators) {
    use_cases::tracking::start_tracking(state, collaborators);
}

/// Pausiert das Tracking.
pub fn pause(collaborators: &mut Collaborators) {
    use_cases::tracking::pause_tracking(collaborators);
}

/// Setzt das Tracking zurück.
pub fn reset(state: &mut SessionState, collaborators: &mut Collaborators) {
    use_cases::tracking::reset_tracking(state, collaborators);
}

/// Übernimmt einen Tracking-Frame.
pub fn apply_frame(state: &mut SessionState, collaborators: &mut Collaborators, frame: TrackingFrame) {
    use_cases::tracking::apply_frame(state, collaborators, &frame);
}

/// Wertet das Tracking-Gate aus.
pub fn evaluate_gate(state: &mut SessionState) {
    use_cases::tracking::evaluate_gate(state);
}

/// Zeigt einen Hinweis an.
pub fn show_notice(state: &mut SessionState, text: String) {
    use_cases::tracking::show_notice(state, text);
}

/// Meldet einen Session-Fehler.
pub fn report_failure(state: &mut SessionState, error: TrackingError) {
    use_cases::tracking::report_session_failure(state, &error);
}
