//! Session Controller für zentrale Event-Verarbeitung.

use super::{Collaborators, SessionCommand, SessionIntent, SessionState};

/// Orchestriert Intents und Use-Cases auf den SessionState.
pub struct PathSessionController {
    collaborators: Collaborators,
}

impl PathSessionController {
    /// Erstellt einen neuen Controller mit seinen Collaboratorn.
    pub fn new(collaborators: Collaborators) -> Self {
        Self { collaborators }
    }

    /// Zugriff auf die Collaborator.
    pub fn collaborators_mut(&mut self) -> &mut Collaborators {
        &mut self.collaborators
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(
        &mut self,
        state: &mut SessionState,
        intent: SessionIntent,
    ) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(
        &self,
        state: &SessionState,
        intent: SessionIntent,
    ) -> Vec<SessionCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem SessionState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut SessionState,
        command: SessionCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;
        let collaborators = &mut self.collaborators;

        match command {
            // === Tracking-Lebenszyklus ===
            SessionCommand::StartTracking => handlers::session::start(state, collaborators),
            SessionCommand::PauseTracking => handlers::session::pause(collaborators),
            SessionCommand::ResetTracking => handlers::session::reset(state, collaborators),
            SessionCommand::ApplyFrame { frame } => {
                handlers::session::apply_frame(state, collaborators, frame)
            }
            SessionCommand::EvaluateGate => handlers::session::evaluate_gate(state),
            SessionCommand::ShowNotice { text } => handlers::session::show_notice(state, text),
            SessionCommand::ReportSessionFailure { error } => {
                handlers::session::report_failure(state, error)
            }

            // === Wegpunkte ===
            SessionCommand::PlaceWaypoint { screen_point } => {
                handlers::placement::place(state, collaborators, screen_point)?
            }
            SessionCommand::ReconcileAnchors { anchors } => {
                handlers::placement::reconcile(state, collaborators, anchors)
            }
            SessionCommand::UndoWaypoint => handlers::placement::undo(state, collaborators)?,

            // === Snapshots ===
            SessionCommand::CaptureSnapshot { kind } => {
                handlers::snapshots::capture(state, collaborators, kind)?
            }

            // === Persistenz ===
            SessionCommand::RequestWorldMap => {
                handlers::persistence::request_save(state, collaborators)?
            }
            SessionCommand::CompleteSave { request_id, result } => {
                handlers::persistence::complete_save(state, collaborators, request_id, result)?
            }
            SessionCommand::RestorePath { path } => {
                handlers::persistence::restore(state, collaborators, path)?
            }
        }

        Ok(())
    }

    /// Antwort auf den Relokalisierungs-Hinweis des Trackings nach einer Unterbrechung.
    pub fn should_attempt_relocalization(&self, state: &SessionState) -> bool {
        state.options.attempt_relocalization
    }
}
