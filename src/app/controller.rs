//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState, CurveSnapshot};

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        log::debug!("Command: {:?}", command);
        // Zustand vor der Änderung; nur echte Änderungen erzeugen einen Undo-Schritt
        let before = command
            .is_undoable()
            .then(|| CurveSnapshot::capture(&state.curve));

        self.dispatch(state, command)?;

        if let Some(before) = before {
            if before != CurveSnapshot::capture(&state.curve) {
                state.history.record_snapshot(before);
            }
        }
        Ok(())
    }

    fn dispatch(&mut self, state: &mut AppState, command: AppCommand) -> anyhow::Result<()> {
        use super::handlers;

        match command {
            // === Datei-I/O ===
            AppCommand::LoadFile { path } => handlers::file_io::load(state, path)?,
            AppCommand::SaveFile { path } => handlers::file_io::save(state, path)?,

            // === Kurve bearbeiten ===
            AppCommand::SetControlPoints { points } => {
                handlers::editing::set_control_points(state, points)?
            }
            AppCommand::AppendControlPoint { position } => {
                handlers::editing::append_control_point(state, position)?
            }
            AppCommand::MoveControlPoint { index, position } => {
                handlers::editing::move_control_point(state, index, position)?
            }
            AppCommand::RemoveControlPoint { index } => {
                handlers::editing::remove_control_point(state, index)?
            }
            AppCommand::SetDegree { degree } => handlers::editing::set_degree(state, degree)?,
            AppCommand::SetSteps { steps } => handlers::editing::set_steps(state, steps)?,
            AppCommand::SetBackgroundAnchor { anchor } => {
                handlers::editing::set_background_anchor(state, anchor)
            }
            AppCommand::SetBackgroundSize { size } => {
                handlers::editing::set_background_size(state, size)
            }

            AppCommand::Undo => handlers::editing::undo(state)?,
            AppCommand::Redo => handlers::editing::redo(state)?,

            // === Export & Plugins ===
            AppCommand::ReportSummary => handlers::scripting::report_summary(state),
            AppCommand::ExportCurve { path } => handlers::scripting::export(state, path)?,
            AppCommand::RunPlugin { program, args } => {
                handlers::scripting::run_plugin(state, program, args)?
            }

            // === Optionen & Anwendung ===
            AppCommand::ApplyOptions { options } => handlers::editing::apply_options(state, *options),
            AppCommand::RequestExit => state.should_exit = true,
        }

        Ok(())
    }
}
