//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::OpenFileRequested { path } => vec![AppCommand::LoadFile { path }],
        AppIntent::SaveRequested => vec![AppCommand::SaveFile { path: None }],
        AppIntent::SaveAsRequested { path } => vec![AppCommand::SaveFile { path: Some(path) }],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
        AppIntent::ControlPointsEdited { points } => {
            vec![AppCommand::SetControlPoints { points }]
        }
        AppIntent::ControlPointAppendRequested { position } => {
            vec![AppCommand::AppendControlPoint { position }]
        }
        AppIntent::ControlPointDragged { index, position } => {
            // Drag auf einen nicht existierenden Punkt (veraltete UI-Auswahl) verwerfen
            if index < state.control_point_count() {
                vec![AppCommand::MoveControlPoint { index, position }]
            } else {
                log::debug!("Drag auf Kontrollpunkt #{} ignoriert", index);
                vec![]
            }
        }
        AppIntent::ControlPointRemoveRequested { index } => {
            if index < state.control_point_count() {
                vec![AppCommand::RemoveControlPoint { index }]
            } else {
                vec![]
            }
        }
        AppIntent::DegreeChanged { degree } => vec![AppCommand::SetDegree { degree }],
        AppIntent::StepsChanged { steps } => vec![AppCommand::SetSteps { steps }],
        AppIntent::BackgroundMoved { anchor } => vec![AppCommand::SetBackgroundAnchor { anchor }],
        AppIntent::BackgroundResized { size } => vec![AppCommand::SetBackgroundSize { size }],
        AppIntent::UndoRequested => vec![AppCommand::Undo],
        AppIntent::RedoRequested => vec![AppCommand::Redo],
        AppIntent::SummaryRequested => vec![AppCommand::ReportSummary],
        AppIntent::ExportRequested { path } => vec![AppCommand::ExportCurve { path }],
        AppIntent::PluginRunRequested { program, args } => {
            vec![AppCommand::RunPlugin { program, args }]
        }
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
    }
}
