//! Handler für Export und externe Plugins.

use crate::app::use_cases;
use crate::app::AppState;
use std::path::PathBuf;

/// Exportiert die Kurvendaten als Zuweisung in eine Datei.
pub fn export(state: &mut AppState, path: PathBuf) -> anyhow::Result<()> {
    use_cases::scripting::export_curve(state, path)
}

/// Führt ein externes Plugin mit den aktuellen Kurvendaten aus.
pub fn run_plugin(
    state: &mut AppState,
    program: PathBuf,
    args: Vec<String>,
) -> anyhow::Result<()> {
    use_cases::scripting::run_process_plugin(state, program, args)
}

/// Erstellt die Sample-Übersicht und legt sie im UI-State ab.
pub fn report_summary(state: &mut AppState) {
    use_cases::summary::report_summary(state);
}
