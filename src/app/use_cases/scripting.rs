//! Use-Case-Funktionen für Export und externe Plugins.
//!
//! Plugins erhalten die Kurvendaten read-only aus dem aktuellen Cache.
//! Fehler landen in Log und Statuszeile und verändern die Kurve nicht.

use crate::app::AppState;
use nurbs_path_engine::{AssignmentExportPlugin, CurvePlugin, ProcessPlugin};
use std::path::PathBuf;

/// Exportiert die Kurvendaten als `<variable> = <json>;` nach `path`.
pub fn export_curve(state: &mut AppState, path: PathBuf) -> anyhow::Result<()> {
    let plugin = AssignmentExportPlugin::new(state.options.export_variable_name.clone(), path)
        .with_pretty(state.options.pretty_json);
    run_plugin(state, &plugin)
}

/// Startet `program` als Subprozess und übergibt die Kurvendaten per stdin.
pub fn run_process_plugin(
    state: &mut AppState,
    program: PathBuf,
    args: Vec<String>,
) -> anyhow::Result<()> {
    let plugin = ProcessPlugin::new(program, args);
    run_plugin(state, &plugin)
}

/// Führt ein beliebiges Plugin auf den aktuellen Kurvendaten aus.
///
/// Das Ergebnis wird in `ui.last_plugin_result` abgelegt.
pub fn run_plugin(state: &mut AppState, plugin: &dyn CurvePlugin) -> anyhow::Result<()> {
    let data = state.curve.curve_data();
    if data.is_empty() {
        log::warn!(
            "Plugin '{}' erhält keine Samples (Kurve undefiniert)",
            plugin.name()
        );
    }

    match plugin.process(&data) {
        Ok(value) => {
            log::info!("Plugin '{}' ausgeführt", plugin.name());
            state.ui.status_message = Some(format!("Plugin '{}' ausgeführt", plugin.name()));
            state.ui.last_plugin_result = Some(value);
            Ok(())
        }
        Err(e) => {
            log::error!("Plugin '{}' fehlgeschlagen: {:#}", plugin.name(), e);
            state.ui.status_message = Some(format!("Plugin '{}' fehlgeschlagen", plugin.name()));
            Err(e)
        }
    }
}
