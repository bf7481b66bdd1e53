//! Use-Case: Kurven-Bearbeitung rückgängig machen und wiederholen.

use crate::app::{AppState, CurveSnapshot};

/// Stellt den Zustand vor der letzten Bearbeitung wieder her.
///
/// Ohne Undo-Schritt bleibt die Kurve unverändert, nur die Statuszeile informiert.
pub fn undo(state: &mut AppState) -> anyhow::Result<()> {
    let current = CurveSnapshot::capture(&state.curve);
    let Some(previous) = state.history.pop_undo_with_current(current) else {
        log::debug!("Undo: nichts rückgängig zu machen");
        state.ui.status_message = Some("Nichts rückgängig zu machen".to_string());
        return Ok(());
    };

    previous.restore(&mut state.curve)?;
    log::info!(
        "Undo: {} Kontrollpunkte, Grad {}, {} Schritte",
        state.control_point_count(),
        state.curve.degree(),
        state.curve.steps()
    );
    state.ui.status_message = Some("Rückgängig gemacht".to_string());
    Ok(())
}

/// Wiederholt die zuletzt rückgängig gemachte Bearbeitung.
pub fn redo(state: &mut AppState) -> anyhow::Result<()> {
    let current = CurveSnapshot::capture(&state.curve);
    let Some(next) = state.history.pop_redo_with_current(current) else {
        log::debug!("Redo: nichts zu wiederholen");
        state.ui.status_message = Some("Nichts zu wiederholen".to_string());
        return Ok(());
    };

    next.restore(&mut state.curve)?;
    log::info!("Redo: {} Kontrollpunkte", state.control_point_count());
    state.ui.status_message = Some("Wiederholt".to_string());
    Ok(())
}
