//! Use-Case: Kurvenparameter und Laufzeit-Optionen setzen.

use crate::app::AppState;
use crate::shared::EditorOptions;

/// Setzt den angeforderten Grad (>= 1).
pub fn set_degree(state: &mut AppState, degree: usize) -> anyhow::Result<()> {
    match state.curve.set_degree(degree) {
        Ok(changed) => {
            if changed {
                log::info!("Grad gesetzt: {}", degree);
            }
            Ok(())
        }
        Err(e) => {
            log::warn!("{}", e);
            state.ui.status_message = Some(e.to_string());
            Err(e.into())
        }
    }
}

/// Setzt die Anzahl der Parameterschritte (>= 1).
pub fn set_steps(state: &mut AppState, steps: usize) -> anyhow::Result<()> {
    match state.curve.set_steps(steps) {
        Ok(changed) => {
            if changed {
                log::info!("Schrittanzahl gesetzt: {}", steps);
            }
            Ok(())
        }
        Err(e) => {
            log::warn!("{}", e);
            state.ui.status_message = Some(e.to_string());
            Err(e.into())
        }
    }
}

/// Übernimmt neue Optionen.
///
/// Grad und Schritte der offenen Kurve bleiben unverändert; nur das
/// Auswertungs-Delta wirkt sofort.
pub fn apply_options(state: &mut AppState, options: EditorOptions) {
    let options = options.sanitized();
    if state.curve.set_eval_delta(options.curve_delta) {
        log::debug!("Auswertungs-Delta übernommen: {}", options.curve_delta);
    }
    state.options = options;
}
