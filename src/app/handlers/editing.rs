//! Handler für Kurven-Bearbeitung (Kontrollpunkte, Parameter, Hintergrund).

use crate::app::use_cases;
use crate::app::AppState;
use crate::shared::EditorOptions;
use glam::DVec2;

/// Ersetzt das Kontrollpolygon.
pub fn set_control_points(state: &mut AppState, points: Vec<DVec2>) -> anyhow::Result<()> {
    use_cases::editing::set_control_points(state, points)
}

/// Hängt einen Kontrollpunkt an.
pub fn append_control_point(state: &mut AppState, position: DVec2) -> anyhow::Result<()> {
    use_cases::editing::append_control_point(state, position)
}

/// Verschiebt einen Kontrollpunkt.
pub fn move_control_point(
    state: &mut AppState,
    index: usize,
    position: DVec2,
) -> anyhow::Result<()> {
    use_cases::editing::move_control_point(state, index, position)
}

/// Entfernt einen Kontrollpunkt.
pub fn remove_control_point(state: &mut AppState, index: usize) -> anyhow::Result<()> {
    use_cases::editing::remove_control_point(state, index)
}

/// Setzt den Grad.
pub fn set_degree(state: &mut AppState, degree: usize) -> anyhow::Result<()> {
    use_cases::editing::set_degree(state, degree)
}

/// Setzt die Schrittanzahl.
pub fn set_steps(state: &mut AppState, steps: usize) -> anyhow::Result<()> {
    use_cases::editing::set_steps(state, steps)
}

/// Setzt den Anker des Hintergrundbilds.
pub fn set_background_anchor(state: &mut AppState, anchor: DVec2) {
    use_cases::editing::set_background_anchor(state, anchor);
}

/// Setzt die Größe des Hintergrundbilds.
pub fn set_background_size(state: &mut AppState, size: DVec2) {
    use_cases::editing::set_background_size(state, size);
}

/// Übernimmt neue Laufzeit-Optionen.
pub fn apply_options(state: &mut AppState, options: EditorOptions) {
    use_cases::editing::apply_options(state, options);
}

/// Macht die letzte Kurven-Bearbeitung rückgängig.
pub fn undo(state: &mut AppState) -> anyhow::Result<()> {
    use_cases::editing::undo(state)
}

/// Wiederholt die zuletzt rückgängig gemachte Bearbeitung.
pub fn redo(state: &mut AppState) -> anyhow::Result<()> {
    use_cases::editing::redo(state)
}
