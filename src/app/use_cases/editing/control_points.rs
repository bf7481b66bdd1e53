//! Use-Case: Kontrollpolygon bearbeiten.

use crate::app::AppState;
use glam::DVec2;

/// Ersetzt das komplette Kontrollpolygon.
///
/// Ungültige Koordinaten werden abgelehnt; der bisherige Zustand bleibt erhalten.
pub fn set_control_points(state: &mut AppState, points: Vec<DVec2>) -> anyhow::Result<()> {
    let count = points.len();
    match state.curve.set_control_points(points) {
        Ok(true) => {
            log::debug!("Kontrollpolygon ersetzt: {} Punkte", count);
            Ok(())
        }
        Ok(false) => Ok(()),
        Err(e) => {
            log::warn!("Kontrollpolygon abgelehnt: {}", e);
            state.ui.status_message = Some(format!("Kontrollpunkte abgelehnt: {e}"));
            Err(e.into())
        }
    }
}

/// Hängt einen Kontrollpunkt an das Ende des Polygons an.
pub fn append_control_point(state: &mut AppState, position: DVec2) -> anyhow::Result<()> {
    let mut points = state.curve.control_points().to_vec();
    points.push(position);
    set_control_points(state, points)
}

/// Verschiebt den Kontrollpunkt `index` an `position`.
pub fn move_control_point(
    state: &mut AppState,
    index: usize,
    position: DVec2,
) -> anyhow::Result<()> {
    let mut points = state.curve.control_points().to_vec();
    let Some(point) = points.get_mut(index) else {
        log::warn!(
            "Kontrollpunkt #{} nicht verschiebbar: nur {} Punkte",
            index,
            state.control_point_count()
        );
        return Ok(());
    };
    *point = position;
    set_control_points(state, points)
}

/// Entfernt den Kontrollpunkt `index`.
pub fn remove_control_point(state: &mut AppState, index: usize) -> anyhow::Result<()> {
    let mut points = state.curve.control_points().to_vec();
    if index >= points.len() {
        log::warn!("Kontrollpunkt #{} existiert nicht", index);
        return Ok(());
    }
    points.remove(index);
    set_control_points(state, points)
}
