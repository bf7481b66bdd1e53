//! Use-Case: Hintergrundbild platzieren.

use crate::app::AppState;
use glam::DVec2;

/// Verschiebt das Hintergrundbild.
pub fn set_background_anchor(state: &mut AppState, anchor: DVec2) {
    if state.curve.set_background_anchor(anchor) {
        log::debug!("Hintergrund-Anker: ({:.1}, {:.1})", anchor.x, anchor.y);
    }
}

/// Skaliert das Hintergrundbild.
pub fn set_background_size(state: &mut AppState, size: DVec2) {
    if state.curve.set_background_size(size) {
        log::debug!("Hintergrund-Größe: {:.1} x {:.1}", size.x, size.y);
    }
}
