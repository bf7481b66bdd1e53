//! Use-Case-Funktionen für die Kurven-Bearbeitung.
//!
//! Aufgeteilt nach Operation:
//! - `control_points`: Kontrollpolygon ersetzen, ergänzen, verschieben, kürzen
//! - `parameters`: Grad, Schrittanzahl und Optionen
//! - `background`: Platzierung des Hintergrundbilds
//! - `history`: Undo/Redo

mod background;
mod control_points;
mod history;
mod parameters;

pub use background::{set_background_anchor, set_background_size};
pub use control_points::{
    append_control_point, move_control_point, remove_control_point, set_control_points,
};
pub use history::{redo, undo};
pub use parameters::{apply_options, set_degree, set_steps};

#[cfg(test)]
mod tests;
