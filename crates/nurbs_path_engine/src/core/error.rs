//! Fehler-Taxonomie der Kurven-Engine.

use thiserror::Error;

/// Fehler, die an den Eingangsgrenzen der Engine erkannt werden.
///
/// Numerische Degenerationen während des Rebuilds (Tangente der Länge 0)
/// sind kein Fehler, sondern werden pro Sample als Null-Vektor abgebildet.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CurveError {
    /// Vorbedingung der Knotenvektor-Synthese verletzt (`point_count >= degree + 1 >= 2`).
    #[error("ungültige Knotenvektor-Eingabe: Grad {degree} bei {point_count} Kontrollpunkten")]
    InvalidInput { degree: usize, point_count: usize },
    /// Inkonsistente Kurvendefinition (Gewichte, Knotenanzahl, Monotonie).
    #[error("ungültige Kurvendefinition: {reason}")]
    InvalidCurve { reason: String },
    /// Kontrollpunkt mit falscher Dimension oder nicht-endlichen Koordinaten.
    #[error("ungültiger Kontrollpunkt #{index}: {reason}")]
    InvalidControlPoint { index: usize, reason: String },
    /// Kurvenparameter außerhalb des zulässigen Bereichs (Grad >= 1, Schritte 1..=`MAX_STEPS`).
    #[error("ungültiger Parameter '{name}': {value}")]
    InvalidParameter { name: &'static str, value: usize },
}
