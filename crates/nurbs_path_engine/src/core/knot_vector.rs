//! Knotenvektor-Synthese für die Editor-Kurve.
//!
//! Zuerst wird die komplette erste Hälfte des Vektors auf 0 gesetzt (statt nur
//! `degree + 1` Einträge), bei ungerader Länge die Mitte auf 0.5, danach wird
//! der innere Bereich gleichmäßig überschrieben. Die Reihenfolge bestimmt die
//! gerenderte Kurvenform und muss erhalten bleiben.

use super::CurveError;

/// Nicht-fallende Knotenfolge im Intervall `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct KnotVector(Vec<f64>);

impl KnotVector {
    /// Liefert die Knoten als Slice.
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Anzahl der Knoten (`degree + point_count + 1`).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Gibt `true` zurück, wenn der Vektor leer ist.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Prüft, ob jeder Knoten größer oder gleich seinem Vorgänger ist.
    pub fn is_non_decreasing(&self) -> bool {
        self.0.windows(2).all(|w| w[0] <= w[1])
    }

    /// Übernimmt den Vektor als `Vec<f64>`.
    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }
}

impl AsRef<[f64]> for KnotVector {
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}

/// Effektiver Grad: `min(point_count - 1, requested_degree)`.
///
/// Verhindert einen Grad, den die Kontrollpunkt-Anzahl nicht tragen kann.
/// Für `point_count == 0` ergibt sich 0.
pub fn effective_degree(point_count: usize, requested_degree: usize) -> usize {
    point_count.saturating_sub(1).min(requested_degree)
}

/// Erzeugt den Knotenvektor für `degree` (bereits effektiv) und `point_count`.
///
/// Vorbedingung: `point_count >= degree + 1 >= 2`. Eine Verletzung wird nicht
/// still korrigiert, sondern als `CurveError::InvalidInput` gemeldet.
pub fn synthesize_knot_vector(degree: usize, point_count: usize) -> Result<KnotVector, CurveError> {
    if degree == 0 || point_count < degree + 1 {
        log::warn!(
            "Knotenvektor-Synthese abgelehnt: Grad {} bei {} Kontrollpunkten",
            degree,
            point_count
        );
        return Err(CurveError::InvalidInput {
            degree,
            point_count,
        });
    }

    let count = degree + point_count + 1;
    let half = count / 2;

    let mut knots = vec![1.0; count];
    for knot in knots.iter_mut().take(half) {
        *knot = 0.0;
    }
    if count % 2 == 1 {
        knots[half] = 0.5;
    }

    // Innerer Bereich: degree+1 ..= count-degree-2, überschreibt 0/0.5/1 von oben
    let interior = (degree + 1)..(count - degree - 1);
    let step = 1.0 / (interior.len() + 1) as f64;
    for (k, index) in interior.enumerate() {
        knots[index] = (k + 1) as f64 * step;
    }

    Ok(KnotVector(knots))
}
