//! NURBS-Kurvendefinition mit Basisfunktionen und Ableitungen.
//!
//! Auswertung nach Piegl/Tiller (Knotenspanne, Basisfunktionen samt
//! Ableitungen, rationale Ableitungen in homogenen Koordinaten).

use super::{CurveError, KnotVector, NURBS_EVAL_DELTA};
use glam::{DVec2, DVec3};

/// Rationale B-Spline-Kurve in der Ebene.
#[derive(Debug, Clone, PartialEq)]
pub struct NurbsCurve {
    /// Grad der stückweisen Polynome
    degree: usize,
    /// Kontrollpunkte in Traversierungsreihenfolge
    control_points: Vec<DVec2>,
    /// Gewicht je Kontrollpunkt (alle 1.0 = reiner B-Spline)
    weights: Vec<f64>,
    /// Knotenvektor, Länge `control_points.len() + degree + 1`
    knots: Vec<f64>,
    /// Schrittweite für interne Verfeinerung (Polyline, Länge)
    delta: f64,
}

impl NurbsCurve {
    /// Erstellt eine Kurve mit expliziten Gewichten.
    ///
    /// Prüft Grad, Anzahl der Knoten/Gewichte und Monotonie des Knotenvektors.
    pub fn new(
        degree: usize,
        control_points: Vec<DVec2>,
        weights: Vec<f64>,
        knots: Vec<f64>,
    ) -> Result<Self, CurveError> {
        let point_count = control_points.len();
        let invalid = |reason: String| CurveError::InvalidCurve { reason };

        if degree == 0 || point_count < degree + 1 {
            return Err(CurveError::InvalidInput {
                degree,
                point_count,
            });
        }
        if weights.len() != point_count {
            return Err(invalid(format!(
                "{} Gewichte für {} Kontrollpunkte",
                weights.len(),
                point_count
            )));
        }
        if let Some(index) = weights.iter().position(|w| !w.is_finite() || *w <= 0.0) {
            return Err(invalid(format!(
                "Gewicht #{} = {} nicht positiv-endlich",
                index, weights[index]
            )));
        }
        let expected = point_count + degree + 1;
        if knots.len() != expected {
            return Err(invalid(format!(
                "{} Knoten statt {} (Grad {}, {} Kontrollpunkte)",
                knots.len(),
                expected,
                degree,
                point_count
            )));
        }
        if let Some(index) = knots.windows(2).position(|w| w[0] > w[1]) {
            return Err(invalid(format!(
                "Knotenvektor fällt bei Index {} ({} > {})",
                index + 1,
                knots[index],
                knots[index + 1]
            )));
        }
        if knots[degree] >= knots[point_count] {
            return Err(invalid(format!(
                "leerer Parameterbereich [{}, {}]",
                knots[degree], knots[point_count]
            )));
        }

        Ok(Self {
            degree,
            control_points,
            weights,
            knots,
            delta: NURBS_EVAL_DELTA,
        })
    }

    /// Erstellt eine Kurve mit Einheitsgewicht 1.0 für alle Kontrollpunkte.
    pub fn with_uniform_weights(
        degree: usize,
        control_points: Vec<DVec2>,
        knots: KnotVector,
    ) -> Result<Self, CurveError> {
        let weights = vec![1.0; control_points.len()];
        Self::new(degree, control_points, weights, knots.into_inner())
    }

    /// Setzt das Auswertungs-Delta (nur interne Verfeinerung).
    pub fn with_delta(mut self, delta: f64) -> Self {
        if delta > 0.0 && delta <= 1.0 {
            self.delta = delta;
        } else {
            log::warn!("Ungültiges Auswertungs-Delta {} ignoriert", delta);
        }
        self
    }

    /// Grad der Kurve.
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Kontrollpunkte der Kurve.
    pub fn control_points(&self) -> &[DVec2] {
        &self.control_points
    }

    /// Gewichte der Kontrollpunkte.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Knotenvektor der Kurve.
    pub fn knots(&self) -> &[f64] {
        &self.knots
    }

    /// Auswertungs-Delta.
    pub fn delta(&self) -> f64 {
        self.delta
    }

    /// Definitionsbereich `(knots[degree], knots[point_count])`.
    pub fn domain(&self) -> (f64, f64) {
        (self.knots[self.degree], self.knots[self.control_points.len()])
    }

    /// Kurvenpunkt bei Parameter `u`.
    pub fn point_at(&self, u: f64) -> DVec2 {
        self.derivatives(u, 0)[0]
    }

    /// Erste Ableitung (Geschwindigkeitsvektor) bei Parameter `u`.
    pub fn derivative_at(&self, u: f64) -> DVec2 {
        self.derivatives(u, 1)[1]
    }

    /// Einheits-Tangente bei `u`; Null-Vektor bei verschwindender Ableitung.
    pub fn tangent_at(&self, u: f64) -> DVec2 {
        self.derivative_at(u).normalize_or_zero()
    }

    /// Punkt und Ableitungen bis `order` bei Parameter `u`.
    ///
    /// `u` wird auf den Definitionsbereich begrenzt. Ableitungen oberhalb
    /// des Grades sind identisch Null.
    pub fn derivatives(&self, u: f64, order: usize) -> Vec<DVec2> {
        let p = self.degree;
        let (start, end) = self.domain();
        let u = u.clamp(start, end);
        let span = self.find_span(u);
        let basis_order = order.min(p);
        let ders = self.basis_function_derivatives(span, u, basis_order);

        let mut homogeneous = vec![DVec3::ZERO; order + 1];
        for (k, row) in ders.iter().enumerate() {
            for (j, basis) in row.iter().enumerate() {
                let index = span - p + j;
                let w = self.weights[index];
                let cp = self.control_points[index];
                homogeneous[k] += *basis * DVec3::new(cp.x * w, cp.y * w, w);
            }
        }

        let w0 = homogeneous[0].z;
        let mut result = vec![DVec2::ZERO; order + 1];
        for k in 0..=order {
            let mut v = homogeneous[k].truncate();
            for i in 1..=k {
                v -= binomial(k, i) * homogeneous[i].z * result[k - i];
            }
            result[k] = v / w0;
        }
        result
    }

    /// Gleichmäßig im Abstand `delta` abgetastete Polyline über den Definitionsbereich.
    pub fn polyline(&self) -> Vec<DVec2> {
        let (start, end) = self.domain();
        let segments = ((1.0 / self.delta).round() as usize).max(1);
        (0..=segments)
            .map(|i| {
                let t = start + (end - start) * (i as f64 / segments as f64);
                self.point_at(t)
            })
            .collect()
    }

    /// Approximierte Bogenlänge über die Delta-Polyline.
    pub fn approximate_length(&self) -> f64 {
        self.polyline()
            .windows(2)
            .map(|w| w[0].distance(w[1]))
            .sum()
    }

    /// Index der Knotenspanne mit `knots[span] <= u < knots[span + 1]`.
    fn find_span(&self, u: f64) -> usize {
        let p = self.degree;
        let last = self.control_points.len() - 1;

        if u >= self.knots[last + 1] {
            return last;
        }
        if u <= self.knots[p] {
            return p;
        }

        let mut low = p;
        let mut high = last + 1;
        let mut mid = (low + high) / 2;
        while u < self.knots[mid] || u >= self.knots[mid + 1] {
            if u < self.knots[mid] {
                high = mid;
            } else {
                low = mid;
            }
            mid = (low + high) / 2;
        }
        mid
    }

    /// Nicht-verschwindende Basisfunktionen und ihre Ableitungen bis `n`.
    ///
    /// Ergebnis `ders[k][j]`: k-te Ableitung der Basisfunktion `span - degree + j`.
    /// Voraussetzung: `n <= degree`.
    fn basis_function_derivatives(&self, span: usize, u: f64, n: usize) -> Vec<Vec<f64>> {
        let p = self.degree;
        let knots = &self.knots;

        let mut ndu = vec![vec![0.0; p + 1]; p + 1];
        let mut left = vec![0.0; p + 1];
        let mut right = vec![0.0; p + 1];
        ndu[0][0] = 1.0;

        for j in 1..=p {
            left[j] = u - knots[span + 1 - j];
            right[j] = knots[span + j] - u;
            let mut saved = 0.0;
            for r in 0..j {
                // Unteres Dreieck: Knotendifferenzen
                ndu[j][r] = right[r + 1] + left[j - r];
                let temp = ndu[r][j - 1] / ndu[j][r];
                // Oberes Dreieck: Basisfunktionen
                ndu[r][j] = saved + right[r + 1] * temp;
                saved = left[j - r] * temp;
            }
            ndu[j][j] = saved;
        }

        let mut ders = vec![vec![0.0; p + 1]; n + 1];
        for j in 0..=p {
            ders[0][j] = ndu[j][p];
        }

        let mut a = [vec![0.0; p + 1], vec![0.0; p + 1]];
        for r in 0..=p {
            let (mut s1, mut s2) = (0usize, 1usize);
            a[0][0] = 1.0;

            for k in 1..=n {
                let mut d = 0.0;
                let rk = r as isize - k as isize;
                let pk = p - k;

                if r >= k {
                    a[s2][0] = a[s1][0] / ndu[pk + 1][rk as usize];
                    d = a[s2][0] * ndu[rk as usize][pk];
                }

                let j1 = if rk >= -1 { 1 } else { (-rk) as usize };
                let j2 = if r as isize - 1 <= pk as isize {
                    k - 1
                } else {
                    p - r
                };
                for j in j1..=j2 {
                    let idx = (rk + j as isize) as usize;
                    a[s2][j] = (a[s1][j] - a[s1][j - 1]) / ndu[pk + 1][idx];
                    d += a[s2][j] * ndu[idx][pk];
                }

                if r <= pk {
                    a[s2][k] = -a[s1][k - 1] / ndu[pk + 1][r];
                    d += a[s2][k] * ndu[r][pk];
                }

                ders[k][r] = d;
                std::mem::swap(&mut s1, &mut s2);
            }
        }

        let mut factor = p as f64;
        for (k, row) in ders.iter_mut().enumerate().skip(1) {
            for value in row.iter_mut() {
                *value *= factor;
            }
            factor *= (p - k) as f64;
        }

        ders
    }
}

/// Binomialkoeffizient als f64 (kleine Ordnungen).
fn binomial(n: usize, k: usize) -> f64 {
    (0..k).fold(1.0, |acc, i| acc * (n - i) as f64 / (i + 1) as f64)
}
