//! Kurven-Evaluator mit Lazy-Cache und Dirty-Flag.
//!
//! Der Evaluator besitzt Kontrollpunkte, Grad, Schrittanzahl und die
//! Hintergrund-Platzierung. Jede Änderung markiert den Cache als veraltet;
//! der nächste Lesezugriff baut Kurve und Samples in einem Durchgang neu auf.

use super::{
    effective_degree, synthesize_knot_vector, CurveError, NurbsCurve, DEFAULT_DEGREE,
    DEFAULT_STEPS, MAX_STEPS, MIN_CURVE_POINTS, NURBS_EVAL_DELTA,
};
use crate::plugin::CurveData;
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Platzierung des Referenzbilds im Editor.
///
/// Beeinflusst die Kurvenmathematik nicht, teilt aber den Invalidierungs-Kanal.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BackgroundPlacement {
    /// Ankerposition (linke obere Ecke)
    pub anchor: DVec2,
    /// Breite und Höhe
    pub size: DVec2,
}

/// Besitzt den Editor-Zustand der Kurve und cached die abgeleiteten Samples.
#[derive(Debug, Clone)]
pub struct CurveEvaluator {
    /// Kontrollpolygon in Traversierungsreihenfolge
    control_points: Vec<DVec2>,
    /// Angeforderter Grad (effektiver Grad wird beim Rebuild begrenzt)
    degree: usize,
    /// Parameterschritte, ergibt `steps + 1` Samples
    steps: usize,
    /// Hintergrund-Anker und -Größe
    background: BackgroundPlacement,
    /// Delta für interne Verfeinerung der Kurvendefinition
    eval_delta: f64,
    /// Cache veraltet, nächster Lesezugriff baut neu auf
    dirty: bool,
    /// Zuletzt gebaute Kurvendefinition (None unter `MIN_CURVE_POINTS`)
    curve: Option<NurbsCurve>,
    positions: Vec<DVec2>,
    tangents: Vec<DVec2>,
    tangent_angles: Vec<f64>,
    /// Anzahl tatsächlich ausgeführter Rebuilds
    rebuild_count: u64,
}

impl Default for CurveEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl CurveEvaluator {
    /// Erstellt einen leeren Evaluator mit Standard-Grad und -Schrittanzahl.
    pub fn new() -> Self {
        Self {
            control_points: Vec::new(),
            degree: DEFAULT_DEGREE,
            steps: DEFAULT_STEPS,
            background: BackgroundPlacement::default(),
            eval_delta: NURBS_EVAL_DELTA,
            dirty: false,
            curve: None,
            positions: Vec::new(),
            tangents: Vec::new(),
            tangent_angles: Vec::new(),
            rebuild_count: 0,
        }
    }

    /// Erstellt einen Evaluator mit abweichenden Startparametern.
    pub fn with_parameters(degree: usize, steps: usize) -> Result<Self, CurveError> {
        let mut evaluator = Self::new();
        evaluator.set_degree(degree)?;
        evaluator.set_steps(steps)?;
        evaluator.dirty = false;
        Ok(evaluator)
    }

    // ── Eingaben ────────────────────────────────────────────────────

    /// Aktuelles Kontrollpolygon.
    pub fn control_points(&self) -> &[DVec2] {
        &self.control_points
    }

    /// Angeforderter Grad.
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Parameterschritte.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Hintergrund-Platzierung.
    pub fn background(&self) -> BackgroundPlacement {
        self.background
    }

    /// Delta für interne Verfeinerung.
    pub fn eval_delta(&self) -> f64 {
        self.eval_delta
    }

    /// Gibt `true` zurück, wenn der Cache beim nächsten Lesen neu gebaut wird.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Anzahl der bisher ausgeführten Rebuilds.
    pub fn rebuild_count(&self) -> u64 {
        self.rebuild_count
    }

    /// Ersetzt das Kontrollpolygon komplett.
    ///
    /// Gibt `Ok(false)` zurück, wenn die Punkte strukturell gleich sind (No-op).
    /// Nicht-endliche Koordinaten werden abgelehnt, der Zustand bleibt erhalten.
    pub fn set_control_points(&mut self, points: Vec<DVec2>) -> Result<bool, CurveError> {
        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            log::warn!("Kontrollpunkt #{} abgelehnt: {:?}", index, points[index]);
            return Err(CurveError::InvalidControlPoint {
                index,
                reason: format!("nicht-endliche Koordinate {:?}", points[index]),
            });
        }
        if self.control_points == points {
            return Ok(false);
        }
        self.control_points = points;
        self.mark_dirty();
        Ok(true)
    }

    /// Ersetzt das Kontrollpolygon aus untypisierten Zahlenfolgen (Dokument, Plugins).
    ///
    /// Jeder Eintrag muss genau zwei Komponenten haben.
    pub fn set_control_points_from_slices<P: AsRef<[f64]>>(
        &mut self,
        points: &[P],
    ) -> Result<bool, CurveError> {
        let points = parse_control_points(points)?;
        self.set_control_points(points)
    }

    /// Setzt den angeforderten Grad (>= 1).
    pub fn set_degree(&mut self, degree: usize) -> Result<bool, CurveError> {
        if degree == 0 {
            return Err(CurveError::InvalidParameter {
                name: "degree",
                value: degree,
            });
        }
        if self.degree == degree {
            return Ok(false);
        }
        self.degree = degree;
        self.mark_dirty();
        Ok(true)
    }

    /// Setzt die Anzahl der Parameterschritte (1..=`MAX_STEPS`).
    pub fn set_steps(&mut self, steps: usize) -> Result<bool, CurveError> {
        if steps == 0 || steps > MAX_STEPS {
            return Err(CurveError::InvalidParameter {
                name: "steps",
                value: steps,
            });
        }
        if self.steps == steps {
            return Ok(false);
        }
        self.steps = steps;
        self.mark_dirty();
        Ok(true)
    }

    /// Setzt den Anker des Hintergrundbilds.
    pub fn set_background_anchor(&mut self, anchor: DVec2) -> bool {
        if self.background.anchor == anchor {
            return false;
        }
        self.background.anchor = anchor;
        self.mark_dirty();
        true
    }

    /// Setzt die Größe des Hintergrundbilds.
    pub fn set_background_size(&mut self, size: DVec2) -> bool {
        if self.background.size == size {
            return false;
        }
        self.background.size = size;
        self.mark_dirty();
        true
    }

    /// Setzt das Delta der internen Verfeinerung; Werte außerhalb `(0, 1]` werden ignoriert.
    pub fn set_eval_delta(&mut self, delta: f64) -> bool {
        if !(delta > 0.0 && delta <= 1.0) || self.eval_delta == delta {
            return false;
        }
        self.eval_delta = delta;
        self.mark_dirty();
        true
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    // ── Abgeleitete Daten ───────────────────────────────────────────

    /// Kurvenpunkte bei `t = i / steps`, `i = 0..=steps`.
    pub fn positions(&mut self) -> &[DVec2] {
        self.rebuild();
        &self.positions
    }

    /// Einheits-Tangenten je Sample (Null-Vektor bei verschwindender Ableitung).
    pub fn tangents(&mut self) -> &[DVec2] {
        self.rebuild();
        &self.tangents
    }

    /// Tangentenwinkel in Grad, Bildschirm-Konvention (Y nach unten, im Uhrzeigersinn positiv).
    pub fn tangent_angles(&mut self) -> &[f64] {
        self.rebuild();
        &self.tangent_angles
    }

    /// Zuletzt gebaute Kurvendefinition.
    pub fn curve(&mut self) -> Option<&NurbsCurve> {
        self.rebuild();
        self.curve.as_ref()
    }

    /// Alle drei Sample-Folgen aus demselben Rebuild, read-only für Exporter.
    pub fn curve_data(&mut self) -> CurveData<'_> {
        self.rebuild();
        CurveData {
            curve: &self.positions,
            tangents: &self.tangents,
            tangent_angles: &self.tangent_angles,
        }
    }

    /// Baut Kurvendefinition und Samples neu auf, falls der Cache veraltet ist.
    pub fn rebuild(&mut self) {
        if !self.dirty {
            return;
        }

        self.dirty = false;
        self.rebuild_count += 1;
        self.curve = None;
        self.positions.clear();
        self.tangents.clear();
        self.tangent_angles.clear();

        let point_count = self.control_points.len();
        if point_count < MIN_CURVE_POINTS {
            log::debug!(
                "Kurve undefiniert: {} Kontrollpunkte (mindestens {})",
                point_count,
                MIN_CURVE_POINTS
            );
            return;
        }

        let degree = effective_degree(point_count, self.degree);
        let curve = match synthesize_knot_vector(degree, point_count).and_then(|knots| {
            NurbsCurve::with_uniform_weights(degree, self.control_points.clone(), knots)
        }) {
            Ok(curve) => curve.with_delta(self.eval_delta),
            Err(e) => {
                // Invariante verletzt: effective_degree garantiert die Vorbedingung
                log::error!("Kurvenaufbau fehlgeschlagen: {}", e);
                return;
            }
        };

        let sample_count = self.steps + 1;
        self.positions.reserve(sample_count);
        self.tangents.reserve(sample_count);
        self.tangent_angles.reserve(sample_count);

        let steps = self.steps as f64;
        let mut degenerate = 0usize;
        for i in 0..=self.steps {
            let t = i as f64 / steps;
            let ders = curve.derivatives(t, 1);
            let tangent = ders[1].normalize_or_zero();
            if tangent == DVec2::ZERO {
                degenerate += 1;
            }

            self.positions.push(ders[0]);
            self.tangents.push(tangent);
            self.tangent_angles.push(-tangent.y.atan2(tangent.x).to_degrees());
        }

        if degenerate > 0 {
            log::debug!(
                "{} von {} Samples mit verschwindender Tangente (Null-Vektor)",
                degenerate,
                sample_count
            );
        }
        log::debug!(
            "Kurve neu aufgebaut: {} Punkte, Grad {} (angefordert {}), {} Samples",
            point_count,
            degree,
            self.degree,
            sample_count
        );

        self.curve = Some(curve);
    }
}

/// Prüft untypisierte Punktdaten auf genau zwei Komponenten.
pub(crate) fn parse_control_points<P: AsRef<[f64]>>(
    points: &[P],
) -> Result<Vec<DVec2>, CurveError> {
    points
        .iter()
        .enumerate()
        .map(|(index, point)| match point.as_ref() {
            [x, y] => Ok(DVec2::new(*x, *y)),
            other => Err(CurveError::InvalidControlPoint {
                index,
                reason: format!("{} Komponenten statt 2", other.len()),
            }),
        })
        .collect()
}
