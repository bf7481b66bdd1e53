//! JSON-Dokument der Editor-Kurve.
//!
//! Format: `{"control_points": [[x, y], ..], "steps": n, "degree": n,
//! "background_position": [x, y], "background_size": [w, h]}`.
//! Alle Schlüssel sind optional, unbekannte Schlüssel werden ignoriert.

use crate::core::evaluator::parse_control_points;
use crate::core::{CurveError, CurveEvaluator, MAX_STEPS};
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Persistierter Zustand eines `CurveEvaluator`.
///
/// Fehlende Felder lassen den Evaluator beim Anwenden unverändert.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurveDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_points: Option<Vec<Vec<f64>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub degree: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_position: Option<[f64; 2]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_size: Option<[f64; 2]>,
}

impl CurveDocument {
    /// Liest ein Dokument aus JSON-Text.
    pub fn from_json(text: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Schreibt das Dokument als JSON-Text.
    pub fn to_json(&self, pretty: bool) -> anyhow::Result<String> {
        let text = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(text)
    }

    /// Erfasst den kompletten Zustand des Evaluators (alle fünf Felder gesetzt).
    pub fn capture(evaluator: &CurveEvaluator) -> Self {
        let background = evaluator.background();
        Self {
            control_points: Some(
                evaluator
                    .control_points()
                    .iter()
                    .map(|p| vec![p.x, p.y])
                    .collect(),
            ),
            steps: Some(evaluator.steps()),
            degree: Some(evaluator.degree()),
            background_position: Some(background.anchor.to_array()),
            background_size: Some(background.size.to_array()),
        }
    }

    /// Prüft alle gesetzten Felder, ohne einen Evaluator zu verändern.
    pub fn validate(&self) -> Result<(), CurveError> {
        if self.degree == Some(0) {
            return Err(CurveError::InvalidParameter {
                name: "degree",
                value: 0,
            });
        }
        if let Some(steps) = self.steps.filter(|&s| s == 0 || s > MAX_STEPS) {
            return Err(CurveError::InvalidParameter {
                name: "steps",
                value: steps,
            });
        }
        if let Some(points) = &self.control_points {
            let parsed = parse_control_points(points)?;
            if let Some(index) = parsed.iter().position(|p| !p.is_finite()) {
                return Err(CurveError::InvalidControlPoint {
                    index,
                    reason: format!("nicht-endliche Koordinate {:?}", parsed[index]),
                });
            }
        }
        Ok(())
    }

    /// Überträgt das Dokument auf den Evaluator.
    ///
    /// Alles-oder-nichts: Schlägt die Prüfung fehl, bleibt der Evaluator
    /// unverändert. Gibt `true` zurück, wenn sich mindestens ein Wert geändert hat.
    pub fn apply_to(&self, evaluator: &mut CurveEvaluator) -> Result<bool, CurveError> {
        self.validate()?;

        let mut changed = false;
        if let Some(steps) = self.steps {
            changed |= evaluator.set_steps(steps)?;
        }
        if let Some(degree) = self.degree {
            changed |= evaluator.set_degree(degree)?;
        }
        if let Some(points) = &self.control_points {
            changed |= evaluator.set_control_points_from_slices(points)?;
        }
        if let Some(position) = self.background_position {
            changed |= evaluator.set_background_anchor(DVec2::from_array(position));
        }
        if let Some(size) = self.background_size {
            changed |= evaluator.set_background_size(DVec2::from_array(size));
        }

        log::debug!("Dokument angewendet (Änderung: {})", changed);
        Ok(changed)
    }
}
