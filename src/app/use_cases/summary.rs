//! Use-Case: Kompakte Übersicht über die aktuelle Kurve.

use crate::app::AppState;
use glam::DVec2;
use nurbs_path_engine::{effective_degree, MIN_CURVE_POINTS};
use std::fmt;

/// Kennzahlen der aktuellen Kurve für Statuszeile und Headless-Ausgabe.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveSummary {
    pub control_points: usize,
    pub requested_degree: usize,
    /// Grad nach Begrenzung durch die Kontrollpunkt-Anzahl
    pub effective_degree: usize,
    pub samples: usize,
    /// Länge der Polyline mit dem Auswertungs-Delta (0 ohne Kurve)
    pub approximate_length: f64,
    /// Erstes Sample: Position und Tangentenwinkel
    pub start: Option<(DVec2, f64)>,
    /// Letztes Sample: Position und Tangentenwinkel
    pub end: Option<(DVec2, f64)>,
}

impl fmt::Display for CurveSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} Kontrollpunkte, Grad {} (angefordert {}), {} Samples, Länge ≈ {:.3}",
            self.control_points,
            self.effective_degree,
            self.requested_degree,
            self.samples,
            self.approximate_length
        )?;
        if let (Some((start, start_angle)), Some((end, end_angle))) = (self.start, self.end) {
            write!(
                f,
                ", Start ({:.3}, {:.3}) {:.2}°, Ende ({:.3}, {:.3}) {:.2}°",
                start.x, start.y, start_angle, end.x, end.y, end_angle
            )?;
        }
        Ok(())
    }
}

/// Berechnet die Übersicht; baut den Cache bei Bedarf neu auf.
pub fn summarize(state: &mut AppState) -> CurveSummary {
    let control_points = state.control_point_count();
    let requested_degree = state.curve.degree();
    let approximate_length = state
        .curve
        .curve()
        .map_or(0.0, |curve| curve.approximate_length());

    let data = state.curve.curve_data();
    let sample = |i: usize| Some((*data.curve.get(i)?, *data.tangent_angles.get(i)?));

    CurveSummary {
        control_points,
        requested_degree,
        effective_degree: effective_degree(control_points, requested_degree),
        samples: data.len(),
        approximate_length,
        start: sample(0),
        end: data.len().checked_sub(1).and_then(sample),
    }
}

/// Erstellt die Übersicht, loggt sie und legt sie im UI-State ab.
pub fn report_summary(state: &mut AppState) {
    let summary = summarize(state);
    if summary.samples == 0 {
        log::info!(
            "Keine Kurve: {} Kontrollpunkte (mindestens {} nötig)",
            summary.control_points,
            MIN_CURVE_POINTS
        );
    } else {
        log::info!("Kurve: {}", summary);
    }
    state.ui.status_message = Some(summary.to_string());
    state.ui.last_summary = Some(summary);
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_summary_of_arch_curve() {
        let mut state = AppState::new();
        state
            .curve
            .set_control_points(vec![
                DVec2::new(0.0, 0.0),
                DVec2::new(1.0, 2.0),
                DVec2::new(3.0, 2.0),
                DVec2::new(4.0, 0.0),
            ])
            .unwrap();
        state.curve.set_steps(4).unwrap();

        report_summary(&mut state);
        let summary = state.ui.last_summary.clone().expect("Übersicht erwartet");

        assert_eq!(summary.control_points, 4);
        assert_eq!(summary.requested_degree, 4);
        assert_eq!(summary.effective_degree, 3);
        assert_eq!(summary.samples, 5);
        assert!(summary.approximate_length > 4.0);
        let (start, start_angle) = summary.start.unwrap();
        let (end, end_angle) = summary.end.unwrap();
        assert_eq!(start, DVec2::ZERO);
        assert_relative_eq!(end.x, 4.0, epsilon = 1e-12);
        assert_relative_eq!(start_angle, -end_angle, epsilon = 1e-9);
        assert!(state.ui.status_message.unwrap().contains("5 Samples"));
    }

    #[test]
    fn test_summary_without_curve() {
        let mut state = AppState::new();
        state
            .curve
            .set_control_points(vec![DVec2::ZERO, DVec2::X])
            .unwrap();

        let summary = summarize(&mut state);

        assert_eq!(summary.samples, 0);
        assert_eq!(summary.effective_degree, 1);
        assert_eq!(summary.approximate_length, 0.0);
        assert!(summary.start.is_none());
        assert!(summary.end.is_none());
    }
}
