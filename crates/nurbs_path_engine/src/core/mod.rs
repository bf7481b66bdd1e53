//! Core-Domänentypen: Knotenvektor, NURBS-Kurve, Evaluator mit Cache.

pub mod error;
pub mod evaluator;
pub mod knot_vector;
pub mod nurbs;

pub use error::CurveError;
pub use evaluator::{BackgroundPlacement, CurveEvaluator};
pub use knot_vector::{effective_degree, synthesize_knot_vector, KnotVector};
pub use nurbs::NurbsCurve;

/// Standard-Grad einer neuen Kurve.
pub const DEFAULT_DEGREE: usize = 4;
/// Standard-Anzahl der Parameterschritte (ergibt `steps + 1` Samples).
pub const DEFAULT_STEPS: usize = 100;
/// Obergrenze der Parameterschritte pro Kurve.
pub const MAX_STEPS: usize = 1_000_000;
/// Auswertungs-Delta für interne Verfeinerung (Polyline, Längen-Schätzung).
pub const NURBS_EVAL_DELTA: f64 = 0.05;
/// Unterhalb dieser Kontrollpunkt-Anzahl ist die Kurve undefiniert.
pub const MIN_CURVE_POINTS: usize = 3;
