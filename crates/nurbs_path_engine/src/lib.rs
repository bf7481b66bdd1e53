//! NURBS-Path-Engine.
//! Knotenvektor-Synthese, Kurvenauswertung und Sample-Cache als Library
//! für Editor, Tests und Skript-Plugins.

pub mod core;
pub mod document;
pub mod plugin;
pub mod shared;

pub use crate::core::{
    effective_degree, synthesize_knot_vector, BackgroundPlacement, CurveError, CurveEvaluator,
    KnotVector, NurbsCurve,
};
pub use crate::core::{DEFAULT_DEGREE, DEFAULT_STEPS, MAX_STEPS, MIN_CURVE_POINTS, NURBS_EVAL_DELTA};
pub use document::CurveDocument;
pub use plugin::{AssignmentExportPlugin, CurveData, CurvePlugin, ProcessPlugin};
