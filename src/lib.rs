//! NURBS-Path-Editor Library.
//! Application-Layer und Optionen als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod shared;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, CurveSnapshot, EditHistory, UiState,
};
pub use nurbs_path_engine::{
    BackgroundPlacement, CurveData, CurveDocument, CurveError, CurveEvaluator, CurvePlugin,
    NurbsCurve,
};
pub use shared::EditorOptions;
