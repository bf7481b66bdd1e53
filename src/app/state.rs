//! Application State: zentrale Datenhaltung.

use super::use_cases::summary::CurveSummary;
use super::EditHistory;
use crate::shared::EditorOptions;
use nurbs_path_engine::CurveEvaluator;
use std::path::PathBuf;

/// Zustand der Statuszeile und Datei-Zuordnung
#[derive(Debug, Default)]
pub struct UiState {
    /// Pfad der aktuell geladenen Datei (für Save ohne Pfadangabe)
    pub current_file_path: Option<PathBuf>,
    /// Temporäre Statusnachricht (Laden, Speichern, Export)
    pub status_message: Option<String>,
    /// Ergebnis des zuletzt ausgeführten Plugins
    pub last_plugin_result: Option<serde_json::Value>,
    /// Zuletzt erstellte Sample-Übersicht
    pub last_summary: Option<CurveSummary>,
}

impl UiState {
    /// Erstellt einen leeren UI-State.
    pub fn new() -> Self {
        Self::default()
    }

    /// Dateiname der aktuellen Datei für die Titelzeile.
    pub fn current_file_name(&self) -> Option<String> {
        self.current_file_path
            .as_deref()
            .and_then(super::use_cases::file_io::file_name_of)
    }
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Kurve mit Kontrollpunkten, Parametern und Sample-Cache
    pub curve: CurveEvaluator,
    /// UI-State
    pub ui: UiState,
    /// Undo/Redo der Kurven-Bearbeitung
    pub history: EditHistory,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
    /// Signalisiert dem Host, die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Standard-Optionen
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen leeren App-State; Grad, Schritte und Delta kommen aus den Optionen.
    pub fn with_options(options: EditorOptions) -> Self {
        let options = options.sanitized();
        let mut curve =
            CurveEvaluator::with_parameters(options.default_degree, options.default_steps)
                .unwrap_or_default();
        curve.set_eval_delta(options.curve_delta);

        Self {
            curve,
            ui: UiState::new(),
            history: EditHistory::new_with_capacity(EditHistory::DEFAULT_DEPTH),
            options,
            should_exit: false,
        }
    }

    /// Gibt die Anzahl der Kontrollpunkte zurück (für Statusanzeige)
    pub fn control_point_count(&self) -> usize {
        self.curve.control_points().len()
    }

    /// Gibt die Anzahl der Samples zurück; baut den Cache bei Bedarf neu auf.
    pub fn sample_count(&mut self) -> usize {
        self.curve.positions().len()
    }
}
