//! Zentrale Konfiguration für den NURBS-Path-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use nurbs_path_engine::{DEFAULT_DEGREE, DEFAULT_STEPS, MAX_STEPS, NURBS_EVAL_DELTA};
use serde::{Deserialize, Serialize};

// ── Export ──────────────────────────────────────────────────────────

/// Variablenname der Zuweisung beim Export (`curve = {...};`).
pub const EXPORT_VARIABLE_NAME: &str = "curve";

/// Dateiname der Optionen neben der Binary.
pub const CONFIG_FILE_NAME: &str = "nurbs_path_editor.toml";

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `nurbs_path_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    // ── Kurve ───────────────────────────────────────────────────
    /// Grad einer neuen Kurve
    pub default_degree: usize,
    /// Parameterschritte einer neuen Kurve
    pub default_steps: usize,
    /// Delta der internen Verfeinerung (Polyline, Längen-Schätzung)
    pub curve_delta: f64,

    // ── Export ──────────────────────────────────────────────────
    /// Variablenname für den Zuweisungs-Export
    pub export_variable_name: String,
    /// Dokumente und Exporte eingerückt schreiben
    pub pretty_json: bool,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            default_degree: DEFAULT_DEGREE,
            default_steps: DEFAULT_STEPS,
            curve_delta: NURBS_EVAL_DELTA,
            export_variable_name: EXPORT_VARIABLE_NAME.to_string(),
            pretty_json: true,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Gibt Standardwerte zurück bei Fehler.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Pfad der Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("nurbs-path-editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join(CONFIG_FILE_NAME)
    }

    /// Ersetzt unbrauchbare Werte (0, Delta außerhalb `(0, 1]`) durch Standardwerte.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if self.default_degree == 0 {
            log::warn!("default_degree = 0 ungültig, verwende {}", defaults.default_degree);
            self.default_degree = defaults.default_degree;
        }
        if self.default_steps == 0 || self.default_steps > MAX_STEPS {
            log::warn!(
                "default_steps = {} ungültig, verwende {}",
                self.default_steps,
                defaults.default_steps
            );
            self.default_steps = defaults.default_steps;
        }
        if !(self.curve_delta > 0.0 && self.curve_delta <= 1.0) {
            log::warn!(
                "curve_delta = {} ungültig, verwende {}",
                self.curve_delta,
                defaults.curve_delta
            );
            self.curve_delta = defaults.curve_delta;
        }
        if self.export_variable_name.trim().is_empty() {
            self.export_variable_name = defaults.export_variable_name;
        }
        self
    }
}
