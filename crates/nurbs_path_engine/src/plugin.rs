//! Plugin-Schnittstelle für Nachbearbeitung und Export der Kurvendaten.
//!
//! Plugins erhalten die Sample-Folgen read-only und liefern ein JSON-Ergebnis.
//! Externe Skripte laufen als Subprozess (`ProcessPlugin`), es gibt kein
//! Laden von Code über Dateipfade.

use anyhow::{bail, Context};
use glam::DVec2;
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// Read-only Sicht auf die drei Sample-Folgen eines Rebuilds.
///
/// Serialisiert als `{"curve": [[x, y], ..], "tangents": [[x, y], ..], "tangentAngles": [..]}`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CurveData<'a> {
    /// Sample-Positionen
    pub curve: &'a [DVec2],
    /// Einheits-Tangenten (Null-Vektor bei degenerierter Ableitung)
    pub tangents: &'a [DVec2],
    /// Tangentenwinkel in Grad
    #[serde(rename = "tangentAngles")]
    pub tangent_angles: &'a [f64],
}

impl CurveData<'_> {
    /// Anzahl der Samples.
    pub fn len(&self) -> usize {
        self.curve.len()
    }

    /// Gibt `true` zurück, wenn keine Kurve definiert ist.
    pub fn is_empty(&self) -> bool {
        self.curve.is_empty()
    }

    /// Serialisiert die Daten als JSON-Wert.
    pub fn to_json(&self) -> anyhow::Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Schnittstelle für Nachbearbeitungs- und Export-Plugins.
pub trait CurvePlugin {
    /// Anzeigename für Log und Statuszeile
    fn name(&self) -> &str;

    /// Verarbeitet die Kurvendaten. Darf die Daten nicht verändern.
    fn process(&self, data: &CurveData<'_>) -> anyhow::Result<serde_json::Value>;
}

/// Führt ein externes Programm aus und übergibt die Kurvendaten als JSON über stdin.
///
/// Stdout wird als JSON gelesen; leere Ausgabe ergibt `null`, Text ohne
/// gültiges JSON wird als String zurückgegeben.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessPlugin {
    pub program: PathBuf,
    pub args: Vec<String>,
}

impl ProcessPlugin {
    pub fn new(program: impl Into<PathBuf>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }
}

impl CurvePlugin for ProcessPlugin {
    fn name(&self) -> &str {
        self.program
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("process")
    }

    fn process(&self, data: &CurveData<'_>) -> anyhow::Result<serde_json::Value> {
        let payload = serde_json::to_vec(data)?;

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .with_context(|| {
                format!(
                    "Plugin {} konnte nicht gestartet werden",
                    self.program.display()
                )
            })?;

        // Schreiben in eigenem Thread: Plugins, die während des Lesens ausgeben,
        // würden sonst bei vollem stdout-Puffer blockieren
        let writer = child.stdin.take().map(|mut stdin| {
            std::thread::spawn(move || stdin.write_all(&payload))
        });

        let output = child
            .wait_with_output()
            .with_context(|| format!("Plugin {} nicht beendet", self.name()))?;

        if let Some(writer) = writer {
            match writer.join() {
                // Programme, die stdin nicht lesen, schließen die Pipe vorzeitig
                Ok(Err(e)) => log::debug!("Plugin {} hat stdin geschlossen: {}", self.name(), e),
                Ok(Ok(())) => {}
                Err(_) => bail!("Schreib-Thread für Plugin {} abgebrochen", self.name()),
            }
        }

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!(
                "Plugin {} fehlgeschlagen ({}): {}",
                self.name(),
                output.status,
                stderr.trim()
            );
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let trimmed = stdout.trim();
        if trimmed.is_empty() {
            return Ok(serde_json::Value::Null);
        }
        Ok(serde_json::from_str(trimmed)
            .unwrap_or_else(|_| serde_json::Value::String(trimmed.to_string())))
    }
}

/// Schreibt die Kurvendaten als Zuweisung `<variable> = <json>;` in eine Datei.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentExportPlugin {
    pub variable: String,
    pub path: PathBuf,
    /// Eingerücktes JSON statt einer Zeile
    pub pretty: bool,
}

impl AssignmentExportPlugin {
    pub fn new(variable: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            variable: variable.into(),
            path: path.into(),
            pretty: false,
        }
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Erzeugt den Dateiinhalt ohne zu schreiben.
    pub fn render(&self, data: &CurveData<'_>) -> anyhow::Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(data)?
        } else {
            serde_json::to_string(data)?
        };
        Ok(format!("{} = {};\n", self.variable, json))
    }
}

impl CurvePlugin for AssignmentExportPlugin {
    fn name(&self) -> &str {
        "assignment-export"
    }

    fn process(&self, data: &CurveData<'_>) -> anyhow::Result<serde_json::Value> {
        let text = self.render(data)?;
        std::fs::write(&self.path, &text)
            .with_context(|| format!("Export nach {} fehlgeschlagen", self.path.display()))?;

        log::info!(
            "Kurve exportiert: {} Samples nach {}",
            data.len(),
            self.path.display()
        );
        Ok(serde_json::json!({
            "path": self.path.display().to_string(),
            "bytes": text.len(),
        }))
    }
}
