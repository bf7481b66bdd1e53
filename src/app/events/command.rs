use crate::shared::EditorOptions;
use glam::DVec2;
use std::path::PathBuf;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Dokument aus Datei laden
    LoadFile { path: PathBuf },
    /// Speichern; `None` = aktueller Pfad
    SaveFile { path: Option<PathBuf> },
    /// Kontrollpolygon ersetzen
    SetControlPoints { points: Vec<DVec2> },
    /// Kontrollpunkt anhängen
    AppendControlPoint { position: DVec2 },
    /// Kontrollpunkt verschieben
    MoveControlPoint { index: usize, position: DVec2 },
    /// Kontrollpunkt entfernen
    RemoveControlPoint { index: usize },
    /// Grad setzen
    SetDegree { degree: usize },
    /// Schrittanzahl setzen
    SetSteps { steps: usize },
    /// Hintergrund-Anker setzen
    SetBackgroundAnchor { anchor: DVec2 },
    /// Hintergrund-Größe setzen
    SetBackgroundSize { size: DVec2 },
    /// Letzten Undo-Schritt anwenden
    Undo,
    /// Letzten Redo-Schritt anwenden
    Redo,
    /// Sample-Übersicht erstellen und loggen
    ReportSummary,
    /// Kurvendaten exportieren
    ExportCurve { path: PathBuf },
    /// Externes Plugin ausführen
    RunPlugin { program: PathBuf, args: Vec<String> },
    /// Optionen übernehmen
    ApplyOptions { options: Box<EditorOptions> },
    /// Anwendung beenden
    RequestExit,
}

impl AppCommand {
    /// Gibt `true` zurück, wenn der Command die Kurven-Eingaben ändern kann
    /// und deshalb einen Undo-Schritt erzeugt.
    pub fn is_undoable(&self) -> bool {
        matches!(
            self,
            Self::SetControlPoints { .. }
                | Self::AppendControlPoint { .. }
                | Self::MoveControlPoint { .. }
                | Self::RemoveControlPoint { .. }
                | Self::SetDegree { .. }
                | Self::SetSteps { .. }
                | Self::SetBackgroundAnchor { .. }
                | Self::SetBackgroundSize { .. }
        )
    }
}
