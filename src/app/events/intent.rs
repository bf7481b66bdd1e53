use crate::shared::EditorOptions;
use glam::DVec2;
use std::path::PathBuf;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Kurvendokument laden
    OpenFileRequested { path: PathBuf },
    /// Unter dem aktuellen Pfad speichern
    SaveRequested,
    /// Unter neuem Pfad speichern
    SaveAsRequested { path: PathBuf },
    /// Anwendung beenden
    ExitRequested,
    /// Kontrollpolygon komplett ersetzt (z.B. nach Drag im Editor)
    ControlPointsEdited { points: Vec<DVec2> },
    /// Neuer Kontrollpunkt am Ende des Polygons
    ControlPointAppendRequested { position: DVec2 },
    /// Kontrollpunkt verschoben
    ControlPointDragged { index: usize, position: DVec2 },
    /// Kontrollpunkt entfernen
    ControlPointRemoveRequested { index: usize },
    /// Grad geändert
    DegreeChanged { degree: usize },
    /// Schrittanzahl geändert
    StepsChanged { steps: usize },
    /// Hintergrundbild verschoben
    BackgroundMoved { anchor: DVec2 },
    /// Hintergrundbild skaliert
    BackgroundResized { size: DVec2 },
    /// Letzte Kurven-Bearbeitung rückgängig machen
    UndoRequested,
    /// Rückgängig gemachte Bearbeitung wiederholen
    RedoRequested,
    /// Übersicht der aktuellen Samples ausgeben
    SummaryRequested,
    /// Kurvendaten als Zuweisung exportieren
    ExportRequested { path: PathBuf },
    /// Externes Plugin mit den Kurvendaten ausführen
    PluginRunRequested { program: PathBuf, args: Vec<String> },
    /// Optionen übernehmen
    OptionsChanged { options: Box<EditorOptions> },
}
