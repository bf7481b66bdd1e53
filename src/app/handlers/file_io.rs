//! Handler für Datei-Operationen (Laden, Speichern).

use crate::app::use_cases;
use crate::app::AppState;
use std::path::PathBuf;

/// Lädt ein Kurvendokument aus dem übergebenen Pfad.
pub fn load(state: &mut AppState, path: PathBuf) -> anyhow::Result<()> {
    use_cases::file_io::load_document(state, &path)
}

/// Speichert das Kurvendokument.
///
/// `None` speichert unter dem aktuell bekannten Pfad.
/// `Some(p)` speichert explizit unter dem neuen Pfad `p`.
pub fn save(state: &mut AppState, path: Option<PathBuf>) -> anyhow::Result<()> {
    match path {
        Some(path) => use_cases::file_io::save_file_as(state, &path),
        None => use_cases::file_io::save_current_file(state),
    }
}
