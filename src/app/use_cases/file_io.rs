//! Use-Case-Funktionen für Dateiaktionen.
//! Alle Dateisystem-Operationen (I/O) sind hier zentralisiert.

use crate::app::AppState;
use anyhow::Context;
use nurbs_path_engine::CurveDocument;
use std::path::Path;

/// Lädt ein Kurvendokument und überträgt es auf die Kurve.
///
/// Fehlende Schlüssel lassen die Werte unverändert. Ein ungültiges Dokument
/// wird komplett verworfen; Kurve und Dateipfad bleiben dann unverändert.
pub fn load_document(state: &mut AppState, path: &Path) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Datei {} nicht lesbar", path.display()))?;
    let document = CurveDocument::from_json(&content)
        .with_context(|| format!("Fehler beim Parsen von {}", path.display()))?;

    document
        .apply_to(&mut state.curve)
        .with_context(|| format!("Ungültiges Kurvendokument {}", path.display()))?;

    // Merke Pfad für späteres Save
    state.ui.current_file_path = Some(path.to_path_buf());
    // Undo über Dateigrenzen hinweg ist nicht vorgesehen
    state.history.clear();

    log::info!(
        "Kurve geladen: {} Kontrollpunkte, Grad {}, {} Schritte",
        state.control_point_count(),
        state.curve.degree(),
        state.curve.steps()
    );
    state.ui.status_message = file_name_of(path).map(|name| format!("Geladen: {name}"));
    Ok(())
}

/// Speichert unter dem zuletzt verwendeten Pfad.
///
/// Ohne bekannten Pfad wird nichts geschrieben, nur die Statuszeile informiert.
pub fn save_current_file(state: &mut AppState) -> anyhow::Result<()> {
    let Some(path) = state.ui.current_file_path.clone() else {
        log::info!("Speichern übersprungen: kein Dateipfad bekannt");
        state.ui.status_message =
            Some("Kein Dateipfad bekannt, bitte 'Speichern unter' verwenden".to_string());
        return Ok(());
    };
    save_file_as(state, &path)
}

/// Speichert das Kurvendokument unter `path` und merkt den Pfad.
pub fn save_file_as(state: &mut AppState, path: &Path) -> anyhow::Result<()> {
    let document = CurveDocument::capture(&state.curve);
    let content = document.to_json(state.options.pretty_json)?;
    std::fs::write(path, content)
        .with_context(|| format!("Datei {} nicht schreibbar", path.display()))?;

    state.ui.current_file_path = Some(path.to_path_buf());
    log::info!("Kurve gespeichert nach: {}", path.display());
    state.ui.status_message = file_name_of(path).map(|name| format!("Gespeichert: {name}"));
    Ok(())
}

/// Prüft, ob unter `path` eine Datei oder ein Verzeichnis existiert.
pub fn file_exists(path: &Path) -> bool {
    path.exists()
}

/// Liefert den Dateinamen ohne Verzeichnis.
pub fn file_name_of(path: &Path) -> Option<String> {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("test_file_io_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_save_without_path_sets_status_only() {
        let mut state = AppState::new();

        save_current_file(&mut state).expect("Kein Fehler erwartet");

        assert!(state.ui.current_file_path.is_none());
        assert!(state.ui.status_message.is_some());
    }

    #[test]
    fn test_save_as_then_save_reuses_path() {
        let path = temp_path("reuse.json");
        let mut state = AppState::new();
        state
            .curve
            .set_control_points(vec![DVec2::ZERO, DVec2::X, DVec2::ONE])
            .unwrap();

        save_file_as(&mut state, &path).unwrap();
        assert_eq!(state.ui.current_file_path.as_deref(), Some(path.as_path()));

        state.curve.set_steps(7).unwrap();
        save_current_file(&mut state).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        let document = CurveDocument::from_json(&text).unwrap();
        assert_eq!(document.steps, Some(7));
        assert_eq!(document.control_points.map(|p| p.len()), Some(3));
    }

    #[test]
    fn test_load_invalid_document_keeps_state() {
        let path = temp_path("invalid.json");
        std::fs::write(&path, r#"{"degree": 0, "steps": 5}"#).unwrap();
        let mut state = AppState::new();

        let result = load_document(&mut state, &path);
        let _ = std::fs::remove_file(&path);

        assert!(result.is_err());
        assert_eq!(state.curve.steps(), 100);
        assert!(state.ui.current_file_path.is_none());
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let mut state = AppState::new();
        assert!(load_document(&mut state, &temp_path("does_not_exist.json")).is_err());
    }

    #[test]
    fn test_file_helpers() {
        assert_eq!(
            file_name_of(Path::new("/tmp/kurven/strecke.json")),
            Some("strecke.json".to_string())
        );
        assert_eq!(file_name_of(Path::new("/")), None);
        assert!(file_exists(&std::env::temp_dir()));
        assert!(!file_exists(&temp_path("nirgends.json")));
    }
}
