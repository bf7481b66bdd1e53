use glam::DVec2;
use nurbs_path_editor::{AppController, AppIntent, AppState, CurveDocument};
use std::path::PathBuf;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "test_document_roundtrip_{}_{}",
        std::process::id(),
        name
    ))
}

const DOCUMENT: &str = r#"{
    "control_points": [[0, 0], [10, 25], [30, -5], [45, 20], [60, 0]],
    "steps": 20,
    "degree": 3,
    "background_position": [-12.5, 4],
    "background_size": [1920, 1080]
}"#;

#[test]
fn test_open_save_as_and_reload_keeps_samples() {
    let source = temp_path("source.json");
    let copy = temp_path("copy.json");
    std::fs::write(&source, DOCUMENT).unwrap();

    let mut controller = AppController::new();
    let mut state = AppState::new();
    controller
        .handle_intent(
            &mut state,
            AppIntent::OpenFileRequested {
                path: source.clone(),
            },
        )
        .expect("Dokument sollte laden");

    assert_eq!(state.ui.current_file_path.as_ref(), Some(&source));
    assert_eq!(state.curve.degree(), 3);
    assert_eq!(state.curve.steps(), 20);
    assert_eq!(state.curve.background().size, DVec2::new(1920.0, 1080.0));
    let samples = state.curve.positions().to_vec();
    assert_eq!(samples.len(), 21);

    controller
        .handle_intent(&mut state, AppIntent::SaveAsRequested { path: copy.clone() })
        .expect("Speichern sollte gelingen");
    assert_eq!(state.ui.current_file_path.as_ref(), Some(&copy));

    let mut reloaded = AppState::new();
    controller
        .handle_intent(
            &mut reloaded,
            AppIntent::OpenFileRequested { path: copy.clone() },
        )
        .unwrap();

    let _ = std::fs::remove_file(&source);
    let _ = std::fs::remove_file(&copy);

    assert_eq!(reloaded.curve.positions(), samples.as_slice());
    assert_eq!(reloaded.curve.background(), state.curve.background());
}

#[test]
fn test_save_requested_writes_to_loaded_path() {
    let path = temp_path("resave.json");
    std::fs::write(&path, DOCUMENT).unwrap();

    let mut controller = AppController::new();
    let mut state = AppState::new();
    controller
        .handle_intent(&mut state, AppIntent::OpenFileRequested { path: path.clone() })
        .unwrap();
    controller
        .handle_intent(&mut state, AppIntent::StepsChanged { steps: 64 })
        .unwrap();
    controller
        .handle_intent(&mut state, AppIntent::SaveRequested)
        .unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let _ = std::fs::remove_file(&path);
    let document = CurveDocument::from_json(&text).unwrap();
    assert_eq!(document.steps, Some(64));
    assert_eq!(document.degree, Some(3));
    assert_eq!(document.background_position, Some([-12.5, 4.0]));
}

#[test]
fn test_partial_document_only_touches_present_keys() {
    let path = temp_path("partial.json");
    std::fs::write(&path, r#"{"degree": 2, "extra": true}"#).unwrap();

    let mut controller = AppController::new();
    let mut state = AppState::new();
    controller
        .handle_intent(
            &mut state,
            AppIntent::ControlPointsEdited {
                points: vec![DVec2::ZERO, DVec2::X, DVec2::ONE],
            },
        )
        .unwrap();
    controller
        .handle_intent(&mut state, AppIntent::OpenFileRequested { path: path.clone() })
        .unwrap();
    let _ = std::fs::remove_file(&path);

    assert_eq!(state.curve.degree(), 2);
    assert_eq!(state.curve.steps(), 100);
    assert_eq!(state.control_point_count(), 3);
}

#[test]
fn test_broken_document_is_rejected() {
    let path = temp_path("broken.json");
    std::fs::write(&path, r#"{"control_points": [[1, 2, 3]]}"#).unwrap();

    let mut controller = AppController::new();
    let mut state = AppState::new();
    let result = controller.handle_intent(
        &mut state,
        AppIntent::OpenFileRequested { path: path.clone() },
    );
    let _ = std::fs::remove_file(&path);

    assert!(result.is_err());
    assert!(state.ui.current_file_path.is_none());
    assert_eq!(state.control_point_count(), 0);
}

#[test]
fn test_export_requested_writes_assignment() {
    let path = temp_path("export.js");
    let mut controller = AppController::new();
    let mut state = AppState::new();
    controller
        .handle_intent(
            &mut state,
            AppIntent::ControlPointsEdited {
                points: vec![
                    DVec2::new(0.0, 0.0),
                    DVec2::new(1.0, 2.0),
                    DVec2::new(3.0, 2.0),
                    DVec2::new(4.0, 0.0),
                ],
            },
        )
        .unwrap();
    controller
        .handle_intent(&mut state, AppIntent::StepsChanged { steps: 4 })
        .unwrap();
    controller
        .handle_intent(&mut state, AppIntent::ExportRequested { path: path.clone() })
        .unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let _ = std::fs::remove_file(&path);

    let json = text
        .strip_prefix("curve = ")
        .and_then(|rest| rest.strip_suffix(";\n"))
        .expect("Zuweisungsformat erwartet");
    let value: serde_json::Value = serde_json::from_str(json).unwrap();
    assert_eq!(value["curve"].as_array().map(|a| a.len()), Some(5));
    assert_eq!(value["tangents"].as_array().map(|a| a.len()), Some(5));
    assert_eq!(value["tangentAngles"].as_array().map(|a| a.len()), Some(5));
    assert_eq!(
        state.ui.last_plugin_result.as_ref().map(|r| r["bytes"].clone()),
        Some(serde_json::json!(text.len()))
    );
}
