use super::*;
use crate::app::AppState;
use crate::shared::EditorOptions;
use glam::DVec2;

fn state_with_square() -> AppState {
    let mut state = AppState::new();
    set_control_points(
        &mut state,
        vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(10.0, 0.0),
            DVec2::new(10.0, 10.0),
            DVec2::new(0.0, 10.0),
        ],
    )
    .expect("gültige Kontrollpunkte");
    state
}

#[test]
fn test_append_and_remove_control_point() {
    let mut state = state_with_square();

    append_control_point(&mut state, DVec2::new(-5.0, 5.0)).unwrap();
    assert_eq!(state.control_point_count(), 5);
    assert_eq!(state.curve.control_points()[4], DVec2::new(-5.0, 5.0));

    remove_control_point(&mut state, 0).unwrap();
    assert_eq!(state.control_point_count(), 4);
    assert_eq!(state.curve.control_points()[0], DVec2::new(10.0, 0.0));
}

#[test]
fn test_move_control_point_invalidates_samples() {
    let mut state = state_with_square();
    let before = state.curve.positions().to_vec();

    move_control_point(&mut state, 1, DVec2::new(20.0, -5.0)).unwrap();

    assert!(state.curve.is_dirty());
    assert_ne!(state.curve.positions(), before.as_slice());
}

#[test]
fn test_move_or_remove_out_of_range_is_noop() {
    let mut state = state_with_square();
    state.curve.positions();

    move_control_point(&mut state, 9, DVec2::ZERO).unwrap();
    remove_control_point(&mut state, 4).unwrap();

    assert_eq!(state.control_point_count(), 4);
    assert!(!state.curve.is_dirty());
}

#[test]
fn test_non_finite_point_is_rejected_with_status_message() {
    let mut state = state_with_square();

    let result = append_control_point(&mut state, DVec2::new(f64::INFINITY, 0.0));

    assert!(result.is_err());
    assert_eq!(state.control_point_count(), 4);
    assert!(state
        .ui
        .status_message
        .as_deref()
        .is_some_and(|msg| msg.contains("#4")));
}

#[test]
fn test_invalid_degree_and_steps_keep_previous_values() {
    let mut state = AppState::new();
    set_degree(&mut state, 3).unwrap();
    set_steps(&mut state, 30).unwrap();

    assert!(set_degree(&mut state, 0).is_err());
    assert!(set_steps(&mut state, 0).is_err());

    assert_eq!(state.curve.degree(), 3);
    assert_eq!(state.curve.steps(), 30);
    assert!(state.ui.status_message.is_some());
}

#[test]
fn test_background_setters_forward_to_curve() {
    let mut state = AppState::new();

    set_background_anchor(&mut state, DVec2::new(4.0, 2.0));
    set_background_size(&mut state, DVec2::new(512.0, 256.0));

    assert_eq!(state.curve.background().anchor, DVec2::new(4.0, 2.0));
    assert_eq!(state.curve.background().size, DVec2::new(512.0, 256.0));
}

#[test]
fn test_apply_options_updates_delta_but_not_open_curve() {
    let mut state = state_with_square();
    let options = EditorOptions {
        default_degree: 2,
        default_steps: 7,
        curve_delta: 0.25,
        ..EditorOptions::default()
    };

    apply_options(&mut state, options);

    assert_eq!(state.options.default_degree, 2);
    assert_eq!(state.curve.degree(), EditorOptions::default().default_degree);
    assert_eq!(state.curve.eval_delta(), 0.25);
    assert_eq!(state.curve.curve().map(|c| c.polyline().len()), Some(5));
}
