//! Estimator state integration tests

use kitchenkit_core::{Finish, IssueKind, Shape, ViewMode, WallKey};
use kitchenkit_designer::EstimatorState;

#[test]
fn test_estimator_state_complete_workflow() {
    let mut state = EstimatorState::new();
    state.set_wardrobe_width(0.0).unwrap();

    // Linear kitchen at its minimum
    assert_eq!(state.plan().walls.len(), 1);
    let base_total = state.estimate().total;
    assert!((base_total - (49_200.0 + 30_000.0)).abs() < 1e-6);

    // Switch to L and grow wall B
    state.set_shape("L").unwrap();
    assert_eq!(state.shape(), Shape::LShape);
    state.set_length_text(WallKey::B, "12ft").unwrap();
    assert_eq!(state.plan().walls.len(), 2);
    assert!(state.estimate().total > base_total);

    // Out-of-range input is clamped and reported
    let issue = state.set_length(WallKey::B, 50.0).unwrap_err();
    assert!(matches!(issue.kind, IssueKind::ClampedDown { .. }));
    assert_eq!(state.length_ft(WallKey::B), 20.0);

    // Finish upgrades raise the total
    let before = state.estimate().total;
    state.set_finish_kind(Finish::Luxury);
    assert!(state.estimate().total > before);

    // View mode flips and the asset follows the shape
    assert_eq!(state.toggle_view_mode(), ViewMode::Model);
    assert_eq!(state.model_asset(), "models/kitchen_lshape.glb");

    // Viewport fit is stable
    let t = state.view_transform(1200.0, 600.0, 0.12);
    assert!(t.scale > 0.0);
}

#[test]
fn test_nan_length_falls_back_to_minimum() {
    let mut state = EstimatorState::new();
    state.set_shape_kind(Shape::U);
    let issue = state.set_length(WallKey::C, f64::NAN).unwrap_err();
    assert!(matches!(issue.kind, IssueKind::NotFinite { .. }));
    assert_eq!(state.length_ft(WallKey::C), 8.0);
}

#[test]
fn test_state_serializes() {
    let mut state = EstimatorState::new();
    state.set_shape_kind(Shape::Parallel);
    let json = serde_json::to_string(&state).unwrap();
    let back: EstimatorState = serde_json::from_str(&json).unwrap();
    assert_eq!(back, state);
}
