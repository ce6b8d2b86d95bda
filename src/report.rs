//! Headless report: one estimator state rendered as plain data.

use kitchenkit_core::{Rect, Shape, ViewMode};
use kitchenkit_designer::{EstimatorState, Placement, ViewTransform, Wall};
use kitchenkit_pricing::{Estimate, LineItem};
use kitchenkit_settings::ViewportSettings;
use serde::Serialize;

/// Pixel-space rectangles, ready to draw.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScreenRects {
    pub walls: Vec<Rect>,
    pub hob: Rect,
    pub sink: Rect,
}

/// Everything a front end shows for one state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub version: &'static str,
    pub shape: Shape,
    pub shape_label: &'static str,
    pub view_mode: ViewMode,
    pub model_asset: &'static str,
    pub walls: Vec<Wall>,
    pub hob: Placement,
    pub sink: Placement,
    pub appliances_overlap: bool,
    pub view: ViewTransform,
    pub screen: ScreenRects,
    pub estimate: Estimate,
    pub line_items: Vec<LineItem>,
}

impl Report {
    pub fn from_state(state: &EstimatorState, viewport: &ViewportSettings) -> Self {
        let plan = state.plan();
        let view = plan.fit(viewport.width, viewport.height, viewport.padding_ratio);
        let estimate = state.estimate();

        let to_px = |rect: &Rect| view.apply_rect(rect);
        let screen = ScreenRects {
            walls: plan.wall_rects().iter().map(to_px).collect(),
            hob: to_px(&plan.hob.rect()),
            sink: to_px(&plan.sink.rect()),
        };

        Self {
            version: crate::VERSION,
            shape: plan.shape,
            shape_label: plan.shape.label(),
            view_mode: state.view_mode(),
            model_asset: state.model_asset(),
            appliances_overlap: plan.appliances_overlap(),
            walls: plan.walls.to_vec(),
            hob: plan.hob,
            sink: plan.sink,
            view,
            screen,
            line_items: estimate.line_items(),
            estimate,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kitchenkit_core::WallKey;

    #[test]
    fn test_report_for_default_state() {
        let report = Report::from_state(&EstimatorState::new(), &ViewportSettings::default());
        assert_eq!(report.shape, Shape::Linear);
        assert_eq!(report.walls.len(), 1);
        assert_eq!(report.screen.walls.len(), 1);
        assert!(!report.appliances_overlap);

        let wall = report.screen.walls[0];
        assert!((wall.x - 144.0).abs() < 1e-6);
        assert!((wall.right() - 1056.0).abs() < 1e-6);
    }

    #[test]
    fn test_report_json_fields() {
        let mut state = EstimatorState::new();
        state.set_shape("u").unwrap();
        state.set_length(WallKey::B, 12.0).unwrap();
        state.set_length(WallKey::C, 8.0).unwrap();

        let json = Report::from_state(&state, &ViewportSettings::default())
            .to_json()
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["shape"], "u");
        assert_eq!(value["walls"].as_array().map(Vec::len), Some(3));
        // A carries over 10 ft from the linear default
        assert_eq!(value["estimate"]["total_run"], 30.0);
        assert_eq!(value["model_asset"], "models/kitchen_u.glb");
    }
}
