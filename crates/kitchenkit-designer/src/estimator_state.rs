//! Estimator state manager for UI integration.
//!
//! Holds the only mutable inputs of the engine (kitchen, wardrobe, view mode)
//! and derives plan, view transform and estimate from them on every read.
//! Every setter stores a valid value: out-of-range numbers are clamped and
//! loose text is normalised. When the stored value differs from the input
//! the setter returns `Err(ValidationIssue)` describing the adjustment.

use kitchenkit_core::constants::LINEAR_MIN_WALL_FT;
use kitchenkit_core::{
    clamp_reported, parse_feet, Finish, IssueKind, KitchenData, Shape, ValidationIssue, ViewMode,
    WallKey, WardrobeData,
};
use kitchenkit_pricing::{Estimate, PriceBook};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::plan::KitchenPlan;
use crate::viewport::ViewTransform;

type SetResult<T> = Result<T, ValidationIssue>;

fn length_field(key: WallKey) -> String {
    format!("length.{}", key)
}

fn report<T>(result: SetResult<T>) -> SetResult<T> {
    if let Err(issue) = &result {
        warn!("Adjusted input: {}", issue);
    }
    result
}

/// Estimator state for UI integration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimatorState {
    kitchen: KitchenData,
    wardrobe: WardrobeData,
    view_mode: ViewMode,
    #[serde(default)]
    price_book: PriceBook,
}

impl EstimatorState {
    /// Creates a new estimator with a minimum-length linear kitchen.
    pub fn new() -> Self {
        Self {
            kitchen: KitchenData::default(),
            wardrobe: WardrobeData::default(),
            view_mode: ViewMode::default(),
            price_book: PriceBook::default(),
        }
    }

    pub fn with_price_book(mut self, price_book: PriceBook) -> Self {
        self.price_book = price_book;
        self
    }

    pub fn kitchen(&self) -> &KitchenData {
        &self.kitchen
    }

    pub fn wardrobe(&self) -> &WardrobeData {
        &self.wardrobe
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn shape(&self) -> Shape {
        self.kitchen.shape
    }

    pub fn length_ft(&self, key: WallKey) -> f64 {
        self.kitchen.length_ft(key)
    }

    /// Allowed `[min, max]` wall length for `shape`.
    ///
    /// A stored maximum below the minimum (or NaN) collapses to the minimum.
    fn wall_range(&self, shape: Shape) -> (f64, f64) {
        let min = shape.min_length_ft();
        (min, self.kitchen.per_wall_max_ft.max(min))
    }

    /// Sets the shape from loose text (case-insensitive, trimmed).
    ///
    /// Unrecognised text selects [`Shape::Linear`] and reports it.
    pub fn set_shape(&mut self, input: &str) -> SetResult<Shape> {
        match input.parse::<Shape>() {
            Ok(shape) => {
                self.set_shape_kind(shape);
                Ok(shape)
            }
            Err(_) => {
                self.set_shape_kind(Shape::Linear);
                report(Err(ValidationIssue::new(
                    "shape",
                    IssueKind::Normalized {
                        input: input.to_string(),
                        applied: Shape::Linear.to_string(),
                    },
                )))
            }
        }
    }

    /// Switches shape, keeping lengths of walls the new shape shares.
    ///
    /// Carried lengths are re-clamped to the new shape's range; new walls
    /// start at the shape minimum.
    pub fn set_shape_kind(&mut self, shape: Shape) {
        if shape == self.kitchen.shape {
            return;
        }
        let (min, max) = self.wall_range(shape);
        let lengths = shape
            .wall_keys()
            .iter()
            .map(|key| {
                let carried = self.kitchen.lengths.get(key).copied().unwrap_or(min);
                (*key, carried.clamp(min, max))
            })
            .collect();
        debug!("Shape changed {} -> {}", self.kitchen.shape, shape);
        self.kitchen.shape = shape;
        self.kitchen.lengths = lengths;
    }

    /// Sets the kitchen finish from loose text; unknown text selects essential.
    pub fn set_finish(&mut self, input: &str) -> SetResult<Finish> {
        let (finish, result) = parse_finish("finish", input);
        self.kitchen.finish = finish;
        report(result)
    }

    pub fn set_finish_kind(&mut self, finish: Finish) {
        self.kitchen.finish = finish;
    }

    /// Sets one wall length in feet, clamped to `[shape minimum, per-wall max]`.
    ///
    /// A wall the current shape does not use is ignored.
    pub fn set_length(&mut self, key: WallKey, feet: f64) -> SetResult<f64> {
        let field = length_field(key);
        if !self.kitchen.shape.wall_keys().contains(&key) {
            return report(Err(ValidationIssue::new(
                field,
                IssueKind::Ignored {
                    reason: format!("{} kitchen has no wall {}", self.kitchen.shape, key),
                },
            )));
        }

        let (min, max) = self.wall_range(self.kitchen.shape);
        let result = clamp_reported(&field, feet, min, max);
        let applied = match &result {
            Ok(v) => *v,
            Err(issue) => issue.applied_value().unwrap_or(min),
        };
        self.kitchen.lengths.insert(key, applied);
        report(result)
    }

    /// Parses a typed length (`10`, `10ft`, `10' 6"`) and stores it.
    ///
    /// Unparseable text leaves the stored length unchanged.
    pub fn set_length_text(&mut self, key: WallKey, input: &str) -> SetResult<f64> {
        match parse_feet(input) {
            Ok(feet) => self.set_length(key, feet),
            Err(e) => report(Err(ValidationIssue::new(
                length_field(key),
                IssueKind::Ignored {
                    reason: e.to_string(),
                },
            ))),
        }
    }

    /// Sets the per-wall maximum and re-clamps every stored length under it.
    ///
    /// The maximum never drops below the single-wall minimum.
    pub fn set_per_wall_max(&mut self, feet: f64) -> SetResult<f64> {
        let result = clamp_reported("per_wall_max", feet, LINEAR_MIN_WALL_FT, f64::MAX);
        let applied = match &result {
            Ok(v) => *v,
            Err(issue) => issue.applied_value().unwrap_or(LINEAR_MIN_WALL_FT),
        };
        self.kitchen.per_wall_max_ft = applied;
        let (min, max) = self.wall_range(self.kitchen.shape);
        for length in self.kitchen.lengths.values_mut() {
            *length = length.clamp(min, max);
        }
        report(result)
    }

    /// Sets the wardrobe width in feet, clamped to `[0, max width]`.
    pub fn set_wardrobe_width(&mut self, feet: f64) -> SetResult<f64> {
        let max = self.wardrobe.max_width_ft.max(0.0);
        let result = clamp_reported("wardrobe.width", feet, 0.0, max);
        self.wardrobe.width_ft = match &result {
            Ok(v) => *v,
            Err(issue) => issue.applied_value().unwrap_or(0.0),
        };
        report(result)
    }

    /// Sets the wardrobe width ceiling; the current width is re-clamped under it.
    pub fn set_wardrobe_max_width(&mut self, feet: f64) -> SetResult<f64> {
        let result = clamp_reported("wardrobe.max_width", feet, 0.0, f64::MAX);
        self.wardrobe.max_width_ft = match &result {
            Ok(v) => *v,
            Err(issue) => issue.applied_value().unwrap_or(0.0),
        };
        self.wardrobe.width_ft = self.wardrobe.width_ft.min(self.wardrobe.max_width_ft);
        report(result)
    }

    pub fn set_wardrobe_finish(&mut self, input: &str) -> SetResult<Finish> {
        let (finish, result) = parse_finish("wardrobe.finish", input);
        self.wardrobe.finish = finish;
        report(result)
    }

    pub fn set_wardrobe_finish_kind(&mut self, finish: Finish) {
        self.wardrobe.finish = finish;
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    pub fn toggle_view_mode(&mut self) -> ViewMode {
        self.view_mode = self.view_mode.toggled();
        self.view_mode
    }

    /// Pre-baked 3D asset for the current shape.
    pub fn model_asset(&self) -> &'static str {
        self.kitchen.shape.model_asset()
    }

    /// Derives the 2D plan from the current inputs.
    pub fn plan(&self) -> KitchenPlan {
        KitchenPlan::for_kitchen(&self.kitchen)
    }

    /// Derives the transform that fits the plan into a viewport.
    pub fn view_transform(&self, view_w: f64, view_h: f64, padding_ratio: f64) -> ViewTransform {
        self.plan().fit(view_w, view_h, padding_ratio)
    }

    /// Derives the price breakdown from the current inputs.
    pub fn estimate(&self) -> Estimate {
        self.price_book.estimate(&self.kitchen, &self.wardrobe)
    }
}

impl Default for EstimatorState {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_finish(field: &str, input: &str) -> (Finish, SetResult<Finish>) {
    match input.parse::<Finish>() {
        Ok(finish) => (finish, Ok(finish)),
        Err(_) => (
            Finish::Essential,
            Err(ValidationIssue::new(
                field,
                IssueKind::Normalized {
                    input: input.to_string(),
                    applied: Finish::Essential.to_string(),
                },
            )),
        ),
    }
}
