//! # Shape Schemas
//!
//! Declarative description of each kitchen shape: which walls exist, which
//! way they run, where they start, and which appliance sizes the shape uses.
//! Positions are expressed against the wall lengths so one schema covers
//! every length combination.

use kitchenkit_core::constants::{
    COUNTER_DEPTH_MM, DEFAULT_HOB_H_MM, DEFAULT_HOB_W_MM, DEFAULT_SINK_H_MM, DEFAULT_SINK_W_MM,
    GALLEY_GAP_MM,
};
use kitchenkit_core::{feet_to_mm, Orientation, Shape, WallKey};
use serde::{Deserialize, Serialize};

/// A wall origin coordinate, resolved against the wall lengths.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Coord {
    /// Fixed offset in millimetres from the plan origin
    Fixed(f64),
    /// Flush with the far end of another wall, one counter depth in
    AlignEnd(WallKey),
}

impl Coord {
    pub const ZERO: Coord = Coord::Fixed(0.0);
}

/// One wall run of a shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WallSchema {
    pub key: WallKey,
    pub orientation: Orientation,
    pub x: Coord,
    pub y: Coord,
}

impl WallSchema {
    pub const fn horizontal(key: WallKey, x: Coord, y: Coord) -> Self {
        Self {
            key,
            orientation: Orientation::Horizontal,
            x,
            y,
        }
    }

    pub const fn vertical(key: WallKey, x: Coord, y: Coord) -> Self {
        Self {
            key,
            orientation: Orientation::Vertical,
            x,
            y,
        }
    }
}

/// Appliances the layout engine places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplianceKind {
    Hob,
    Sink,
}

/// Appliance footprint: `w` runs along the counter, `h` across it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ApplianceSpec {
    pub kind: ApplianceKind,
    pub w: f64,
    pub h: f64,
}

impl ApplianceSpec {
    pub const fn new(kind: ApplianceKind, w: f64, h: f64) -> Self {
        Self { kind, w, h }
    }

    pub const fn default_hob() -> Self {
        Self::new(ApplianceKind::Hob, DEFAULT_HOB_W_MM, DEFAULT_HOB_H_MM)
    }

    pub const fn default_sink() -> Self {
        Self::new(ApplianceKind::Sink, DEFAULT_SINK_W_MM, DEFAULT_SINK_H_MM)
    }

    /// Width and height once the appliance is turned to `orientation`.
    pub fn oriented(&self, orientation: Orientation) -> (f64, f64) {
        match orientation {
            Orientation::Horizontal => (self.w, self.h),
            Orientation::Vertical => (self.h, self.w),
        }
    }
}

const TOP_A: WallSchema = WallSchema::horizontal(WallKey::A, Coord::ZERO, Coord::ZERO);

const LINEAR_WALLS: &[WallSchema] = &[TOP_A];

const PARALLEL_WALLS: &[WallSchema] = &[
    TOP_A,
    WallSchema::horizontal(
        WallKey::B,
        Coord::ZERO,
        Coord::Fixed(COUNTER_DEPTH_MM + GALLEY_GAP_MM),
    ),
];

const LSHAPE_WALLS: &[WallSchema] = &[
    TOP_A,
    WallSchema::vertical(WallKey::B, Coord::ZERO, Coord::ZERO),
];

// Base run across the top, legs hanging down from each end.
const U_WALLS: &[WallSchema] = &[
    WallSchema::vertical(WallKey::A, Coord::ZERO, Coord::ZERO),
    WallSchema::horizontal(WallKey::B, Coord::ZERO, Coord::ZERO),
    WallSchema::vertical(WallKey::C, Coord::AlignEnd(WallKey::B), Coord::ZERO),
];

/// Complete static description of one kitchen shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeSchema {
    pub shape: Shape,
    pub walls: Vec<WallSchema>,
    pub counter_depth: f64,
    /// Length used for a wall whose dimension is missing or zero (mm)
    pub min_length_mm: f64,
    /// Hob size override; `None` uses the default hob
    pub hob: Option<ApplianceSpec>,
    /// Sink size override; `None` uses the default sink
    pub sink: Option<ApplianceSpec>,
}

impl ShapeSchema {
    pub fn for_shape(shape: Shape) -> Self {
        let walls = match shape {
            Shape::Linear => LINEAR_WALLS,
            Shape::Parallel => PARALLEL_WALLS,
            Shape::LShape => LSHAPE_WALLS,
            Shape::U => U_WALLS,
        };
        Self {
            shape,
            walls: walls.to_vec(),
            counter_depth: COUNTER_DEPTH_MM,
            min_length_mm: feet_to_mm(shape.min_length_ft()),
            hob: None,
            sink: None,
        }
    }

    /// Schema for a loose shape key; unknown keys get the linear schema.
    pub fn for_key(key: &str) -> Self {
        Self::for_shape(Shape::normalize(key))
    }

    pub fn with_hob(mut self, w: f64, h: f64) -> Self {
        self.hob = Some(ApplianceSpec::new(ApplianceKind::Hob, w, h));
        self
    }

    pub fn with_sink(mut self, w: f64, h: f64) -> Self {
        self.sink = Some(ApplianceSpec::new(ApplianceKind::Sink, w, h));
        self
    }

    pub fn hob_spec(&self) -> ApplianceSpec {
        self.hob.unwrap_or_else(ApplianceSpec::default_hob)
    }

    pub fn sink_spec(&self) -> ApplianceSpec {
        self.sink.unwrap_or_else(ApplianceSpec::default_sink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_wall_counts_match_shape() {
        for shape in Shape::ALL {
            let schema = ShapeSchema::for_shape(shape);
            assert_eq!(schema.walls.len(), shape.wall_count());
            let keys: Vec<_> = schema.walls.iter().map(|w| w.key).collect();
            assert_eq!(keys, shape.wall_keys());
        }
    }

    #[test]
    fn test_unknown_key_falls_back_to_linear() {
        assert_eq!(ShapeSchema::for_key("island").shape, Shape::Linear);
        assert_eq!(ShapeSchema::for_key("U-Shape").shape, Shape::U);
    }

    #[test]
    fn test_appliance_overrides() {
        let schema = ShapeSchema::for_shape(Shape::Linear);
        assert_eq!(schema.hob_spec(), ApplianceSpec::default_hob());

        let schema = schema.with_hob(900.0, 400.0);
        assert_eq!(schema.hob_spec().w, 900.0);
        assert_eq!(schema.sink_spec(), ApplianceSpec::default_sink());
    }

    #[test]
    fn test_oriented_swaps_for_vertical() {
        let sink = ApplianceSpec::default_sink();
        assert_eq!(sink.oriented(Orientation::Horizontal), (800.0, 450.0));
        assert_eq!(sink.oriented(Orientation::Vertical), (450.0, 800.0));
    }

    #[test]
    fn test_minimum_lengths_in_mm() {
        let linear = ShapeSchema::for_shape(Shape::Linear);
        let u = ShapeSchema::for_shape(Shape::U);
        assert!((linear.min_length_mm - 3048.0).abs() < 1e-9);
        assert!((u.min_length_mm - 2438.4).abs() < 1e-9);
    }
}
