//! Kitchen and wardrobe input records.
//!
//! These are the only stored entities; everything else is derived from them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{Finish, Shape, WallKey};
use crate::constants::{
    DEFAULT_PER_WALL_MAX_FT, DEFAULT_WARDROBE_MAX_WIDTH_FT, DEFAULT_WARDROBE_WIDTH_FT,
    WARDROBE_BASE_HEIGHT_FT, WARDROBE_LOFT_HEIGHT_FT,
};
use crate::units::feet_to_mm;

/// Wall lengths in millimetres, keyed by wall. Unused keys are zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Dimensions {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Dimensions {
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    pub fn get(&self, key: WallKey) -> f64 {
        match key {
            WallKey::A => self.a,
            WallKey::B => self.b,
            WallKey::C => self.c,
        }
    }

    pub fn set(&mut self, key: WallKey, mm: f64) {
        match key {
            WallKey::A => self.a = mm,
            WallKey::B => self.b = mm,
            WallKey::C => self.c = mm,
        }
    }
}

/// Kitchen inputs as the customer edits them (lengths in feet).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KitchenData {
    pub shape: Shape,
    pub finish: Finish,
    /// Upper bound for any single wall, in feet
    pub per_wall_max_ft: f64,
    /// Wall lengths in feet; only the shape's walls are read
    pub lengths: BTreeMap<WallKey, f64>,
}

impl KitchenData {
    /// Kitchen of the given shape with every wall at the shape minimum.
    pub fn new(shape: Shape) -> Self {
        let lengths = shape
            .wall_keys()
            .iter()
            .map(|key| (*key, shape.min_length_ft()))
            .collect();
        Self {
            shape,
            finish: Finish::default(),
            per_wall_max_ft: DEFAULT_PER_WALL_MAX_FT,
            lengths,
        }
    }

    /// Length of one wall in feet; a missing entry reads as the shape minimum.
    pub fn length_ft(&self, key: WallKey) -> f64 {
        self.lengths
            .get(&key)
            .copied()
            .unwrap_or_else(|| self.shape.min_length_ft())
    }

    /// Total wall run in feet over the walls the shape uses.
    ///
    /// Entries in `lengths` for walls the shape does not have are not counted,
    /// and a missing entry counts as the shape minimum. The estimator setters
    /// keep `lengths` to exactly the shape's walls, where this equals the sum
    /// of the map.
    pub fn total_run_ft(&self) -> f64 {
        self.shape
            .wall_keys()
            .iter()
            .map(|key| self.length_ft(*key))
            .sum()
    }

    /// The feet-to-millimetre boundary for geometry.
    pub fn dimensions_mm(&self) -> Dimensions {
        let mut dims = Dimensions::default();
        for key in self.shape.wall_keys() {
            dims.set(*key, feet_to_mm(self.length_ft(*key)));
        }
        dims
    }
}

impl Default for KitchenData {
    fn default() -> Self {
        Self::new(Shape::default())
    }
}

/// Wardrobe inputs (feet).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WardrobeData {
    pub finish: Finish,
    pub width_ft: f64,
    pub base_height_ft: f64,
    pub loft_height_ft: f64,
    pub max_width_ft: f64,
}

impl Default for WardrobeData {
    fn default() -> Self {
        Self {
            finish: Finish::default(),
            width_ft: DEFAULT_WARDROBE_WIDTH_FT,
            base_height_ft: WARDROBE_BASE_HEIGHT_FT,
            loft_height_ft: WARDROBE_LOFT_HEIGHT_FT,
            max_width_ft: DEFAULT_WARDROBE_MAX_WIDTH_FT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_kitchen_uses_shape_minimum() {
        let k = KitchenData::new(Shape::U);
        assert_eq!(k.lengths.len(), 3);
        assert_eq!(k.length_ft(WallKey::C), 8.0);
        assert_eq!(k.total_run_ft(), 24.0);

        let k = KitchenData::default();
        assert_eq!(k.shape, Shape::Linear);
        assert_eq!(k.length_ft(WallKey::A), 10.0);
    }

    #[test]
    fn test_missing_length_defaults_to_minimum() {
        let mut k = KitchenData::new(Shape::LShape);
        k.lengths.remove(&WallKey::B);
        assert_eq!(k.length_ft(WallKey::B), 8.0);
        assert!((k.dimensions_mm().b - 2438.4).abs() < 1e-9);
    }

    #[test]
    fn test_dimensions_only_for_used_walls() {
        let mut k = KitchenData::new(Shape::Parallel);
        k.lengths.insert(WallKey::A, 12.0);
        k.lengths.insert(WallKey::C, 15.0);
        let dims = k.dimensions_mm();
        assert!((dims.a - 3657.6).abs() < 1e-9);
        assert_eq!(dims.c, 0.0);
        assert_eq!(k.total_run_ft(), 20.0);
    }

    #[test]
    fn test_wardrobe_defaults() {
        let w = WardrobeData::default();
        assert_eq!(w.base_height_ft, 7.0);
        assert_eq!(w.loft_height_ft, 3.0);
        assert_eq!(w.finish, Finish::Essential);
    }
}
