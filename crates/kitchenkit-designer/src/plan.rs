//! A fully derived kitchen plan: walls plus placed appliances.

use kitchenkit_core::{Dimensions, KitchenData, Rect, Shape, WallKey};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::expand::{expand_shape, Wall};
use crate::layout::{layout_appliances, Placement};
use crate::schema::ShapeSchema;
use crate::viewport::{fit_to_view, ViewTransform};

/// Everything a 2D renderer needs to draw one kitchen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KitchenPlan {
    pub shape: Shape,
    pub walls: SmallVec<[Wall; 3]>,
    pub hob: Placement,
    pub sink: Placement,
}

impl KitchenPlan {
    /// Expand and lay out a schema at the given dimensions.
    pub fn build(schema: &ShapeSchema, dims: &Dimensions) -> Self {
        let expanded = expand_shape(schema, dims);
        let layout = layout_appliances(&expanded);
        Self {
            shape: expanded.shape,
            walls: expanded.walls,
            hob: layout.hob,
            sink: layout.sink,
        }
    }

    /// Plan for stored kitchen inputs, using the shape's standard schema.
    pub fn for_kitchen(kitchen: &KitchenData) -> Self {
        Self::build(
            &ShapeSchema::for_shape(kitchen.shape),
            &kitchen.dimensions_mm(),
        )
    }

    pub fn wall(&self, key: WallKey) -> Option<&Wall> {
        self.walls.iter().find(|w| w.key == key)
    }

    pub fn wall_rects(&self) -> Vec<Rect> {
        self.walls.iter().map(|w| w.rect).collect()
    }

    /// Walls followed by hob and sink.
    pub fn rects(&self) -> Vec<Rect> {
        let mut rects = self.wall_rects();
        rects.push(self.hob.rect());
        rects.push(self.sink.rect());
        rects
    }

    pub fn bounds(&self) -> Rect {
        Rect::bounding(&self.wall_rects()).unwrap_or_default()
    }

    /// True when the hob and sink footprints overlap.
    ///
    /// Fixed start/end positions can collide on short walls with oversized
    /// appliances; callers that allow custom sizes should check this.
    pub fn appliances_overlap(&self) -> bool {
        self.hob.rect().intersects(&self.sink.rect())
    }

    /// Fit the walls into a pixel viewport.
    pub fn fit(&self, view_w: f64, view_h: f64, padding_ratio: f64) -> ViewTransform {
        fit_to_view(&self.wall_rects(), view_w, view_h, padding_ratio)
    }
}
