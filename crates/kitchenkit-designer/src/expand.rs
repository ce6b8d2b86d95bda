//! Shape interpreter: schema + wall lengths → concrete wall rectangles.

use kitchenkit_core::{Dimensions, Orientation, Rect, Shape, WallKey};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use crate::schema::{ApplianceSpec, Coord, ShapeSchema};

/// A concrete wall run in plan space (millimetres).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    pub key: WallKey,
    pub rect: Rect,
}

impl Wall {
    pub fn orientation(&self) -> Orientation {
        self.rect.orientation()
    }

    /// Declared run length (the long side).
    pub fn length(&self) -> f64 {
        self.rect.long_side()
    }
}

/// Appliance footprints handed to the layout engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ApplianceHints {
    pub hob: ApplianceSpec,
    pub sink: ApplianceSpec,
}

/// Output of [`expand_shape`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpandedShape {
    pub shape: Shape,
    pub walls: SmallVec<[Wall; 3]>,
    pub appliances: ApplianceHints,
}

impl ExpandedShape {
    pub fn wall(&self, key: WallKey) -> Option<&Wall> {
        self.walls.iter().find(|w| w.key == key)
    }

    pub fn wall_rects(&self) -> Vec<Rect> {
        self.walls.iter().map(|w| w.rect).collect()
    }
}

fn run_length(schema: &ShapeSchema, dims: &Dimensions, key: WallKey) -> f64 {
    let mm = dims.get(key);
    if mm.is_finite() && mm > 0.0 {
        mm
    } else {
        schema.min_length_mm
    }
}

fn resolve(coord: Coord, schema: &ShapeSchema, dims: &Dimensions) -> f64 {
    match coord {
        Coord::Fixed(v) => v,
        Coord::AlignEnd(key) => run_length(schema, dims, key) - schema.counter_depth,
    }
}

/// Expand a schema into wall rectangles and appliance sizes.
///
/// The long side of every wall equals its dimension; the short side is the
/// counter depth. Missing or non-positive dimensions use the schema minimum.
pub fn expand_shape(schema: &ShapeSchema, dims: &Dimensions) -> ExpandedShape {
    let depth = schema.counter_depth;
    let walls: SmallVec<[Wall; 3]> = schema
        .walls
        .iter()
        .map(|ws| {
            let length = run_length(schema, dims, ws.key);
            let x = resolve(ws.x, schema, dims);
            let y = resolve(ws.y, schema, dims);
            let rect = match ws.orientation {
                Orientation::Horizontal => Rect::new(x, y, length, depth),
                Orientation::Vertical => Rect::new(x, y, depth, length),
            };
            Wall { key: ws.key, rect }
        })
        .collect();

    debug!(
        "Expanded {} schema into {} walls",
        schema.shape,
        walls.len()
    );

    ExpandedShape {
        shape: schema.shape,
        walls,
        appliances: ApplianceHints {
            hob: schema.hob_spec(),
            sink: schema.sink_spec(),
        },
    }
}
