//! Viewport fitting and coordinate transformation for plan rendering.
//!
//! Maps plan coordinates (millimetres) onto a fixed-size pixel viewport with
//! a uniform scale and a translation. Both axes point the same way in plan
//! and screen space (+Y down), so there is no axis flip.

use std::fmt;

use kitchenkit_core::{Point, Rect};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Extents below this are treated as zero when fitting.
const DEGENERATE_EPSILON: f64 = 1e-9;

/// Uniform scale + translation from plan space to pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewTransform {
    pub scale: f64,
    pub translate_x: f64,
    pub translate_y: f64,
    /// Plan-space bounding box the transform was fitted to
    pub bbox: Rect,
}

impl ViewTransform {
    pub fn identity() -> Self {
        Self {
            scale: 1.0,
            translate_x: 0.0,
            translate_y: 0.0,
            bbox: Rect::default(),
        }
    }

    /// Converts plan coordinates to pixel coordinates.
    ///
    /// ```text
    /// pixel_x = x * scale + translate_x
    /// pixel_y = y * scale + translate_y
    /// ```
    pub fn apply_point(&self, point: Point) -> Point {
        Point::new(
            point.x * self.scale + self.translate_x,
            point.y * self.scale + self.translate_y,
        )
    }

    pub fn apply_rect(&self, rect: &Rect) -> Rect {
        let origin = self.apply_point(Point::new(rect.x, rect.y));
        let scale = self.scale;
        Rect::new(origin.x, origin.y, rect.w * scale, rect.h * scale)
    }

    /// Converts pixel coordinates back to plan coordinates.
    pub fn to_plan(&self, pixel_x: f64, pixel_y: f64) -> Point {
        Point::new(
            (pixel_x - self.translate_x) / self.scale,
            (pixel_y - self.translate_y) / self.scale,
        )
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl fmt::Display for ViewTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Scale: {:.4}x | Translate: ({:.1}, {:.1})",
            self.scale, self.translate_x, self.translate_y
        )
    }
}

/// Fits a set of rectangles into a `view_w × view_h` viewport.
///
/// # Arguments
/// * `rects` - Plan-space rectangles (millimetres)
/// * `view_w`, `view_h` - Viewport size in pixels
/// * `padding_ratio` - Fraction of each viewport dimension kept free on every side
///
/// The union bounding box is scaled uniformly and centred. An empty set or a
/// zero-size bounding box yields scale 1 with the box centred, so the result
/// is always finite.
pub fn fit_to_view(rects: &[Rect], view_w: f64, view_h: f64, padding_ratio: f64) -> ViewTransform {
    let bbox = Rect::bounding(rects).unwrap_or_default();

    let padding = if padding_ratio.is_finite() {
        padding_ratio.clamp(0.0, 0.49)
    } else {
        0.0
    };
    let padding_factor = 1.0 - padding * 2.0;
    let usable_w = view_w * padding_factor;
    let usable_h = view_h * padding_factor;

    let scale_x = (bbox.w > DEGENERATE_EPSILON).then(|| usable_w / bbox.w);
    let scale_y = (bbox.h > DEGENERATE_EPSILON).then(|| usable_h / bbox.h);

    // Use the smaller scale to fit everything
    let scale = match (scale_x, scale_y) {
        (Some(sx), Some(sy)) => sx.min(sy),
        (Some(s), None) | (None, Some(s)) => s,
        (None, None) => 1.0,
    };
    let scale = if scale.is_finite() && scale > 0.0 {
        scale
    } else {
        1.0
    };

    let center = bbox.center();
    let translate_x = view_w / 2.0 - center.x * scale;
    let translate_y = view_h / 2.0 - center.y * scale;

    debug!(
        "Fitted {:.0}x{:.0} mm plan into {}x{} px at scale {:.4}",
        bbox.w, bbox.h, view_w, view_h, scale
    );

    ViewTransform {
        scale,
        translate_x,
        translate_y,
        bbox,
    }
}
