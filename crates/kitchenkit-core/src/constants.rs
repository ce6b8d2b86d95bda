//! Fixed engine constants.
//!
//! Every geometric constant is in millimetres unless the name says feet.

/// Millimetres in one foot.
pub const MM_PER_FOOT: f64 = 304.8;

/// Depth of every counter run (the short axis of a wall rectangle).
pub const COUNTER_DEPTH_MM: f64 = 600.0;

/// Inset applied on every side of a host wall before placing an appliance.
pub const APPLIANCE_MARGIN_MM: f64 = 60.0;

/// Clear floor between the two runs of a galley kitchen.
pub const GALLEY_GAP_MM: f64 = 1200.0;

/// Default hob footprint (width along the run, depth across it).
pub const DEFAULT_HOB_W_MM: f64 = 600.0;
pub const DEFAULT_HOB_H_MM: f64 = 450.0;

/// Default sink footprint (width along the run, depth across it).
pub const DEFAULT_SINK_W_MM: f64 = 800.0;
pub const DEFAULT_SINK_H_MM: f64 = 450.0;

/// Shortest wall allowed for a single-wall kitchen.
pub const LINEAR_MIN_WALL_FT: f64 = 10.0;

/// Shortest wall allowed for every multi-wall shape.
pub const MIN_WALL_FT: f64 = 8.0;

/// Longest wall a fresh estimator accepts.
pub const DEFAULT_PER_WALL_MAX_FT: f64 = 20.0;

/// Wardrobe carcass heights used for pricing.
pub const WARDROBE_BASE_HEIGHT_FT: f64 = 7.0;
pub const WARDROBE_LOFT_HEIGHT_FT: f64 = 3.0;

pub const DEFAULT_WARDROBE_WIDTH_FT: f64 = 6.0;
pub const DEFAULT_WARDROBE_MAX_WIDTH_FT: f64 = 16.0;

/// Default 2D plan viewport in pixels.
pub const DEFAULT_VIEW_WIDTH: f64 = 1200.0;
pub const DEFAULT_VIEW_HEIGHT: f64 = 600.0;

/// Fraction of the viewport kept free on each side when fitting a plan.
pub const VIEW_PADDING: f64 = 0.12;
