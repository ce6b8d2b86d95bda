//! # KitchenKit Core
//!
//! Core types, units and constants shared by the layout engine, the pricing
//! model and the settings layer.

pub mod constants;
pub mod data;
pub mod error;
pub mod geometry;
pub mod units;

pub use data::{Dimensions, Finish, KitchenData, Shape, ViewMode, WallKey, WardrobeData};

pub use error::{clamp_reported, Error, IssueKind, Result, ValidationIssue};

pub use geometry::{Direction, Orientation, Point, Rect};

pub use units::{feet_to_mm, mm_to_feet, parse_feet, LengthUnit};
