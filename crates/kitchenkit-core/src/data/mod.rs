//! Domain data models
//!
//! This module provides:
//! - Kitchen shape, finish tier, wall key and view mode enums
//! - Lenient normalisation of free-text enum input
//! - Kitchen and wardrobe input records (see [`kitchen`])

pub mod kitchen;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::{LINEAR_MIN_WALL_FT, MIN_WALL_FT};
use crate::error::Error;

pub use kitchen::{Dimensions, KitchenData, WardrobeData};

/// Lowercase and drop separators so `"L-Shape"`, `"l_shape"` and `" lshape "` compare equal.
fn fold_key(input: &str) -> String {
    input
        .trim()
        .chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Identifies one wall run of a kitchen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WallKey {
    A,
    B,
    C,
}

impl WallKey {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
        }
    }
}

impl fmt::Display for WallKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WallKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "A" => Ok(Self::A),
            "B" => Ok(Self::B),
            "C" => Ok(Self::C),
            _ => Err(Error::UnknownWall(s.to_string())),
        }
    }
}

/// Kitchen wall topology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    /// Single wall run
    #[default]
    Linear,
    /// Two facing runs (galley)
    Parallel,
    /// Two runs meeting at a corner
    LShape,
    /// Two legs joined by a base run
    U,
}

impl Shape {
    pub const ALL: [Shape; 4] = [Shape::Linear, Shape::Parallel, Shape::LShape, Shape::U];

    /// Lenient parse: anything unrecognised becomes [`Shape::Linear`].
    pub fn normalize(input: &str) -> Self {
        input.parse().unwrap_or_else(|_| {
            tracing::debug!("Unknown shape '{}', defaulting to linear", input);
            Shape::Linear
        })
    }

    /// Canonical key used in config files and asset names.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Parallel => "parallel",
            Self::LShape => "lshape",
            Self::U => "u",
        }
    }

    /// Customer-facing name.
    pub fn label(self) -> &'static str {
        match self {
            Self::Linear => "Single wall",
            Self::Parallel => "Galley",
            Self::LShape => "L-shaped",
            Self::U => "U-shaped",
        }
    }

    /// Wall keys the shape uses, in schema order.
    pub fn wall_keys(self) -> &'static [WallKey] {
        match self {
            Self::Linear => &[WallKey::A],
            Self::Parallel | Self::LShape => &[WallKey::A, WallKey::B],
            Self::U => &[WallKey::A, WallKey::B, WallKey::C],
        }
    }

    pub fn wall_count(self) -> usize {
        self.wall_keys().len()
    }

    /// Shortest wall the shape accepts, in feet.
    pub fn min_length_ft(self) -> f64 {
        match self {
            Self::Linear => LINEAR_MIN_WALL_FT,
            _ => MIN_WALL_FT,
        }
    }

    /// Pre-baked 3D model shown when the viewer is toggled to 3D.
    pub fn model_asset(self) -> &'static str {
        match self {
            Self::Linear => "models/kitchen_linear.glb",
            Self::Parallel => "models/kitchen_parallel.glb",
            Self::LShape => "models/kitchen_lshape.glb",
            Self::U => "models/kitchen_u.glb",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Shape {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match fold_key(s).as_str() {
            "linear" | "single" | "singlewall" | "straight" | "onewall" => Ok(Self::Linear),
            "parallel" | "galley" | "twowall" | "double" => Ok(Self::Parallel),
            "lshape" | "l" | "lshaped" | "corner" => Ok(Self::LShape),
            "u" | "ushape" | "ushaped" | "horseshoe" => Ok(Self::U),
            _ => Err(Error::UnknownShape(s.to_string())),
        }
    }
}

/// Finish tier; each tier carries a pricing multiplier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Finish {
    #[default]
    Essential,
    Premium,
    Luxury,
}

impl Finish {
    pub const ALL: [Finish; 3] = [Finish::Essential, Finish::Premium, Finish::Luxury];

    /// Lenient parse: anything unrecognised becomes [`Finish::Essential`].
    pub fn normalize(input: &str) -> Self {
        input.parse().unwrap_or_else(|_| {
            tracing::debug!("Unknown finish '{}', defaulting to essential", input);
            Finish::Essential
        })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Essential => "essential",
            Self::Premium => "premium",
            Self::Luxury => "luxury",
        }
    }
}

impl fmt::Display for Finish {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Finish {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match fold_key(s).as_str() {
            "essential" | "basic" | "standard" => Ok(Self::Essential),
            "premium" => Ok(Self::Premium),
            "luxury" | "lux" => Ok(Self::Luxury),
            _ => Err(Error::UnknownFinish(s.to_string())),
        }
    }
}

/// Which representation of the kitchen the viewer shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Computed 2D floor plan
    #[default]
    Plan,
    /// Pre-baked 3D model chosen by shape
    Model,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Plan => Self::Model,
            Self::Model => Self::Plan,
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plan => write!(f, "2d"),
            Self::Model => write!(f, "3d"),
        }
    }
}

impl FromStr for ViewMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match fold_key(s).as_str() {
            "2d" | "plan" => Ok(Self::Plan),
            "3d" | "model" => Ok(Self::Model),
            _ => Err(Error::UnknownViewMode(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_normalize() {
        assert_eq!(Shape::normalize("L-SHAPE"), Shape::LShape);
        assert_eq!(Shape::normalize(" lshape "), Shape::LShape);
        assert_eq!(Shape::normalize("ushape"), Shape::U);
        assert_eq!(Shape::normalize("u"), Shape::U);
        assert_eq!(Shape::normalize("Galley"), Shape::Parallel);
        assert_eq!(Shape::normalize("hexagon"), Shape::Linear);
        assert_eq!(Shape::normalize(""), Shape::Linear);
    }

    #[test]
    fn test_shape_strict_parse() {
        assert_eq!("parallel".parse::<Shape>(), Ok(Shape::Parallel));
        assert_eq!(
            "island".parse::<Shape>(),
            Err(Error::UnknownShape("island".to_string()))
        );
        for shape in Shape::ALL {
            assert_eq!(shape.to_string().parse::<Shape>(), Ok(shape));
        }
    }

    #[test]
    fn test_shape_walls() {
        assert_eq!(Shape::Linear.wall_count(), 1);
        assert_eq!(Shape::Parallel.wall_count(), 2);
        assert_eq!(Shape::LShape.wall_count(), 2);
        assert_eq!(Shape::U.wall_count(), 3);
        assert_eq!(Shape::Linear.min_length_ft(), 10.0);
        assert_eq!(Shape::U.min_length_ft(), 8.0);
    }

    #[test]
    fn test_model_asset_per_shape() {
        assert_eq!(Shape::U.model_asset(), "models/kitchen_u.glb");
        let assets: std::collections::HashSet<_> =
            Shape::ALL.iter().map(|s| s.model_asset()).collect();
        assert_eq!(assets.len(), 4);
    }

    #[test]
    fn test_finish_normalize_and_order() {
        assert_eq!(Finish::normalize("PREMIUM"), Finish::Premium);
        assert_eq!(Finish::normalize("gold plated"), Finish::Essential);
        assert!(Finish::Essential < Finish::Premium);
        assert!(Finish::Premium < Finish::Luxury);
    }

    #[test]
    fn test_wall_key_and_view_mode() {
        assert_eq!("b".parse::<WallKey>(), Ok(WallKey::B));
        assert!("D".parse::<WallKey>().is_err());
        assert_eq!("3D".parse::<ViewMode>(), Ok(ViewMode::Model));
        assert_eq!(ViewMode::Plan.toggled(), ViewMode::Model);
        assert_eq!(ViewMode::Model.toggled(), ViewMode::Plan);
    }

    #[test]
    fn test_serde_keys() {
        let shape = serde_json::to_string(&Shape::LShape).unwrap();
        assert_eq!(shape, "\"lshape\"");
        let finish = serde_json::to_string(&Finish::Luxury).unwrap();
        assert_eq!(finish, "\"luxury\"");
        let shape: Shape = serde_json::from_str("\"u\"").unwrap();
        assert_eq!(shape, Shape::U);
    }
}
