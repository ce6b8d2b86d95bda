//! Unit conversion utilities
//!
//! Estimator state stores lengths in feet; geometry works in millimetres.
//! Conversion happens through [`feet_to_mm`] at a single boundary
//! (`KitchenData::dimensions_mm`) and nowhere inside the layout code.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::MM_PER_FOOT;
use crate::error::{Error, Result};

/// Length unit used for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    /// Feet (what customers type)
    #[default]
    Feet,
    /// Millimetres (what the geometry uses)
    Millimeters,
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Feet => write!(f, "Feet"),
            Self::Millimeters => write!(f, "Millimeters"),
        }
    }
}

impl FromStr for LengthUnit {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "feet" | "foot" | "ft" => Ok(Self::Feet),
            "millimeters" | "millimetres" | "mm" => Ok(Self::Millimeters),
            _ => Err(format!("Unknown length unit: {}", s)),
        }
    }
}

/// Convert feet to millimetres.
pub fn feet_to_mm(feet: f64) -> f64 {
    feet * MM_PER_FOOT
}

/// Convert millimetres to feet.
pub fn mm_to_feet(mm: f64) -> f64 {
    mm / MM_PER_FOOT
}

/// Format length value for display
///
/// * `value_mm` - Value in millimetres
/// * `unit` - Target unit
pub fn format_length(value_mm: f64, unit: LengthUnit) -> String {
    match unit {
        LengthUnit::Millimeters => format!("{:.0}", value_mm),
        LengthUnit::Feet => format!("{:.2}", mm_to_feet(value_mm)),
    }
}

/// Parse a length typed in feet.
///
/// Accepts plain decimals (`10.5`), suffixed feet (`10ft`, `10'`) and
/// feet-and-inches (`10' 6"`, `10'-6"`, `10ft 6in`, `6in`). Empty input is zero.
pub fn parse_feet(input: &str) -> Result<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }

    let normalized = trimmed
        .to_lowercase()
        .replace("feet", "'")
        .replace("foot", "'")
        .replace("ft", "'")
        .replace("inches", "\"")
        .replace("inch", "\"")
        .replace("in", "\"");

    let invalid = |reason: &str| Error::InvalidLength {
        input: input.to_string(),
        reason: reason.to_string(),
    };

    let (feet_part, inch_part) = match normalized.split_once('\'') {
        // `10'-6"`: the dash separates feet from inches
        Some((feet, rest)) => {
            let rest = rest.trim();
            (feet.trim(), rest.strip_prefix('-').unwrap_or(rest).trim())
        }
        None if normalized.ends_with('"') => ("", normalized.as_str()),
        None => (normalized.trim(), ""),
    };

    let feet = if feet_part.is_empty() {
        0.0
    } else {
        feet_part
            .parse::<f64>()
            .map_err(|_| invalid("invalid feet value"))?
    };

    let inch_text = inch_part.trim_end_matches('"').trim();
    let inches = if inch_text.is_empty() {
        0.0
    } else {
        inch_text
            .parse::<f64>()
            .map_err(|_| invalid("invalid inch value"))?
    };

    Ok(feet + inches / 12.0)
}

/// Get the unit label for the given unit ("ft" or "mm")
pub fn get_unit_label(unit: LengthUnit) -> &'static str {
    match unit {
        LengthUnit::Feet => "ft",
        LengthUnit::Millimeters => "mm",
    }
}
