//! Fixed unit rates and finish multipliers.
//!
//! Rates are rupees per square foot of carcass face.

use kitchenkit_core::Finish;
use serde::{Deserialize, Serialize};

/// Square feet of base-cabinet face per running foot of kitchen wall.
pub const KITCHEN_BASE_SQFT_PER_FT: f64 = 2.46;

/// Square feet of wall-cabinet face per running foot of kitchen wall.
pub const KITCHEN_WALL_SQFT_PER_FT: f64 = 2.0;

/// Kitchen rates per square foot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KitchenRates {
    /// Base (floor) cabinets
    pub base: f64,
    /// Wall (overhead) cabinets
    pub wall: f64,
}

/// Wardrobe rates per square foot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WardrobeRates {
    /// Full-height body
    pub base: f64,
    /// Loft above the body
    pub loft: f64,
}

/// Every unit rate used by the estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateCard {
    pub kitchen: KitchenRates,
    pub wardrobe: WardrobeRates,
}

impl Default for RateCard {
    fn default() -> Self {
        Self {
            kitchen: KitchenRates {
                base: 2000.0,
                wall: 1500.0,
            },
            wardrobe: WardrobeRates {
                base: 1800.0,
                loft: 1000.0,
            },
        }
    }
}

/// Price multiplier per finish tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinishMultipliers {
    pub essential: f64,
    pub premium: f64,
    pub luxury: f64,
}

impl FinishMultipliers {
    pub fn get(&self, finish: Finish) -> f64 {
        match finish {
            Finish::Essential => self.essential,
            Finish::Premium => self.premium,
            Finish::Luxury => self.luxury,
        }
    }
}

impl Default for FinishMultipliers {
    fn default() -> Self {
        Self {
            essential: 1.0,
            premium: 1.25,
            luxury: 1.5,
        }
    }
}
