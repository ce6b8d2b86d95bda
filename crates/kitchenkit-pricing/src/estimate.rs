//! Cost breakdown derived from kitchen and wardrobe inputs.
//!
//! Nothing is rounded here; rounding for display belongs to the caller.

use kitchenkit_core::{KitchenData, WardrobeData};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::rates::{
    FinishMultipliers, RateCard, KITCHEN_BASE_SQFT_PER_FT, KITCHEN_WALL_SQFT_PER_FT,
};

/// Derived price breakdown. `total` is always the sum of the four costs.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Estimate {
    /// Sum of kitchen wall lengths (ft)
    pub total_run: f64,
    pub k_base_sqft: f64,
    pub k_wall_sqft: f64,
    pub w_base_sqft: f64,
    pub w_loft_sqft: f64,
    pub k_base_cost: f64,
    pub k_wall_cost: f64,
    pub w_base_cost: f64,
    pub w_loft_cost: f64,
    pub total: f64,
}

/// One priced row for a cart or summary panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub label: String,
    pub sqft: f64,
    pub amount: f64,
}

impl Estimate {
    pub fn kitchen_subtotal(&self) -> f64 {
        self.k_base_cost + self.k_wall_cost
    }

    pub fn wardrobe_subtotal(&self) -> f64 {
        self.w_base_cost + self.w_loft_cost
    }

    /// Rows in display order; amounts add up to `total`.
    pub fn line_items(&self) -> Vec<LineItem> {
        [
            ("Kitchen base cabinets", self.k_base_sqft, self.k_base_cost),
            ("Kitchen wall cabinets", self.k_wall_sqft, self.k_wall_cost),
            ("Wardrobe", self.w_base_sqft, self.w_base_cost),
            ("Wardrobe loft", self.w_loft_sqft, self.w_loft_cost),
        ]
        .into_iter()
        .map(|(label, sqft, amount)| LineItem {
            label: label.to_string(),
            sqft,
            amount,
        })
        .collect()
    }
}

/// Price a kitchen and wardrobe.
pub fn compute_estimate(
    kitchen: &KitchenData,
    wardrobe: &WardrobeData,
    rates: &RateCard,
    multipliers: &FinishMultipliers,
) -> Estimate {
    let total_run = kitchen.total_run_ft();
    let k_mult = multipliers.get(kitchen.finish);
    let w_mult = multipliers.get(wardrobe.finish);

    let k_base_sqft = total_run * KITCHEN_BASE_SQFT_PER_FT;
    let k_wall_sqft = total_run * KITCHEN_WALL_SQFT_PER_FT;
    let w_base_sqft = wardrobe.width_ft * wardrobe.base_height_ft;
    let w_loft_sqft = wardrobe.width_ft * wardrobe.loft_height_ft;

    let k_base_cost = k_base_sqft * rates.kitchen.base * k_mult;
    let k_wall_cost = k_wall_sqft * rates.kitchen.wall * k_mult;
    let w_base_cost = w_base_sqft * rates.wardrobe.base * w_mult;
    let w_loft_cost = w_loft_sqft * rates.wardrobe.loft * w_mult;

    let total = k_base_cost + k_wall_cost + w_base_cost + w_loft_cost;
    debug!(
        "Estimate for {} kitchen: run {:.2} ft, total {:.2}",
        kitchen.shape, total_run, total
    );

    Estimate {
        total_run,
        k_base_sqft,
        k_wall_sqft,
        w_base_sqft,
        w_loft_sqft,
        k_base_cost,
        k_wall_cost,
        w_base_cost,
        w_loft_cost,
        total,
    }
}

/// Rate card plus multipliers, for callers that price many states.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PriceBook {
    pub rates: RateCard,
    pub multipliers: FinishMultipliers,
}

impl PriceBook {
    pub fn estimate(&self, kitchen: &KitchenData, wardrobe: &WardrobeData) -> Estimate {
        compute_estimate(kitchen, wardrobe, &self.rates, &self.multipliers)
    }
}
