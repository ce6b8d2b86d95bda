//! # KitchenKit Pricing
//!
//! Turns kitchen wall runs and wardrobe widths into a priced breakdown.
//!
//! - **Rates**: fixed rupee-per-square-foot rates and finish multipliers
//! - **Estimate**: the derived cost breakdown and cart line items

pub mod estimate;
pub mod rates;

pub use estimate::{compute_estimate, Estimate, LineItem, PriceBook};
pub use rates::{
    FinishMultipliers, KitchenRates, RateCard, WardrobeRates, KITCHEN_BASE_SQFT_PER_FT,
    KITCHEN_WALL_SQFT_PER_FT,
};
