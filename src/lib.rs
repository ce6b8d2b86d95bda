//! # KitchenKit
//!
//! A parametric kitchen layout and cost-estimation engine:
//! - Four kitchen topologies (linear, parallel, L, U) driven by wall lengths
//! - Automatic hob and sink placement on the right walls
//! - 2D plan fitting into a fixed-size viewport
//! - Live price estimate for kitchen and wardrobe joinery
//!
//! ## Architecture
//!
//! KitchenKit is organized as a workspace with multiple crates:
//!
//! 1. **kitchenkit-core** - Units, constants, domain types, error types
//! 2. **kitchenkit-designer** - Shape schema, layout engine, viewport, estimator state
//! 3. **kitchenkit-pricing** - Rate card, finish multipliers, estimate model
//! 4. **kitchenkit-settings** - Configuration file handling
//! 5. **kitchenkit** - Headless binary that prints a plan and estimate report

pub mod report;

pub use kitchenkit_core::{
    Dimensions, Direction, Error, Finish, IssueKind, KitchenData, Orientation, Point, Rect, Result,
    Shape, ValidationIssue, ViewMode, WallKey, WardrobeData,
};

pub use kitchenkit_designer::{
    expand_shape, fit_to_view, layout_appliances, EstimatorState, KitchenPlan, Placement,
    ShapeSchema, ViewTransform, Wall,
};

pub use kitchenkit_pricing::{compute_estimate, Estimate, LineItem, PriceBook};

pub use kitchenkit_settings::{Config, LoggingSettings, ViewportSettings};

pub use report::Report;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging from the logging settings
///
/// Sets up structured logging with:
/// - Output on stderr, so stdout stays free for the report
/// - RUST_LOG environment variable support, falling back to `settings.level`
/// - Pretty text or JSON lines
pub fn init_logging(settings: &LoggingSettings) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.level))?;

    if settings.json {
        let fmt_layer = fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .with_thread_ids(true)
            .with_line_number(true);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    } else {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .with_thread_ids(true)
            .with_thread_names(true)
            .with_line_number(true)
            .pretty();

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    }

    Ok(())
}
