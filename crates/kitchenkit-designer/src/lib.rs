//! # KitchenKit Designer
//!
//! The parametric layout engine. A kitchen is described by a shape key and
//! one length per wall; everything drawn from it is derived:
//!
//! - **Schema**: per-shape wall tables ([`ShapeSchema`])
//! - **Expansion**: wall rectangles in millimetres ([`expand_shape`])
//! - **Layout**: hob and sink placement ([`layout_appliances`])
//! - **Viewport**: fitting the plan into a pixel canvas ([`fit_to_view`])
//! - **State**: the mutable inputs and their setters ([`EstimatorState`])
//!
//! All derivations are pure functions of their inputs.

pub mod estimator_state;
pub mod expand;
pub mod layout;
pub mod plan;
pub mod schema;
pub mod viewport;

pub use estimator_state::EstimatorState;
pub use expand::{expand_shape, ApplianceHints, ExpandedShape, Wall};
pub use layout::{
    inward_direction, layout_appliances, layout_with_policy, within, ApplianceLayout, HostRule,
    Placement, PlacementPolicy, PositionPref, WallSets,
};
pub use plan::KitchenPlan;
pub use schema::{ApplianceKind, ApplianceSpec, Coord, ShapeSchema, WallSchema};
pub use viewport::{fit_to_view, ViewTransform};
