//! # Appliance Layout Engine
//!
//! Places the hob and sink on an expanded shape. Which wall hosts each
//! appliance, and where along that wall it sits, comes from a fixed
//! [`PlacementPolicy`] per shape; the engine itself is the same for all shapes.
//!
//! ## Algorithm
//!
//! 1. Rank walls by area (largest first) and split them into vertical walls
//!    (sorted by x) and horizontal walls (sorted by y).
//! 2. Resolve the policy's host rules against those lists. A rule with no
//!    matching wall falls back to the largest wall, centred.
//! 3. Orient the appliance like its host, unless the policy forces the sink
//!    orientation. Vertical orientation swaps width and height.
//! 4. Position inside the host's usable interior (host minus the appliance
//!    margin): centred, or one counter depth in from the start or end.
//! 5. Point the sink's tap into the room, judged against the plan centre.

use kitchenkit_core::constants::{APPLIANCE_MARGIN_MM, COUNTER_DEPTH_MM};
use kitchenkit_core::{Direction, Orientation, Rect, Shape, WallKey};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::expand::{ExpandedShape, Wall};
use crate::schema::{ApplianceKind, ApplianceSpec};

/// Where along the host's long axis an appliance sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PositionPref {
    Center,
    NearStart,
    NearEnd,
}

/// How a host wall is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HostRule {
    /// Largest wall by area
    Longest,
    /// N-th horizontal wall, top to bottom
    Horizontal(usize),
    /// N-th vertical wall, left to right
    Vertical(usize),
    /// Right-most vertical wall
    LastVertical,
}

/// Host and position rules for one shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementPolicy {
    pub hob_host: HostRule,
    pub hob_pref: PositionPref,
    pub sink_host: HostRule,
    pub sink_pref: PositionPref,
    /// Forces the sink orientation regardless of the host wall
    pub sink_orientation: Option<Orientation>,
}

const LINEAR_POLICY: PlacementPolicy = PlacementPolicy {
    hob_host: HostRule::Longest,
    hob_pref: PositionPref::NearEnd,
    sink_host: HostRule::Longest,
    sink_pref: PositionPref::NearStart,
    sink_orientation: None,
};

const PARALLEL_POLICY: PlacementPolicy = PlacementPolicy {
    hob_host: HostRule::Horizontal(0),
    hob_pref: PositionPref::Center,
    sink_host: HostRule::Horizontal(1),
    sink_pref: PositionPref::Center,
    sink_orientation: None,
};

const LSHAPE_POLICY: PlacementPolicy = PlacementPolicy {
    hob_host: HostRule::Horizontal(0),
    hob_pref: PositionPref::Center,
    sink_host: HostRule::LastVertical,
    sink_pref: PositionPref::NearEnd,
    sink_orientation: Some(Orientation::Vertical),
};

const U_POLICY: PlacementPolicy = PlacementPolicy {
    hob_host: HostRule::Horizontal(0),
    hob_pref: PositionPref::Center,
    sink_host: HostRule::Vertical(0),
    sink_pref: PositionPref::NearEnd,
    sink_orientation: Some(Orientation::Vertical),
};

impl PlacementPolicy {
    pub fn for_shape(shape: Shape) -> Self {
        match shape {
            Shape::Linear => LINEAR_POLICY,
            Shape::Parallel => PARALLEL_POLICY,
            Shape::LShape => LSHAPE_POLICY,
            Shape::U => U_POLICY,
        }
    }
}

/// Walls grouped the ways the host rules need.
#[derive(Debug, Clone)]
pub struct WallSets<'a> {
    /// Largest area first; ties keep schema order
    pub by_area: Vec<&'a Wall>,
    /// Sorted by x
    pub vertical: Vec<&'a Wall>,
    /// Sorted by y
    pub horizontal: Vec<&'a Wall>,
}

impl<'a> WallSets<'a> {
    pub fn new(walls: &'a [Wall]) -> Self {
        let mut by_area: Vec<&Wall> = walls.iter().collect();
        by_area.sort_by(|a, b| b.rect.area().total_cmp(&a.rect.area()));

        let mut vertical: Vec<&Wall> = walls
            .iter()
            .filter(|w| w.orientation() == Orientation::Vertical)
            .collect();
        vertical.sort_by(|a, b| a.rect.x.total_cmp(&b.rect.x));

        let mut horizontal: Vec<&Wall> = walls
            .iter()
            .filter(|w| w.orientation() == Orientation::Horizontal)
            .collect();
        horizontal.sort_by(|a, b| a.rect.y.total_cmp(&b.rect.y));

        Self {
            by_area,
            vertical,
            horizontal,
        }
    }

    pub fn long(&self) -> Option<&'a Wall> {
        self.by_area.first().copied()
    }

    pub fn mid(&self) -> Option<&'a Wall> {
        self.by_area.get(1).copied()
    }

    pub fn short(&self) -> Option<&'a Wall> {
        self.by_area.get(2).copied()
    }

    pub fn resolve(&self, rule: HostRule) -> Option<&'a Wall> {
        match rule {
            HostRule::Longest => self.long(),
            HostRule::Horizontal(i) => self.horizontal.get(i).copied(),
            HostRule::Vertical(i) => self.vertical.get(i).copied(),
            HostRule::LastVertical => self.vertical.last().copied(),
        }
    }
}

/// A placed appliance in plan space (millimetres).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub kind: ApplianceKind,
    /// Wall hosting the appliance; `None` only for a plan with no walls
    pub host: Option<WallKey>,
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    pub orientation: Orientation,
    /// Side of the fixture facing into the room (sink only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inward: Option<Direction>,
}

impl Placement {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.w, self.h)
    }
}

/// Hob and sink placements for one plan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ApplianceLayout {
    pub hob: Placement,
    pub sink: Placement,
}

/// Fit a `w × h` appliance inside `host` at the preferred position.
///
/// The appliance is kept inside the host inset by the appliance margin. It is
/// shrunk to the usable interior when larger, and a start/end offset that
/// would push it past the far end is pulled back.
pub fn within(host: &Rect, w: f64, h: f64, pref: PositionPref) -> Rect {
    let usable = host.inset(APPLIANCE_MARGIN_MM);
    let w = w.min(usable.w).max(0.0);
    let h = h.min(usable.h).max(0.0);

    // (start, span, size) along the host's long axis
    let along = |start: f64, span: f64, size: f64| -> f64 {
        let end = start + span;
        match pref {
            PositionPref::Center => start + (span - size) / 2.0,
            PositionPref::NearStart => (start + COUNTER_DEPTH_MM).min(end - size),
            PositionPref::NearEnd => (end - COUNTER_DEPTH_MM - size).max(start),
        }
    };

    if host.is_horizontal() {
        let x = along(usable.x, usable.w, w);
        let y = usable.y + (usable.h - h) / 2.0;
        Rect::new(x, y, w, h)
    } else {
        let x = usable.x + (usable.w - w) / 2.0;
        let y = along(usable.y, usable.h, h);
        Rect::new(x, y, w, h)
    }
}

/// Direction from `host` towards the middle of the plan.
pub fn inward_direction(host: &Rect, bbox: &Rect) -> Direction {
    let host_center = host.center();
    let plan_center = bbox.center();
    match host.orientation() {
        Orientation::Vertical => {
            if host_center.x < plan_center.x {
                Direction::Right
            } else {
                Direction::Left
            }
        }
        Orientation::Horizontal => {
            if host_center.y < plan_center.y {
                Direction::Down
            } else {
                Direction::Up
            }
        }
    }
}

fn place(
    spec: &ApplianceSpec,
    host: Option<&Wall>,
    pref: PositionPref,
    forced: Option<Orientation>,
) -> Placement {
    let host_rect = host.map(|w| w.rect).unwrap_or_default();
    let orientation = forced.unwrap_or_else(|| host_rect.orientation());
    let (w, h) = spec.oriented(orientation);
    let rect = within(&host_rect, w, h, pref);
    Placement {
        kind: spec.kind,
        host: host.map(|w| w.key),
        x: rect.x,
        y: rect.y,
        w: rect.w,
        h: rect.h,
        orientation,
        inward: None,
    }
}

/// Place hob and sink using the policy for the expanded shape.
pub fn layout_appliances(expanded: &ExpandedShape) -> ApplianceLayout {
    layout_with_policy(expanded, &PlacementPolicy::for_shape(expanded.shape))
}

/// Place hob and sink with an explicit policy.
pub fn layout_with_policy(expanded: &ExpandedShape, policy: &PlacementPolicy) -> ApplianceLayout {
    let sets = WallSets::new(&expanded.walls);
    let rects = expanded.wall_rects();
    let bbox = Rect::bounding(&rects).unwrap_or_default();

    let (hob_host, hob_pref) = match sets.resolve(policy.hob_host) {
        Some(wall) => (Some(wall), policy.hob_pref),
        None => (sets.long(), PositionPref::Center),
    };
    let (sink_host, sink_pref) = match sets.resolve(policy.sink_host) {
        Some(wall) => (Some(wall), policy.sink_pref),
        None => (sets.long(), PositionPref::Center),
    };

    let hob = place(&expanded.appliances.hob, hob_host, hob_pref, None);
    let mut sink = place(
        &expanded.appliances.sink,
        sink_host,
        sink_pref,
        policy.sink_orientation,
    );
    sink.inward = sink_host.map(|wall| inward_direction(&wall.rect, &bbox));

    debug!(
        "Placed hob on {:?} ({:?}) and sink on {:?} ({:?}, facing {:?})",
        hob.host, hob_pref, sink.host, sink_pref, sink.inward
    );

    ApplianceLayout { hob, sink }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expand::expand_shape;
    use crate::schema::ShapeSchema;
    use kitchenkit_core::{feet_to_mm, Dimensions};

    fn expanded(shape: Shape, a: f64, b: f64, c: f64) -> ExpandedShape {
        let dims = Dimensions::new(feet_to_mm(a), feet_to_mm(b), feet_to_mm(c));
        expand_shape(&ShapeSchema::for_shape(shape), &dims)
    }

    #[test]
    fn test_within_center() {
        let host = Rect::new(0.0, 0.0, 3000.0, 600.0);
        let r = within(&host, 600.0, 450.0, PositionPref::Center);
        assert_eq!(r, Rect::new(1200.0, 75.0, 600.0, 450.0));
    }

    #[test]
    fn test_within_near_start_and_end() {
        let host = Rect::new(0.0, 0.0, 3000.0, 600.0);
        let start = within(&host, 600.0, 450.0, PositionPref::NearStart);
        assert_eq!(start.x, 60.0 + 600.0);
        let end = within(&host, 600.0, 450.0, PositionPref::NearEnd);
        assert_eq!(end.right(), 3000.0 - 60.0 - 600.0);
    }

    #[test]
    fn test_within_vertical_host_uses_y_axis() {
        let host = Rect::new(0.0, 0.0, 600.0, 3000.0);
        let r = within(&host, 450.0, 800.0, PositionPref::NearEnd);
        assert_eq!(r.x, 75.0);
        assert_eq!(r.bottom(), 3000.0 - 60.0 - 600.0);
    }

    #[test]
    fn test_within_clamps_oversized_appliance() {
        let host = Rect::new(0.0, 0.0, 1000.0, 600.0);
        let r = within(&host, 2000.0, 800.0, PositionPref::NearStart);
        assert!(host.inset(APPLIANCE_MARGIN_MM).contains_rect(&r, 1e-9));
        assert_eq!(r.w, 880.0);
        assert_eq!(r.h, 480.0);
    }

    #[test]
    fn test_policy_table() {
        let u = PlacementPolicy::for_shape(Shape::U);
        assert_eq!(u.sink_orientation, Some(Orientation::Vertical));
        assert_eq!(u.hob_host, HostRule::Horizontal(0));
        let linear = PlacementPolicy::for_shape(Shape::Linear);
        assert_eq!(linear.hob_pref, PositionPref::NearEnd);
        assert_eq!(linear.sink_pref, PositionPref::NearStart);
        let parallel = PlacementPolicy::for_shape(Shape::Parallel);
        assert_eq!(parallel.sink_orientation, None);
    }

    #[test]
    fn test_wall_sets_ranking() {
        let e = expanded(Shape::U, 10.0, 12.0, 8.0);
        let sets = WallSets::new(&e.walls);
        assert_eq!(sets.long().map(|w| w.key), Some(WallKey::B));
        assert_eq!(sets.mid().map(|w| w.key), Some(WallKey::A));
        assert_eq!(sets.short().map(|w| w.key), Some(WallKey::C));
        let verticals: Vec<_> = sets.vertical.iter().map(|w| w.key).collect();
        assert_eq!(verticals, vec![WallKey::A, WallKey::C]);
    }

    #[test]
    fn test_linear_keeps_appliances_apart() {
        let layout = layout_appliances(&expanded(Shape::Linear, 10.0, 0.0, 0.0));
        assert_eq!(layout.hob.host, Some(WallKey::A));
        assert_eq!(layout.sink.host, Some(WallKey::A));
        assert!(layout.sink.x < layout.hob.x);
        assert!(!layout.sink.rect().intersects(&layout.hob.rect()));
        assert_eq!(layout.hob.inward, None);
    }

    #[test]
    fn test_lshape_sink_on_far_leg() {
        let layout = layout_appliances(&expanded(Shape::LShape, 10.0, 9.0, 0.0));
        assert_eq!(layout.hob.host, Some(WallKey::A));
        assert_eq!(layout.hob.orientation, Orientation::Horizontal);
        assert_eq!(layout.sink.host, Some(WallKey::B));
        assert_eq!(layout.sink.orientation, Orientation::Vertical);
        assert_eq!(layout.sink.inward, Some(Direction::Right));
    }

    #[test]
    fn test_parallel_inward_faces_galley() {
        let layout = layout_appliances(&expanded(Shape::Parallel, 10.0, 10.0, 0.0));
        assert_eq!(layout.hob.host, Some(WallKey::A));
        assert_eq!(layout.sink.host, Some(WallKey::B));
        assert_eq!(layout.sink.orientation, Orientation::Horizontal);
        assert_eq!(layout.sink.inward, Some(Direction::Up));
    }

    #[test]
    fn test_missing_host_falls_back_to_longest_centered() {
        let e = expanded(Shape::Linear, 12.0, 0.0, 0.0);
        let policy = PlacementPolicy {
            sink_host: HostRule::Vertical(0),
            sink_pref: PositionPref::NearEnd,
            ..LINEAR_POLICY
        };
        let layout = layout_with_policy(&e, &policy);
        let host = e.walls[0].rect;
        let expected = within(&host, 800.0, 450.0, PositionPref::Center);
        assert_eq!(layout.sink.host, Some(WallKey::A));
        assert_eq!(layout.sink.rect(), expected);
    }

    #[test]
    fn test_inward_direction() {
        let bbox = Rect::new(0.0, 0.0, 3000.0, 3000.0);
        let left = Rect::new(0.0, 0.0, 600.0, 3000.0);
        let right = Rect::new(2400.0, 0.0, 600.0, 3000.0);
        let top = Rect::new(0.0, 0.0, 3000.0, 600.0);
        let bottom = Rect::new(0.0, 2400.0, 3000.0, 600.0);
        assert_eq!(inward_direction(&left, &bbox), Direction::Right);
        assert_eq!(inward_direction(&right, &bbox), Direction::Left);
        assert_eq!(inward_direction(&top, &bbox), Direction::Down);
        assert_eq!(inward_direction(&bottom, &bbox), Direction::Up);
    }
}
