use kitchenkit_core::constants::APPLIANCE_MARGIN_MM;
use kitchenkit_core::{feet_to_mm, Dimensions, Finish, Orientation, Shape, WallKey};
use kitchenkit_designer::{ApplianceKind, EstimatorState, KitchenPlan, ShapeSchema};
use proptest::prelude::*;

fn shape_strategy() -> impl Strategy<Value = Shape> {
    prop::sample::select(Shape::ALL.to_vec())
}

proptest! {
    #[test]
    fn appliances_stay_inside_host_interior(
        shape in shape_strategy(),
        a in 10.0f64..20.0,
        b in 8.0f64..20.0,
        c in 8.0f64..20.0,
    ) {
        let dims = Dimensions::new(feet_to_mm(a), feet_to_mm(b), feet_to_mm(c));
        let plan = KitchenPlan::build(&ShapeSchema::for_shape(shape), &dims);
        for placement in [plan.hob, plan.sink] {
            let key = placement.host.unwrap();
            let host = plan.wall(key).unwrap().rect;
            prop_assert!(host.inset(APPLIANCE_MARGIN_MM).contains_rect(&placement.rect(), 1e-6));
        }
        prop_assert!(!plan.appliances_overlap());
    }
}

#[test]
fn test_u_shape_premium_scenario() {
    let mut state = EstimatorState::new();
    state.set_shape("u").unwrap();
    state.set_finish("premium").unwrap();
    state.set_length(WallKey::A, 10.0).unwrap();
    state.set_length(WallKey::B, 12.0).unwrap();
    state.set_length(WallKey::C, 8.0).unwrap();

    let plan = state.plan();
    assert_eq!(plan.hob.kind, ApplianceKind::Hob);
    assert_eq!(plan.hob.host, Some(WallKey::B));
    assert!(matches!(plan.sink.host, Some(WallKey::A | WallKey::C)));
    assert_eq!(plan.sink.orientation, Orientation::Vertical);
    assert!(plan.sink.h > plan.sink.w);

    let estimate = state.estimate();
    assert_eq!(estimate.total_run, 30.0);
    assert_eq!(state.kitchen().finish, Finish::Premium);
}

#[test]
fn test_parallel_puts_one_appliance_per_wall() {
    let plan = KitchenPlan::for_kitchen(&kitchenkit_core::KitchenData::new(Shape::Parallel));
    assert_ne!(plan.hob.host, plan.sink.host);
}

#[test]
fn test_oversized_appliances_on_short_wall_overlap() {
    let schema = ShapeSchema::for_shape(Shape::Linear)
        .with_hob(1400.0, 450.0)
        .with_sink(1400.0, 450.0);
    let plan = KitchenPlan::build(&schema, &Dimensions::new(feet_to_mm(10.0), 0.0, 0.0));
    assert!(plan.appliances_overlap());
}
