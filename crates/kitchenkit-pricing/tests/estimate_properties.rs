use kitchenkit_core::{Finish, KitchenData, Shape, WardrobeData};
use kitchenkit_pricing::PriceBook;
use proptest::prelude::*;

fn kitchen(shape: Shape, lengths: &[f64], finish: Finish) -> KitchenData {
    let mut k = KitchenData::new(shape);
    for (key, len) in shape.wall_keys().iter().zip(lengths) {
        k.lengths.insert(*key, *len);
    }
    k.finish = finish;
    k
}

proptest! {
    #[test]
    fn total_is_sum_of_parts(
        shape_index in 0usize..4,
        lengths in prop::collection::vec(8.0f64..20.0, 3),
        width in 0.0f64..16.0,
        finish_index in 0usize..3,
    ) {
        let shape = Shape::ALL[shape_index];
        let finish = Finish::ALL[finish_index];
        let wardrobe = WardrobeData { width_ft: width, finish, ..WardrobeData::default() };
        let e = PriceBook::default().estimate(&kitchen(shape, &lengths, finish), &wardrobe);

        prop_assert_eq!(e.total, e.k_base_cost + e.k_wall_cost + e.w_base_cost + e.w_loft_cost);
        let expected_run: f64 = lengths.iter().take(shape.wall_count()).sum();
        prop_assert!((e.total_run - expected_run).abs() < 1e-9);
    }

    #[test]
    fn higher_finish_costs_more(
        shape_index in 0usize..4,
        lengths in prop::collection::vec(8.0f64..20.0, 3),
        width in 0.0f64..16.0,
    ) {
        let shape = Shape::ALL[shape_index];
        let book = PriceBook::default();
        let totals: Vec<f64> = Finish::ALL
            .iter()
            .map(|finish| {
                let wardrobe = WardrobeData {
                    width_ft: width,
                    finish: *finish,
                    ..WardrobeData::default()
                };
                book.estimate(&kitchen(shape, &lengths, *finish), &wardrobe).total
            })
            .collect();

        prop_assert!(totals[0] < totals[1]);
        prop_assert!(totals[1] < totals[2]);
    }
}
