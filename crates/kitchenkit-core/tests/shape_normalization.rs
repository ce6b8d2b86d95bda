use kitchenkit_core::{Finish, Shape};
use proptest::prelude::*;

#[test]
fn test_documented_shape_inputs() {
    assert_eq!(Shape::normalize("L-SHAPE"), Shape::LShape);
    assert_eq!(Shape::normalize(" lshape "), Shape::LShape);
    assert_eq!(Shape::normalize("ushape"), Shape::U);
    assert_eq!(Shape::normalize("u"), Shape::U);
    assert_eq!(Shape::normalize("not a kitchen"), Shape::Linear);
}

fn recase(input: &str, mask: &[bool]) -> String {
    input
        .chars()
        .zip(mask.iter().cycle())
        .map(|(c, upper)| if *upper { c.to_ascii_uppercase() } else { c })
        .collect()
}

proptest! {
    #[test]
    fn canonical_keys_survive_case_and_padding(
        index in 0usize..4,
        mask in prop::collection::vec(any::<bool>(), 1..8),
        left in 0usize..4,
        right in 0usize..4,
    ) {
        let shape = Shape::ALL[index];
        let input = format!(
            "{}{}{}",
            " ".repeat(left),
            recase(shape.as_str(), &mask),
            " ".repeat(right)
        );
        prop_assert_eq!(Shape::normalize(&input), shape);
    }

    #[test]
    fn arbitrary_text_always_normalizes(input in ".*") {
        let shape = Shape::normalize(&input);
        prop_assert!(Shape::ALL.contains(&shape));
        let finish = Finish::normalize(&input);
        prop_assert!(Finish::ALL.contains(&finish));
    }
}
