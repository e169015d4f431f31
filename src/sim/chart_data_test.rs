use super::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

#[test]
fn generates_requested_number_of_points() {
    let mut rng = SmallRng::seed_from_u64(1);
    assert_eq!(generate(5, &mut rng).len(), 5);
    assert_eq!(generate(0, &mut rng).len(), 0);
}

#[test]
fn names_use_categories_then_numbered_fallback() {
    let mut rng = SmallRng::seed_from_u64(1);
    let points = generate(9, &mut rng);

    assert_eq!(points[0].name, "Product A");
    assert_eq!(points[6].name, "Product G");
    assert_eq!(points[7].name, "Category 8");
    assert_eq!(points[8].name, "Category 9");
}

#[test]
fn values_stay_within_their_ranges() {
    let mut rng = SmallRng::seed_from_u64(99);
    for point in generate(64, &mut rng) {
        assert!(point.value < 1000);
        assert!(point.sales < 800);
        assert!(point.revenue < 1200);
        assert!(point.profit < 500);
    }
}

#[test]
fn same_seed_produces_same_series() {
    let a = generate(7, &mut SmallRng::seed_from_u64(42));
    let b = generate(7, &mut SmallRng::seed_from_u64(42));
    assert_eq!(a, b);
}
