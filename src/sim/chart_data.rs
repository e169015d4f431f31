//! Synthetic numeric series for the chart panel.

#[cfg(test)]
#[path = "chart_data_test.rs"]
mod chart_data_test;

use rand::Rng;

/// Category labels for the first seven points; later points fall back to
/// a generated "Category N" label.
const CATEGORY_NAMES: [&str; 7] = [
    "Product A",
    "Product B",
    "Product C",
    "Product D",
    "Product E",
    "Product F",
    "Product G",
];

/// One record of the generated series. Each chart kind plots a different
/// subset of the fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChartPoint {
    pub name: String,
    pub value: u32,
    pub sales: u32,
    pub revenue: u32,
    pub profit: u32,
}

/// Generate `point_count` records with independently uniform values.
pub fn generate(point_count: u32, rng: &mut impl Rng) -> Vec<ChartPoint> {
    (0..point_count)
        .map(|i| ChartPoint {
            name: CATEGORY_NAMES
                .get(i as usize)
                .map_or_else(|| format!("Category {}", i + 1), |name| (*name).to_owned()),
            value: rng.random_range(0..1000),
            sales: rng.random_range(0..800),
            revenue: rng.random_range(0..1200),
            profit: rng.random_range(0..500),
        })
        .collect()
}
