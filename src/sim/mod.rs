//! Simulated assistant backend.
//!
//! Stands in for a network layer: `reply` fabricates assistant responses
//! after an artificial delay and `chart_data` produces the synthetic
//! series the chart panel renders. Both take an explicit `Rng` so tests
//! can pin a seed.

pub mod chart_data;
pub mod reply;

use rand::SeedableRng;
use rand::rngs::SmallRng;

/// RNG for one-off simulation tasks, seeded from the clock. `SmallRng`
/// needs no OS entropy source, so this works on `wasm32-unknown-unknown`.
pub fn task_rng() -> SmallRng {
    SmallRng::seed_from_u64(chrono::Utc::now().timestamp_millis().unsigned_abs())
}
