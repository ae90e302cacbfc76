// src/io/demand.rs

use rand::thread_rng;
use rand_distr::{Distribution, Normal};

/// Flat demand, the same amount every period. Useful as a stability
/// baseline in tests.
pub fn constant(periods: usize, value: u32) -> Vec<u32> {
    vec![value; periods]
}

/// Step pattern: `base` demand until `onset`, `peak` from then on.
/// Models a seasonal surge (e.g., flu season for medical supplies).
pub fn surge(periods: usize, base: u32, peak: u32, onset: usize) -> Vec<u32> {
    (0..periods)
        .map(|t| if t < onset { base } else { peak })
        .collect()
}

/// Demand sampled from a Normal distribution, rounded to whole units with
/// negative samples clamped to zero. The planner itself is deterministic;
/// this only produces scenario inputs.
pub fn normal(periods: usize, mean: f64, std_dev: f64) -> Vec<u32> {
    let mut rng = thread_rng();
    // std_dev is a caller-supplied constant; a non-finite value is a
    // programming error, not a runtime condition.
    let normal = Normal::new(mean, std_dev).expect("valid normal distribution parameters");

    (0..periods)
        .map(|_| {
            let sample: f64 = normal.sample(&mut rng);
            if sample < 0.0 {
                0
            } else {
                sample.round() as u32
            }
        })
        .collect()
}
