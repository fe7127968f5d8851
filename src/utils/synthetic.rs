//! Seeded synthetic samples for benchmarks and tests.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generate `n` labelled scores.
///
/// Each observation is positive with probability `positive_rate`. Negatives
/// score uniform on [0, 1), positives uniform on [separation, 1 + separation):
/// separation 0 gives AUC ≈ 0.5, separation ≥ 1 gives AUC = 1.
///
/// `positive_rate` is clamped to [0, 1]; NaN is treated as 0.5.
pub fn synthetic_sample(
    n: usize,
    positive_rate: f64,
    separation: f64,
    seed: u64,
) -> (Vec<f64>, Vec<u8>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let positive_rate = if positive_rate.is_nan() {
        0.5
    } else {
        positive_rate.clamp(0.0, 1.0)
    };
    let mut scores = Vec::with_capacity(n);
    let mut labels = Vec::with_capacity(n);

    for _ in 0..n {
        let positive = rng.gen_bool(positive_rate);
        let base: f64 = rng.gen();
        if positive {
            scores.push(base + separation);
            labels.push(1);
        } else {
            scores.push(base);
            labels.push(0);
        }
    }

    (scores, labels)
}
