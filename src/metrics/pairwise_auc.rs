//! PAIRWISE AUC (DIRECT DOMINANCE COUNT)
//!
//! Compares every positive score with every negative score: a win counts 1,
//! a tie 1/2. O(n_pos × n_neg), so only suitable as a reference for the
//! rank-sum estimator and as the baseline in benchmarks.

use crate::error::{Class, Result};
use crate::metrics::rank_sum_auc::ratio;
use crate::utils::labels::validate_sample;

/// AUC by exhaustive pairwise comparison.
///
/// Same validation and error conditions as [`crate::auc`]. Wins are tallied
/// in half-units (`u128`), so the result is bit-identical to the rank-sum
/// estimator on the same input.
pub fn pairwise_auc<L: Copy + Into<i64>>(scores: &[f64], labels: &[L]) -> Result<f64> {
    let (classes, counts) = validate_sample(scores, labels)?;

    let mut pos = Vec::with_capacity(counts.num_pos as usize);
    let mut neg = Vec::with_capacity(counts.num_neg as usize);
    for (&s, &c) in scores.iter().zip(&classes) {
        match c {
            Class::Positive => pos.push(s),
            Class::Negative => neg.push(s),
        }
    }

    let mut half_wins: u128 = 0;
    for &p in &pos {
        for &q in &neg {
            if p > q {
                half_wins += 2;
            } else if p == q {
                half_wins += 1;
            }
        }
    }

    Ok(ratio(half_wins, counts.pairs()))
}
