//! RANK-SUM AUC (MANN-WHITNEY U)
//!
//! AUC is the probability that a random positive score exceeds a random
//! negative score, ties counted one-half. Via the Wilcoxon rank-sum identity:
//!
//!   U   = R_pos - n_pos (n_pos + 1) / 2
//!   AUC = U / (n_pos × n_neg)
//!
//! where R_pos is the sum of the midranks of the positive observations within
//! the combined sample. One sort, then a linear scan: O(n log n).
//!
//! **Exact arithmetic**: midranks are accumulated doubled (always integers) in
//! `u128`, and both count products are formed in `u128`. Nothing wraps for any
//! sample that fits in memory, and 2U is exact; the only rounding is the final
//! division.

use serde::{Deserialize, Serialize};

use crate::config::EstimatorConfig;
use crate::error::{AucError, Class, Result};
use crate::utils::labels::{check_scores, validate_sample, ClassCounts};
use crate::utils::ranking::doubled_midranks;

/// Result of a rank-sum AUC calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AucResult {
    /// Area under the ROC curve (0-1)
    pub auc: f64,
    /// Mann-Whitney U of the positive class (wins + ties / 2)
    pub u_statistic: f64,
    /// Sum of positive midranks
    pub rank_sum: f64,
    pub num_pos: u64,
    pub num_neg: u64,
}

/// Rank-sum AUC estimator with its sorting configuration.
#[derive(Debug, Clone, Default)]
pub struct RankSumEstimator {
    config: EstimatorConfig,
}

impl RankSumEstimator {
    pub fn new(config: EstimatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    /// Full result for aligned scores and 0/1 labels.
    pub fn calculate<L: Copy + Into<i64>>(&self, scores: &[f64], labels: &[L]) -> Result<AucResult> {
        let (classes, counts) = validate_sample(scores, labels)?;
        let parallel = self.config.use_parallel(scores.len());

        tracing::debug!(
            n = scores.len(),
            num_pos = counts.num_pos,
            num_neg = counts.num_neg,
            parallel,
            "Ranking sample"
        );

        let doubled = doubled_midranks(scores, parallel);
        let rank_sum2: u128 = doubled
            .iter()
            .zip(&classes)
            .filter(|&(_, &c)| c == Class::Positive)
            .map(|(&r, _)| r as u128)
            .sum();

        Ok(finish(rank_sum2, counts))
    }

    pub fn auc<L: Copy + Into<i64>>(&self, scores: &[f64], labels: &[L]) -> Result<f64> {
        self.calculate(scores, labels).map(|r| r.auc)
    }

    /// Full result when the classes are already separated.
    ///
    /// NaN positions in errors index the concatenation `pos ++ neg`.
    pub fn calculate_groups(&self, pos_scores: &[f64], neg_scores: &[f64]) -> Result<AucResult> {
        if pos_scores.is_empty() {
            return Err(AucError::MissingClass(Class::Positive));
        }
        if neg_scores.is_empty() {
            return Err(AucError::MissingClass(Class::Negative));
        }
        check_scores(pos_scores, 0)?;
        check_scores(neg_scores, pos_scores.len())?;

        let mut combined = Vec::with_capacity(pos_scores.len() + neg_scores.len());
        combined.extend_from_slice(pos_scores);
        combined.extend_from_slice(neg_scores);

        let counts = ClassCounts {
            num_pos: pos_scores.len() as u64,
            num_neg: neg_scores.len() as u64,
        };
        let doubled = doubled_midranks(&combined, self.config.use_parallel(combined.len()));
        let rank_sum2: u128 = doubled[..pos_scores.len()].iter().map(|&r| r as u128).sum();

        Ok(finish(rank_sum2, counts))
    }
}

/// 2U = 2 R_pos - n_pos (n_pos + 1); AUC = 2U / (2 n_pos n_neg)
fn finish(rank_sum2: u128, counts: ClassCounts) -> AucResult {
    let p = counts.num_pos as u128;
    // R_pos >= 1 + 2 + ... + n_pos, so this cannot underflow
    let u2 = rank_sum2 - p * (p + 1);

    AucResult {
        auc: ratio(u2, counts.pairs()),
        u_statistic: u2 as f64 / 2.0,
        rank_sum: rank_sum2 as f64 / 2.0,
        num_pos: counts.num_pos,
        num_neg: counts.num_neg,
    }
}

/// half_units / (2 × pairs), shared with the pairwise estimator so both round
/// identically.
pub(crate) fn ratio(half_units: u128, pairs: u128) -> f64 {
    half_units as f64 / (2 * pairs) as f64
}

/// Calculate AUC with the default estimator, returning the full result.
pub fn calculate_auc<L: Copy + Into<i64>>(scores: &[f64], labels: &[L]) -> Result<AucResult> {
    RankSumEstimator::default().calculate(scores, labels)
}

/// AUC of `scores` against 0/1 `labels`.
///
/// # Example
/// ```
/// let value = rank_auc::auc(&[0.1, 0.4, 0.4, 0.7], &[0, 0, 1, 1]).unwrap();
/// assert_eq!(value, 0.875);
/// ```
pub fn auc<L: Copy + Into<i64>>(scores: &[f64], labels: &[L]) -> Result<f64> {
    RankSumEstimator::default().auc(scores, labels)
}

/// AUC from separate positive and negative score arrays.
pub fn auc_from_groups(pos_scores: &[f64], neg_scores: &[f64]) -> Result<f64> {
    RankSumEstimator::default()
        .calculate_groups(pos_scores, neg_scores)
        .map(|r| r.auc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_tied_fixture() {
        // Midranks 1, 2.5, 2.5, 4 -> R_pos = 6.5, U = 6.5 - 3 = 3.5, AUC = 3.5 / 4
        let result = calculate_auc(&[0.1, 0.4, 0.4, 0.7], &[0, 0, 1, 1]).unwrap();
        assert_relative_eq!(result.rank_sum, 6.5);
        assert_relative_eq!(result.u_statistic, 3.5);
        assert_relative_eq!(result.auc, 0.875);
        assert_eq!((result.num_pos, result.num_neg), (2, 2));
    }

    #[test]
    fn test_known_value_without_ties() {
        // Sorted: 1(N), 2(N), 3(P), 4(N), 5(P) -> R_pos = 8, U = 5, AUC = 5/6
        let value = auc(&[3.0, 5.0, 1.0, 2.0, 4.0], &[1, 1, 0, 0, 0]).unwrap();
        assert_relative_eq!(value, 5.0 / 6.0, epsilon = 1e-12);
    }

    #[test]
    fn test_perfect_and_inverse_separation() {
        let scores = [0.1, 0.2, 0.3, 0.8, 0.9, 1.0];
        assert_eq!(auc(&scores, &[0, 0, 0, 1, 1, 1]).unwrap(), 1.0);
        assert_eq!(auc(&scores, &[1, 1, 1, 0, 0, 0]).unwrap(), 0.0);
    }

    #[test]
    fn test_all_scores_identical() {
        assert_eq!(auc(&[0.5; 6], &[0, 1, 0, 1, 1, 0]).unwrap(), 0.5);
    }

    #[test]
    fn test_groups_match_labelled_form() {
        let pos = [0.4, 0.7];
        let neg = [0.1, 0.4];
        assert_eq!(auc_from_groups(&pos, &neg).unwrap(), 0.875);
    }

    #[test]
    fn test_groups_errors() {
        assert_eq!(
            auc_from_groups(&[], &[1.0]).unwrap_err(),
            AucError::MissingClass(Class::Positive)
        );
        assert_eq!(
            auc_from_groups(&[1.0], &[]).unwrap_err(),
            AucError::MissingClass(Class::Negative)
        );
        assert_eq!(
            auc_from_groups(&[1.0], &[0.0, f64::NAN]).unwrap_err(),
            AucError::NonFiniteScore { index: 2 }
        );
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(auc(&[0.1, 0.2], &[1, 1]).unwrap_err().is_invalid_input());
        assert!(auc(&[0.1, 0.2], &[0, 0]).unwrap_err().is_invalid_input());
        assert!(auc(&[0.1, 0.2, 0.3], &[0, 1]).unwrap_err().is_invalid_input());
        assert!(auc(&[0.1, 0.2], &[0, 3]).unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_parallel_path_agrees() {
        let (scores, labels) = crate::utils::synthetic_sample(4_000, 0.4, 0.3, 3);
        let sequential = RankSumEstimator::new(EstimatorConfig::sequential());
        let parallel = RankSumEstimator::new(EstimatorConfig { parallel_threshold: 0 });
        assert_eq!(
            sequential.calculate(&scores, &labels).unwrap(),
            parallel.calculate(&scores, &labels).unwrap()
        );
    }

    #[test]
    fn test_result_serializes() {
        let result = calculate_auc(&[0.2, 0.9], &[0, 1]).unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["auc"], 1.0);
        assert_eq!(json["num_pos"], 1);
    }
}
