//! AUC estimators
//!
//! Each estimator is implemented in its own module:
//! - `rank_sum_auc`: Mann-Whitney U via midrank sums, O(n log n)
//! - `pairwise_auc`: Direct dominance count, O(n_pos × n_neg), reference baseline

pub mod rank_sum_auc;
pub mod pairwise_auc;

// Re-export estimator functions
pub use rank_sum_auc::{auc, auc_from_groups, calculate_auc, AucResult, RankSumEstimator};
pub use pairwise_auc::pairwise_auc;
