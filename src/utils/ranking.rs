//! Midrank Utilities
//!
//! Ranks every value within the combined sample with the midrank convention:
//! tied values share the average of the positions they jointly occupy.
//!
//! Algorithm:
//! 1. Sort indices once by value (O(n log n))
//! 2. Walk the sorted order, resolving each run of equal values as a tie group
//! 3. A group occupying 0-based positions [i, j) gets rank (i + 1 + j) / 2
//!
//! Ranks are produced doubled (`i + 1 + j`) so they stay integers; callers that
//! sum many ranks do so exactly and halve once at the end.

use rayon::prelude::*;

/// Indices of `values` in ascending order.
///
/// Uses `f64::total_cmp`, so the order is total even for infinities and
/// signed zeros. Callers are expected to have rejected NaN.
pub(crate) fn sorted_order(values: &[f64], parallel: bool) -> Vec<usize> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    if parallel {
        order.par_sort_unstable_by(|&a, &b| values[a].total_cmp(&values[b]));
    } else {
        order.sort_unstable_by(|&a, &b| values[a].total_cmp(&values[b]));
    }
    order
}

/// Twice the midrank of every value, aligned with `values`.
pub(crate) fn doubled_midranks(values: &[f64], parallel: bool) -> Vec<u64> {
    let n = values.len();
    let order = sorted_order(values, parallel);
    let mut doubled = vec![0u64; n];

    let mut i = 0;
    while i < n {
        let current = values[order[i]];
        let mut j = i + 1;
        // -0.0 == 0.0, and total_cmp keeps them adjacent
        while j < n && values[order[j]] == current {
            j += 1;
        }

        let rank2 = (i + 1 + j) as u64;
        for &idx in &order[i..j] {
            doubled[idx] = rank2;
        }
        i = j;
    }

    doubled
}

/// Midrank of every value in `values`, aligned by position.
///
/// rank(x) = (count of values < x) + 1 + (count of other values == x) / 2
///
/// # Example
/// ```
/// use rank_auc::midranks;
///
/// let ranks = midranks(&[0.1, 0.4, 0.4, 0.7]);
/// assert_eq!(ranks, vec![1.0, 2.5, 2.5, 4.0]);
/// ```
pub fn midranks(values: &[f64]) -> Vec<f64> {
    doubled_midranks(values, false)
        .into_iter()
        .map(|r| r as f64 / 2.0)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    /// Direct evaluation of the midrank definition, O(n²).
    fn naive_midranks(values: &[f64]) -> Vec<f64> {
        values
            .iter()
            .enumerate()
            .map(|(i, &x)| {
                let smaller = values.iter().filter(|&&v| v < x).count() as f64;
                let tied = values
                    .iter()
                    .enumerate()
                    .filter(|&(j, &v)| j != i && v == x)
                    .count() as f64;
                smaller + 1.0 + tied / 2.0
            })
            .collect()
    }

    #[test]
    fn test_distinct_values() {
        assert_eq!(midranks(&[3.0, 1.0, 2.0]), vec![3.0, 1.0, 2.0]);
    }

    #[test]
    fn test_tie_groups() {
        let ranks = midranks(&[5.0, 5.0, 5.0, 1.0, 9.0, 1.0]);
        assert_eq!(ranks, vec![4.0, 4.0, 4.0, 1.5, 6.0, 1.5]);
    }

    #[test]
    fn test_all_equal() {
        let ranks = midranks(&[2.0; 5]);
        for r in ranks {
            assert_relative_eq!(r, 3.0);
        }
    }

    #[test]
    fn test_signed_zero_and_infinities() {
        let ranks = midranks(&[0.0, f64::NEG_INFINITY, -0.0, f64::INFINITY]);
        assert_eq!(ranks, vec![2.5, 1.0, 2.5, 4.0]);
    }

    #[test]
    fn test_empty() {
        assert!(midranks(&[]).is_empty());
    }

    #[test]
    fn test_matches_definition_on_random_ties() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let n = rng.gen_range(1..60);
            // Coarse grid forces plenty of ties
            let values: Vec<f64> = (0..n).map(|_| rng.gen_range(0..8) as f64 * 0.25).collect();
            assert_eq!(midranks(&values), naive_midranks(&values));
        }
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let mut rng = StdRng::seed_from_u64(11);
        let values: Vec<f64> = (0..5_000).map(|_| rng.gen_range(0..500) as f64).collect();
        assert_eq!(
            doubled_midranks(&values, true),
            doubled_midranks(&values, false)
        );
    }

    #[test]
    fn test_ranks_sum_to_triangular_number() {
        let values = [0.3, 0.3, 0.1, 0.9, 0.3, 0.2];
        let total: u64 = doubled_midranks(&values, false).iter().sum();
        let n = values.len() as u64;
        assert_eq!(total, n * (n + 1));
    }
}
