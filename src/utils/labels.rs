//! Label Validation
//!
//! Converts caller labels into validated binary classes and checks that the
//! sample is usable for AUC: aligned lengths, no NaN scores, both classes
//! present.

use crate::error::{AucError, Class, Result};

/// Class counts of a validated sample.
///
/// Counts are `u64` regardless of platform; products of counts are always
/// formed in `u128` by the estimators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassCounts {
    pub num_pos: u64,
    pub num_neg: u64,
}

impl ClassCounts {
    /// num_pos × num_neg: the number of (positive, negative) pairs.
    pub fn pairs(&self) -> u128 {
        self.num_pos as u128 * self.num_neg as u128
    }
}

/// Map a single label to its class.
pub fn to_class<L: Copy + Into<i64>>(label: L, index: usize) -> Result<Class> {
    match label.into() {
        0 => Ok(Class::Negative),
        1 => Ok(Class::Positive),
        value => Err(AucError::NonBinaryLabel { index, value }),
    }
}

/// Validate a scores/labels pair and return per-observation classes.
///
/// Checks run in order: length mismatch, too few observations, NaN scores,
/// non-binary labels, missing class.
pub fn validate_sample<L: Copy + Into<i64>>(
    scores: &[f64],
    labels: &[L],
) -> Result<(Vec<Class>, ClassCounts)> {
    if scores.len() != labels.len() {
        return Err(AucError::LengthMismatch {
            scores: scores.len(),
            labels: labels.len(),
        });
    }
    if scores.len() < 2 {
        return Err(AucError::TooFewObservations(scores.len()));
    }
    if let Some(index) = scores.iter().position(|s| s.is_nan()) {
        return Err(AucError::NonFiniteScore { index });
    }

    let classes = labels
        .iter()
        .enumerate()
        .map(|(i, &l)| to_class(l, i))
        .collect::<Result<Vec<_>>>()?;

    let num_pos = classes.iter().filter(|&&c| c == Class::Positive).count() as u64;
    let num_neg = classes.len() as u64 - num_pos;

    if num_pos == 0 {
        return Err(AucError::MissingClass(Class::Positive));
    }
    if num_neg == 0 {
        return Err(AucError::MissingClass(Class::Negative));
    }

    Ok((classes, ClassCounts { num_pos, num_neg }))
}

/// Reject NaN in a single score group.
pub(crate) fn check_scores(scores: &[f64], offset: usize) -> Result<()> {
    match scores.iter().position(|s| s.is_nan()) {
        Some(index) => Err(AucError::NonFiniteScore { index: offset + index }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_common_label_types() {
        let scores = [0.2, 0.8];
        assert!(validate_sample(&scores, &[0u8, 1]).is_ok());
        assert!(validate_sample(&scores, &[0i32, 1]).is_ok());
        assert!(validate_sample(&scores, &[0i64, 1]).is_ok());
        assert!(validate_sample(&scores, &[false, true]).is_ok());
    }

    #[test]
    fn test_counts() {
        let (classes, counts) = validate_sample(&[1.0, 2.0, 3.0], &[1, 0, 1]).unwrap();
        assert_eq!(classes, vec![Class::Positive, Class::Negative, Class::Positive]);
        assert_eq!(counts, ClassCounts { num_pos: 2, num_neg: 1 });
        assert_eq!(counts.pairs(), 2);
    }

    #[test]
    fn test_rejects_non_binary() {
        let err = validate_sample(&[1.0, 2.0, 3.0], &[0, 2, 1]).unwrap_err();
        assert_eq!(err, AucError::NonBinaryLabel { index: 1, value: 2 });

        let err = validate_sample(&[1.0, 2.0], &[-1i32, 1]).unwrap_err();
        assert_eq!(err, AucError::NonBinaryLabel { index: 0, value: -1 });
    }

    #[test]
    fn test_rejects_single_class() {
        let err = validate_sample(&[1.0, 2.0], &[1, 1]).unwrap_err();
        assert_eq!(err, AucError::MissingClass(Class::Negative));

        let err = validate_sample(&[1.0, 2.0], &[0, 0]).unwrap_err();
        assert_eq!(err, AucError::MissingClass(Class::Positive));
    }

    #[test]
    fn test_rejects_length_mismatch_and_tiny_samples() {
        let err = validate_sample(&[1.0, 2.0], &[0]).unwrap_err();
        assert_eq!(err, AucError::LengthMismatch { scores: 2, labels: 1 });

        let err = validate_sample::<u8>(&[], &[]).unwrap_err();
        assert_eq!(err, AucError::TooFewObservations(0));
    }

    #[test]
    fn test_rejects_nan() {
        let err = validate_sample(&[1.0, f64::NAN], &[0, 1]).unwrap_err();
        assert_eq!(err, AucError::NonFiniteScore { index: 1 });
    }

    #[test]
    fn test_pairs_beyond_32_bits() {
        let counts = ClassCounts { num_pos: 50_000, num_neg: 50_000 };
        assert_eq!(counts.pairs(), 2_500_000_000);
    }
}
