//! Error type for AUC estimation
//!
//! Every failure is an invalid-input condition: the estimator either returns a
//! complete value or rejects the sample before computing anything.

use thiserror::Error;

/// Why a sample was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AucError {
    #[error("scores length {scores} != labels length {labels}")]
    LengthMismatch { scores: usize, labels: usize },

    #[error("label at index {index} is {value}, expected 0 or 1")]
    NonBinaryLabel { index: usize, value: i64 },

    #[error("score at index {index} is NaN")]
    NonFiniteScore { index: usize },

    #[error("sample has no {0} observations")]
    MissingClass(Class),

    #[error("need at least 2 observations, got {0}")]
    TooFewObservations(usize),
}

impl AucError {
    /// Whether this is the invalid-input condition.
    ///
    /// `AucError` models exactly one condition, InvalidInput; the variants
    /// only name its cause. This is therefore true for every variant, and a
    /// new variant that is not an input defect must be excluded here.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            AucError::LengthMismatch { .. }
                | AucError::NonBinaryLabel { .. }
                | AucError::NonFiniteScore { .. }
                | AucError::MissingClass(_)
                | AucError::TooFewObservations(_)
        )
    }
}

/// Binary class of an observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Class {
    Negative,
    Positive,
}

impl std::fmt::Display for Class {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Class::Negative => write!(f, "negative"),
            Class::Positive => write!(f, "positive"),
        }
    }
}

pub type Result<T> = std::result::Result<T, AucError>;
