//! Utility modules for AUC estimation
//!
//! Contains shared functionality used by the estimators:
//! - Ranking: Midrank assignment over the combined sample
//! - Labels: Binary label validation and class counting
//! - Synthetic: Seeded labelled samples for benchmarks

pub mod ranking;
pub mod labels;
pub mod synthetic;

// Re-export commonly used types
pub use ranking::midranks;
pub use labels::{validate_sample, ClassCounts};
pub use synthetic::synthetic_sample;
