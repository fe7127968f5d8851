//! Rank-Sum AUC
//!
//! Area under the ROC curve via the Mann-Whitney rank-sum identity: one sort
//! with midrank tie handling instead of comparing every positive/negative pair.
//!
//! Module layout:
//! - `metrics/`: AUC estimators (rank-sum, pairwise reference)
//! - `utils/`: Midrank assignment, label validation, synthetic samples
//! - `data`: Scored sample loading with Polars
//! - `config`: Estimator configuration
//! - `error`: Invalid-input conditions
//!
//! ```
//! use rank_auc::auc;
//!
//! let value = auc(&[0.2, 0.9, 0.4, 0.1], &[0, 1, 1, 0]).unwrap();
//! assert_eq!(value, 1.0);
//! ```

pub mod config;
pub mod data;
pub mod error;
pub mod metrics;
pub mod utils;

// Re-export commonly used types
pub use config::EstimatorConfig;
pub use data::ScoredSample;
pub use error::{AucError, Class};
pub use metrics::*;
pub use utils::{midranks, synthetic_sample};
