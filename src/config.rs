//! Estimator configuration
//!
//! Loaded from JSON, e.g. `{ "parallel_threshold": 100000 }`. Missing fields
//! fall back to defaults.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Inputs with at least this many observations are ranked with a parallel sort.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 1 << 17;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct EstimatorConfig {
    /// Sample size at which ranking switches to rayon's parallel sort.
    /// `0` always sorts in parallel; `usize::MAX` never does.
    pub parallel_threshold: usize,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl EstimatorConfig {
    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read estimator config: {:?}", path))?;

        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse estimator config JSON: {:?}", path))
    }

    /// Configuration that never parallelizes.
    pub fn sequential() -> Self {
        Self {
            parallel_threshold: usize::MAX,
        }
    }

    pub(crate) fn use_parallel(&self, n: usize) -> bool {
        n >= self.parallel_threshold
    }
}
