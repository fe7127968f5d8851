//! Scored Sample Loading
//!
//! Loads a score column and a 0/1 label column from CSV or Parquet using
//! Polars. Boolean label columns are accepted and read as 0/1.

use polars::prelude::*;
use anyhow::{Context, Result};
use std::path::Path;

use crate::metrics::{AucResult, RankSumEstimator};

/// Scores and labels aligned by row
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredSample {
    pub scores: Vec<f64>,
    pub labels: Vec<u8>,
}

impl ScoredSample {
    /// Load from a CSV file with a header row
    pub fn from_csv(path: &Path, score_col: &str, label_col: &str) -> Result<Self> {
        let df = CsvReadOptions::default()
            .with_has_header(true)
            .try_into_reader_with_file_path(Some(path.to_path_buf()))
            .with_context(|| format!("Failed to create CSV reader: {:?}", path))?
            .finish()
            .with_context(|| format!("Failed to load CSV: {:?}", path))?;

        tracing::debug!(rows = df.height(), path = %path.display(), "Loaded scored CSV");
        Self::from_dataframe(&df, score_col, label_col)
    }

    /// Load from Parquet, projecting only the two needed columns
    pub fn from_parquet(path: &Path, score_col: &str, label_col: &str) -> Result<Self> {
        let df = LazyFrame::scan_parquet(path, Default::default())
            .with_context(|| format!("Failed to scan parquet: {:?}", path))?
            .select([col(score_col), col(label_col)])
            .collect()
            .with_context(|| format!("Failed to load parquet: {:?}", path))?;

        tracing::debug!(rows = df.height(), path = %path.display(), "Loaded scored parquet");
        Self::from_dataframe(&df, score_col, label_col)
    }

    /// Load from CSV or Parquet by file extension
    pub fn from_path(path: &Path, score_col: &str, label_col: &str) -> Result<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("parquet") => Self::from_parquet(path, score_col, label_col),
            Some("csv") => Self::from_csv(path, score_col, label_col),
            other => anyhow::bail!("Unsupported file type {:?} for {:?}", other, path),
        }
    }

    /// Extract scores and labels from an in-memory DataFrame
    ///
    /// Both columns are cast strictly: a value that does not convert is an
    /// error, never a silent null. Float label columns must hold exactly 0.0
    /// or 1.0. Nulls and labels outside {0, 1} are rejected with the
    /// offending row.
    pub fn from_dataframe(df: &DataFrame, score_col: &str, label_col: &str) -> Result<Self> {
        let score_series = df
            .column(score_col)
            .with_context(|| format!("Column '{}' not found", score_col))?
            .strict_cast(&DataType::Float64)
            .with_context(|| format!("Column '{}' is not numeric", score_col))?;
        let score_ca = score_series.f64()?;

        let mut scores = Vec::with_capacity(df.height());
        for (row, value) in score_ca.into_iter().enumerate() {
            let value = value
                .ok_or_else(|| anyhow::anyhow!("Null score in '{}' at row {}", score_col, row))?;
            scores.push(value);
        }

        let labels = Self::extract_labels(df, label_col)?;

        Ok(Self { scores, labels })
    }

    /// Read a 0/1 label column of integer, boolean or float type
    fn extract_labels(df: &DataFrame, label_col: &str) -> Result<Vec<u8>> {
        let column = df
            .column(label_col)
            .with_context(|| format!("Column '{}' not found", label_col))?;

        let mut labels = Vec::with_capacity(df.height());

        if column.dtype().is_float() {
            // An integer cast would truncate 0.9 to 0
            let float_series = column.strict_cast(&DataType::Float64)?;
            for (row, value) in float_series.f64()?.into_iter().enumerate() {
                match value {
                    Some(v) if v == 0.0 => labels.push(0),
                    Some(v) if v == 1.0 => labels.push(1),
                    Some(other) => anyhow::bail!(
                        "Label {} in '{}' at row {} is not 0 or 1",
                        other, label_col, row
                    ),
                    None => anyhow::bail!("Null label in '{}' at row {}", label_col, row),
                }
            }
            return Ok(labels);
        }

        let int_series = column
            .strict_cast(&DataType::Int64)
            .with_context(|| format!("Column '{}' is not integer or boolean", label_col))?;
        for (row, value) in int_series.i64()?.into_iter().enumerate() {
            match value {
                Some(0) => labels.push(0),
                Some(1) => labels.push(1),
                Some(other) => anyhow::bail!(
                    "Label {} in '{}' at row {} is not 0 or 1",
                    other, label_col, row
                ),
                None => anyhow::bail!("Null label in '{}' at row {}", label_col, row),
            }
        }

        Ok(labels)
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// AUC with the default estimator
    pub fn auc(&self) -> crate::error::Result<f64> {
        crate::auc(&self.scores, &self.labels)
    }

    /// Full result with a configured estimator
    pub fn calculate(&self, estimator: &RankSumEstimator) -> crate::error::Result<AucResult> {
        estimator.calculate(&self.scores, &self.labels)
    }
}
