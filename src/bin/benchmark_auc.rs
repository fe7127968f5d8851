//! Benchmark rank-sum AUC against the pairwise baseline
//!
//! Times both estimators on seeded synthetic samples of growing size and
//! checks they agree. With `--input`, reports the AUC of a scored CSV/Parquet
//! file instead.
//!
//! ```text
//! benchmark_auc --sizes 1000,10000,100000 --seed 42
//! benchmark_auc --input scores.parquet --score-col prob --label-col y
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use rank_auc::{pairwise_auc, synthetic_sample, EstimatorConfig, RankSumEstimator, ScoredSample};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "benchmark_auc")]
#[command(about = "Rank-sum vs pairwise AUC timing")]
struct Cli {
    /// Sample sizes to benchmark
    #[arg(long, value_delimiter = ',', default_value = "1000,10000,100000,1000000")]
    sizes: Vec<usize>,

    #[arg(long, default_value = "42")]
    seed: u64,

    /// Fraction of positive observations
    #[arg(long, default_value = "0.5")]
    positive_rate: f64,

    /// Shift of positive scores relative to negatives
    #[arg(long, default_value = "0.2")]
    separation: f64,

    /// Skip the pairwise baseline above this many observations
    #[arg(long, default_value = "20000")]
    pairwise_limit: usize,

    /// Estimator config JSON
    #[arg(long)]
    config: Option<PathBuf>,

    /// Scored CSV or Parquet file to evaluate instead of synthetic data
    #[arg(long)]
    input: Option<PathBuf>,

    #[arg(long, default_value = "score")]
    score_col: String,

    #[arg(long, default_value = "label")]
    label_col: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("rank_auc=info")),
        )
        .init();

    let cli = Cli::parse();
    anyhow::ensure!(
        (0.0..=1.0).contains(&cli.positive_rate),
        "--positive-rate must be within [0, 1], got {}",
        cli.positive_rate
    );

    let config = match &cli.config {
        Some(path) => EstimatorConfig::load(path)?,
        None => EstimatorConfig::default(),
    };
    tracing::info!(parallel_threshold = config.parallel_threshold, "Estimator configured");
    let estimator = RankSumEstimator::new(config);

    match &cli.input {
        Some(path) => report_file(&cli, &estimator, path),
        None => run_benchmark(&cli, &estimator),
    }
}

fn report_file(cli: &Cli, estimator: &RankSumEstimator, path: &Path) -> Result<()> {
    println!("Loading scored sample from: {:?}", path);
    let sample = ScoredSample::from_path(path, &cli.score_col, &cli.label_col)?;

    let start = Instant::now();
    let result = sample
        .calculate(estimator)
        .with_context(|| format!("Cannot compute AUC for {:?}", path))?;
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    println!("\n{}", "=".repeat(70));
    println!("AUC REPORT");
    println!("{}", "=".repeat(70));
    println!("Observations: {}", sample.len());
    println!("  Positive: {}", result.num_pos);
    println!("  Negative: {}", result.num_neg);
    println!("Rank sum (positive): {:.1}", result.rank_sum);
    println!("U statistic: {:.1}", result.u_statistic);
    println!("AUC: {:.6}", result.auc);
    println!("Time: {:.3} ms", elapsed_ms);

    if sample.len() <= cli.pairwise_limit {
        let pairwise = pairwise_auc(&sample.scores, &sample.labels)?;
        println!("Pairwise check: {:.6} ({})", pairwise, status(pairwise, result.auc));
    }

    Ok(())
}

fn run_benchmark(cli: &Cli, estimator: &RankSumEstimator) -> Result<()> {
    println!("\n{}", "=".repeat(70));
    println!("RANK-SUM vs PAIRWISE AUC");
    println!("{}", "=".repeat(70));
    println!(
        "{:>10}  {:>10}  {:>14}  {:>14}  {:>9}  {}",
        "n", "auc", "rank-sum ms", "pairwise ms", "speedup", "status"
    );

    let mut all_passed = true;
    let mut compared = 0usize;

    for &n in &cli.sizes {
        let (scores, labels) = synthetic_sample(n, cli.positive_rate, cli.separation, cli.seed);

        let start = Instant::now();
        let result = match estimator.calculate(&scores, &labels) {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!(n, error = %e, "Skipping sample size");
                continue;
            }
        };
        let rank_ms = start.elapsed().as_secs_f64() * 1000.0;

        if n > cli.pairwise_limit {
            println!(
                "{:>10}  {:>10.6}  {:>14.3}  {:>14}  {:>9}  -",
                n, result.auc, rank_ms, "skipped", "-"
            );
            continue;
        }

        let start = Instant::now();
        let pairwise = pairwise_auc(&scores, &labels)?;
        let pairwise_ms = start.elapsed().as_secs_f64() * 1000.0;

        let check = status(pairwise, result.auc);
        all_passed &= check == "MATCH";
        compared += 1;

        println!(
            "{:>10}  {:>10.6}  {:>14.3}  {:>14.3}  {:>8.0}×  {}",
            n,
            result.auc,
            rank_ms,
            pairwise_ms,
            pairwise_ms / rank_ms.max(f64::EPSILON),
            check
        );
    }

    println!("{}", "=".repeat(70));
    println!("{}", summary(compared, all_passed)?);
    Ok(())
}

fn status(pairwise: f64, rank_sum: f64) -> &'static str {
    if pairwise == rank_sum {
        "MATCH"
    } else {
        "MISMATCH"
    }
}

/// Closing line of the benchmark table; fails if any comparison mismatched.
fn summary(compared: usize, all_passed: bool) -> Result<String> {
    if !all_passed {
        anyhow::bail!("Rank-sum and pairwise estimators disagree");
    }
    Ok(if compared == 0 {
        "No sizes compared against the pairwise baseline.".to_string()
    } else {
        format!("All {} compared sizes agree.", compared)
    })
}
