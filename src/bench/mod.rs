//! Matrix Multiplication Benchmark Harness (`medir::bench`)
//!
//! One *trial* allocates two constant-filled square operands, times the
//! naive kernel with a monotonic clock, and brackets the multiply with
//! peak-RSS probes. The *batch driver* runs a configured size list under a
//! fail-fast policy and renders the fixed-format report table as it goes.
//!
//! Trials are strictly sequential: a trial's buffers are dropped before the
//! next trial allocates, so memory deltas are never contaminated by an
//! overlapping trial.
//!
//! # Example
//! ```
//! use medir::bench::{run_benchmarks, BenchConfig};
//!
//! let config = BenchConfig::new(vec![4, 8]);
//! let mut table = Vec::new();
//! let results = run_benchmarks(&config, &mut table).unwrap();
//! assert_eq!(results.len(), 2);
//! ```

mod report;

use std::hint::black_box;
use std::io::Write;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::primitives::Matrix;
use crate::probe;

/// Fill value for the left operand of every trial.
const FILL_A: f64 = 1.5;

/// Fill value for the right operand of every trial.
const FILL_B: f64 = 2.5;

/// Configuration for a benchmark batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchConfig {
    /// Matrix sizes to benchmark, in run order.
    pub sizes: Vec<usize>,
    /// Optional size for a discarded warmup trial run before the table.
    pub warmup: Option<usize>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            sizes: vec![64, 128, 256, 512],
            warmup: None,
        }
    }
}

impl BenchConfig {
    /// Create a config for an explicit size list.
    #[must_use]
    pub fn new(sizes: Vec<usize>) -> Self {
        Self {
            sizes,
            warmup: None,
        }
    }

    /// Run a discarded warmup trial of `size` before the batch.
    #[must_use]
    pub fn with_warmup(mut self, size: usize) -> Self {
        self.warmup = Some(size);
        self
    }
}

/// Result of one benchmark trial. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkResult {
    /// Square matrix dimension benchmarked.
    pub size: usize,
    /// Wall-clock kernel time in seconds, from a monotonic clock.
    pub execution_time: f64,
    /// Peak-RSS delta across the trial in megabytes. May be zero or
    /// negative: the OS counter is a high-water mark, not instantaneous
    /// usage.
    pub memory_used: f64,
}

impl BenchmarkResult {
    /// Serialize to JSON string
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize from JSON string
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is invalid.
    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Aggregate statistics over a completed batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    /// Sum of per-trial execution times, in seconds.
    pub total_time: f64,
    /// Mean of per-trial memory deltas, in megabytes.
    pub average_memory: f64,
    /// Size of the last completed trial.
    pub largest_size: usize,
}

/// Summarize a result collection. Returns `None` for an empty batch.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn summarize(results: &[BenchmarkResult]) -> Option<BatchSummary> {
    let last = results.last()?;
    let total_time = results.iter().map(|r| r.execution_time).sum();
    let total_memory: f64 = results.iter().map(|r| r.memory_used).sum();
    Some(BatchSummary {
        total_time,
        average_memory: total_memory / results.len() as f64,
        largest_size: last.size,
    })
}

/// Run one timed trial for `size`.
///
/// Allocates the operands, samples the memory probe, times the kernel with
/// a monotonic clock, samples the probe again, and computes the unclamped
/// delta. All three buffers are dropped at scope exit on every path; no
/// partial result survives an error on any step.
///
/// # Errors
///
/// Returns [`crate::MedirError::Allocation`] when an operand or the product
/// cannot be allocated, carrying the attempted dimensions; any other kernel
/// failure propagates unchanged.
pub fn run_trial(size: usize) -> Result<BenchmarkResult> {
    let a = Matrix::filled(size, size, FILL_A)?;
    let b = Matrix::filled(size, size, FILL_B)?;

    let memory_before = probe::peak_memory_mb();

    let start = Instant::now();
    let product = a.matmul(&b)?;
    let execution_time = start.elapsed().as_secs_f64();

    // The product is otherwise dead here; keep it observable until the
    // second probe so the optimizer cannot free or elide it early.
    black_box(&product);
    let memory_after = probe::peak_memory_mb();

    Ok(BenchmarkResult {
        size,
        execution_time,
        memory_used: memory_after - memory_before,
    })
}

/// Run a fail-fast batch, rendering the report table into `out`.
///
/// Rows are written as trials complete. The first failing trial writes an
/// error row and abandons the remaining sizes; a failed trial is never
/// reattempted. The summary block is written only when at least one trial
/// completed. The configured warmup trial, if any, runs before the first
/// size and is discarded without printing a row.
///
/// # Errors
///
/// Returns [`crate::MedirError::Io`] when the sink rejects a write. Trial
/// failures are reported in-band as table rows, not as `Err`.
pub fn run_benchmarks<W: Write>(
    config: &BenchConfig,
    out: &mut W,
) -> Result<Vec<BenchmarkResult>> {
    report::write_header(out)?;

    let mut results = Vec::new();

    if let Some(warmup_size) = config.warmup {
        if let Err(err) = run_trial(warmup_size) {
            report::write_error_row(out, warmup_size, &err)?;
            return Ok(results);
        }
    }

    for &size in &config.sizes {
        match run_trial(size) {
            Ok(result) => {
                report::write_row(out, &result)?;
                results.push(result);
            }
            Err(err) => {
                report::write_error_row(out, size, &err)?;
                break;
            }
        }
    }

    if let Some(summary) = summarize(&results) {
        report::write_summary(out, &summary)?;
    }

    Ok(results)
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
