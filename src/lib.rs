//! Medir: dense matrix multiplication benchmark harness in pure Rust.
//!
//! Medir times the naive O(n³) multiplication kernel over a configurable
//! list of square sizes and reports wall-clock seconds plus peak-RSS deltas
//! per size, with aggregate statistics over the batch. The kernel is
//! deliberately unoptimized: it is the measured subject, and the harness
//! around it (timing boundaries, memory deltas, scoped buffer ownership,
//! fail-fast batching) is the point of the crate.
//!
//! # Quick Start
//!
//! ```
//! use medir::prelude::*;
//!
//! let config = BenchConfig::new(vec![4, 8]);
//! let mut table = Vec::new();
//! let results = run_benchmarks(&config, &mut table).unwrap();
//!
//! assert_eq!(results.len(), 2);
//! assert!(results[0].execution_time >= 0.0);
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: the Matrix type and naive multiplication kernel
//! - [`probe`]: process peak-RSS sampling, normalized to megabytes
//! - [`bench`]: per-size trials, the fail-fast batch driver, reporting
//! - [`error`]: error taxonomy (allocation vs everything else)

pub mod bench;
pub mod error;
pub mod prelude;
pub mod primitives;
pub mod probe;

pub use bench::{run_benchmarks, run_trial, summarize, BatchSummary, BenchConfig, BenchmarkResult};
pub use error::{MedirError, Result};
pub use primitives::Matrix;
