//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use medir::prelude::*;
//! ```

pub use crate::bench::{
    run_benchmarks, run_trial, summarize, BatchSummary, BenchConfig, BenchmarkResult,
};
pub use crate::error::{MedirError, Result};
pub use crate::primitives::Matrix;
