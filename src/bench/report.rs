//! Report rendering for the benchmark table.
//!
//! The format is fixed and pinned by tests: left-justified columns of
//! widths 10/15/15, a 70-dash separator, seconds to 4 decimal places,
//! megabytes to 2, and an optional SUMMARY block under a 70-equals
//! separator.

use std::io::Write;

use crate::error::{MedirError, Result};

use super::{BatchSummary, BenchmarkResult};

/// Width of the header and summary separator lines.
const SEPARATOR_WIDTH: usize = 70;

pub(super) fn write_header<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "{:<10}{:<15}{:<15}", "Size", "Time (s)", "Memory (MB)")?;
    writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH))?;
    Ok(())
}

pub(super) fn write_row<W: Write>(out: &mut W, result: &BenchmarkResult) -> Result<()> {
    writeln!(
        out,
        "{:<10}{:<15.4}{:<15.2}",
        result.size, result.execution_time, result.memory_used
    )?;
    Ok(())
}

/// Write the diagnostic row for a failed trial. Allocation exhaustion gets
/// the short fixed message; anything else prints its error text.
pub(super) fn write_error_row<W: Write>(out: &mut W, size: usize, err: &MedirError) -> Result<()> {
    if err.is_allocation() {
        writeln!(out, "{size:<10}MEMORY ERROR - Size too large")?;
    } else {
        writeln!(out, "{size:<10}ERROR: {err}")?;
    }
    Ok(())
}

pub(super) fn write_summary<W: Write>(out: &mut W, summary: &BatchSummary) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "SUMMARY")?;
    writeln!(out, "{}", "=".repeat(SEPARATOR_WIDTH))?;
    writeln!(
        out,
        "Total execution time: {:.2} seconds",
        summary.total_time
    )?;
    writeln!(
        out,
        "Average memory usage: {:.2} MB",
        summary.average_memory
    )?;
    writeln!(out, "Largest matrix tested: {0}x{0}", summary.largest_size)?;
    Ok(())
}
