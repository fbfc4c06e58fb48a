//! Error types for Medir operations.
//!
//! Provides rich error context for harness consumers.

use std::fmt;

/// Main error type for Medir operations.
///
/// Distinguishes allocation exhaustion, which is expected at large sizes and
/// halts the remaining batch, from kernel misuse and unclassified trial
/// failures.
///
/// # Examples
///
/// ```
/// use medir::error::MedirError;
///
/// let err = MedirError::Allocation { rows: 1 << 40, cols: 1 << 40 };
/// assert!(err.to_string().contains("allocation failed"));
/// ```
#[derive(Debug)]
pub enum MedirError {
    /// Requested matrix buffer exceeds available memory.
    Allocation {
        /// Requested row count
        rows: usize,
        /// Requested column count
        cols: usize,
    },

    /// Matrix dimensions don't match for the operation.
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// I/O error while writing a report.
    Io(std::io::Error),

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for MedirError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MedirError::Allocation { rows, cols } => {
                write!(
                    f,
                    "allocation failed: {rows}x{cols} matrix exceeds available memory"
                )
            }
            MedirError::DimensionMismatch { expected, actual } => {
                write!(
                    f,
                    "Matrix dimension mismatch: expected {expected}, got {actual}"
                )
            }
            MedirError::Io(e) => write!(f, "I/O error: {e}"),
            MedirError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for MedirError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MedirError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for MedirError {
    fn from(err: std::io::Error) -> Self {
        MedirError::Io(err)
    }
}

impl From<&str> for MedirError {
    fn from(msg: &str) -> Self {
        MedirError::Other(msg.to_string())
    }
}

impl From<String> for MedirError {
    fn from(msg: String) -> Self {
        MedirError::Other(msg)
    }
}

impl MedirError {
    /// Create an allocation error for the requested shape
    #[must_use]
    pub fn allocation(rows: usize, cols: usize) -> Self {
        Self::Allocation { rows, cols }
    }

    /// Create a dimension mismatch error from two shapes
    #[must_use]
    pub fn dimension_mismatch(expected: (usize, usize), actual: (usize, usize)) -> Self {
        Self::DimensionMismatch {
            expected: format!("{}x{}", expected.0, expected.1),
            actual: format!("{}x{}", actual.0, actual.1),
        }
    }

    /// True when the error is allocation exhaustion
    #[must_use]
    pub fn is_allocation(&self) -> bool {
        matches!(self, Self::Allocation { .. })
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, MedirError>;
