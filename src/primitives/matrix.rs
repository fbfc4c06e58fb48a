//! Matrix type for 2D numeric data.

use serde::{Deserialize, Serialize};

use crate::error::{MedirError, Result};

/// A 2D matrix of floating-point values (row-major storage).
///
/// The matrix owns its buffer; the buffer is freed exactly once when the
/// value is dropped, on every exit path. There is no explicit release
/// operation, so double-free and leak-on-early-return cannot be expressed.
///
/// # Examples
///
/// ```
/// use medir::primitives::Matrix;
///
/// let m = Matrix::<f64>::filled(2, 3, 1.5).expect("2x3 fits in memory");
/// assert_eq!(m.shape(), (2, 3));
/// assert!((m.get(1, 2) - 1.5).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Copy> Matrix<T> {
    /// Creates a new matrix from a vector of data.
    ///
    /// # Errors
    ///
    /// Returns an error if data length doesn't match rows * cols.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(MedirError::DimensionMismatch {
                expected: format!("{rows}x{cols} ({} elements)", rows * cols),
                actual: format!("{} elements", data.len()),
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Creates a matrix with every cell set to `fill`.
    ///
    /// Allocation goes through `try_reserve_exact`, so exhaustion surfaces
    /// as an error instead of aborting the process.
    ///
    /// # Errors
    ///
    /// Returns [`MedirError::Allocation`] when the element count overflows
    /// `usize` or the buffer cannot be reserved.
    pub fn filled(rows: usize, cols: usize, fill: T) -> Result<Self> {
        let len = rows
            .checked_mul(cols)
            .ok_or(MedirError::Allocation { rows, cols })?;
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| MedirError::Allocation { rows, cols })?;
        data.resize(len, fill);
        Ok(Self { data, rows, cols })
    }

    /// Returns the shape as (rows, cols).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.cols
    }

    /// Gets element at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> T {
        self.data[row * self.cols + col]
    }

    /// Sets element at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        self.data[row * self.cols + col] = value;
    }

    /// Returns the underlying data as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl Matrix<f64> {
    /// Creates a matrix of zeros.
    ///
    /// # Panics
    ///
    /// Panics if rows * cols overflows `usize`.
    #[must_use]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![0.0; rows * cols],
            rows,
            cols,
        }
    }

    /// Creates an identity matrix.
    #[must_use]
    pub fn eye(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.set(i, i, 1.0);
        }
        m
    }

    /// Matrix multiplication via the naive triple loop.
    ///
    /// Iteration order is `i` outer, `j` middle, `k` inner, accumulating
    /// left-to-right over `k`, so the floating-point rounding of every cell
    /// is reproducible across runs. The kernel is deliberately unoptimized;
    /// it is the benchmarked subject.
    ///
    /// # Errors
    ///
    /// Returns [`MedirError::DimensionMismatch`] when `self.cols` differs
    /// from `other.rows`, and [`MedirError::Allocation`] when the product
    /// buffer cannot be allocated.
    pub fn matmul(&self, other: &Self) -> Result<Self> {
        if self.cols != other.rows {
            return Err(MedirError::dimension_mismatch(
                (self.cols, other.cols),
                (other.rows, other.cols),
            ));
        }

        let mut result = Self::filled(self.rows, other.cols, 0.0)?;
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut sum = 0.0;
                for k in 0..self.cols {
                    sum += self.get(i, k) * other.get(k, j);
                }
                result.set(i, j, sum);
            }
        }

        Ok(result)
    }
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;

#[cfg(test)]
#[path = "tests_matrix_contract.rs"]
mod tests_contract;
