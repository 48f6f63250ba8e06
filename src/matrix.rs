//! Matrix type for dense 2D numeric data.

use crate::error::{LinalgError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};

/// A dense matrix of `f64` values (row-major storage).
///
/// A matrix is either uninitialized (`0x0`, no storage, the `Default`) or
/// valid (both dimensions at least one, exactly `rows * cols` elements).
/// Element `(i, j)` lives at offset `i * cols + j`.
///
/// # Examples
///
/// ```
/// use matrixcalc::Matrix;
///
/// let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).expect("2*3 = 6 elements");
/// assert_eq!(m.shape(), (2, 3));
/// assert_eq!(m[(1, 0)], 4.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMatrix")]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

#[derive(Deserialize)]
struct RawMatrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl TryFrom<RawMatrix> for Matrix {
    type Error = LinalgError;

    fn try_from(raw: RawMatrix) -> Result<Self> {
        if raw.rows == 0 && raw.cols == 0 && raw.data.is_empty() {
            return Ok(Self::default());
        }
        Self::from_vec(raw.rows, raw.cols, raw.data)
    }
}

fn check_dims(rows: usize, cols: usize) -> Result<usize> {
    if rows == 0 || cols == 0 {
        return Err(LinalgError::InvalidShape {
            rows,
            cols,
            reason: "both dimensions must be at least 1".to_string(),
        });
    }
    rows.checked_mul(cols)
        .ok_or(LinalgError::AllocationFailed { rows, cols })
}

impl Matrix {
    /// Allocates a zero-filled `rows x cols` matrix.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::InvalidShape`] if either dimension is zero and
    /// [`LinalgError::AllocationFailed`] if the storage cannot be reserved.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        let len = check_dims(rows, cols)?;
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| LinalgError::AllocationFailed { rows, cols })?;
        data.resize(len, 0.0);
        Ok(Self { rows, cols, data })
    }

    /// Creates a matrix from row-major data.
    ///
    /// # Errors
    ///
    /// Returns an error if a dimension is zero or the data length doesn't
    /// match `rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self> {
        let len = check_dims(rows, cols)?;
        if data.len() != len {
            return Err(LinalgError::InvalidShape {
                rows,
                cols,
                reason: format!("data length {} != rows * cols ({len})", data.len()),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Creates a matrix from a slice of rows.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no rows, the first row is empty, or the
    /// rows have different lengths.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        let mut m = Self::new(rows.len(), cols)?;
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(LinalgError::InvalidShape {
                    rows: rows.len(),
                    cols,
                    reason: format!("row {i} has {} values, expected {cols}", row.len()),
                });
            }
            m.row_mut(i).copy_from_slice(row);
        }
        Ok(m)
    }

    /// Creates an `n x n` identity matrix.
    ///
    /// # Errors
    ///
    /// Same as [`Matrix::new`].
    pub fn identity(n: usize) -> Result<Self> {
        let mut m = Self::new(n, n)?;
        for i in 0..n {
            m.data[i * n + i] = 1.0;
        }
        Ok(m)
    }

    /// Creates an `n x 1` column vector.
    ///
    /// # Errors
    ///
    /// Returns an error if `values` is empty.
    pub fn column_vector(values: &[f64]) -> Result<Self> {
        Self::from_vec(values.len(), 1, values.to_vec())
    }

    /// Creates the `k`-th standard basis column vector of length `n`.
    ///
    /// # Errors
    ///
    /// Returns an error if `n` is zero or `k >= n`.
    pub fn basis_vector(n: usize, k: usize) -> Result<Self> {
        let mut e = Self::new(n, 1)?;
        if k >= n {
            return Err(LinalgError::dimension_mismatch(
                "basis_vector",
                (n, 1),
                (k + 1, 1),
            ));
        }
        e.data[k] = 1.0;
        Ok(e)
    }

    /// Releases the storage and resets to the uninitialized state.
    ///
    /// Freeing an uninitialized matrix does nothing.
    pub fn free(&mut self) {
        self.data = Vec::new();
        self.rows = 0;
        self.cols = 0;
    }

    /// Deep copy of an initialized matrix.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::Uninitialized`] if `self` has no storage.
    pub fn try_copy(&self) -> Result<Self> {
        self.require_initialized("copy")?;
        let mut copy = Self::new(self.rows, self.cols)?;
        copy.data.copy_from_slice(&self.data);
        Ok(copy)
    }

    /// Overwrites every element with `value`. No-op when uninitialized.
    pub fn fill(&mut self, value: f64) {
        self.data.fill(value);
    }

    /// Returns the shape as (rows, cols).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// True if the matrix owns storage.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.rows > 0 && self.cols > 0
    }

    /// True for an initialized matrix with `rows == cols`.
    #[must_use]
    pub fn is_square(&self) -> bool {
        self.is_initialized() && self.rows == self.cols
    }

    /// Gets element at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self[(row, col)]
    }

    /// Sets element at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self[(row, col)] = value;
    }

    /// Returns a row as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `row >= rows`.
    #[must_use]
    pub fn row(&self, row: usize) -> &[f64] {
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Returns a row as a mutable slice.
    ///
    /// # Panics
    ///
    /// Panics if `row >= rows`.
    pub fn row_mut(&mut self, row: usize) -> &mut [f64] {
        let start = row * self.cols;
        &mut self.data[start..start + self.cols]
    }

    /// Swaps two rows in place.
    ///
    /// # Panics
    ///
    /// Panics if either row is out of bounds.
    pub fn swap_rows(&mut self, r1: usize, r2: usize) {
        if r1 == r2 {
            return;
        }
        let (lo, hi) = if r1 < r2 { (r1, r2) } else { (r2, r1) };
        let (head, tail) = self.data.split_at_mut(hi * self.cols);
        head[lo * self.cols..(lo + 1) * self.cols].swap_with_slice(&mut tail[..self.cols]);
    }

    /// Returns the underlying data as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Consumes the matrix, returning its row-major data.
    #[must_use]
    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    /// True if both matrices have the same shape and every pair of elements
    /// differs by at most `tol`.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, tol: f64) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(a, b)| (a - b).abs() <= tol)
    }

    pub(crate) fn require_initialized(&self, op: &'static str) -> Result<()> {
        if self.is_initialized() {
            Ok(())
        } else {
            Err(LinalgError::Uninitialized { op })
        }
    }

    pub(crate) fn data_mut(&mut self) -> &mut [f64] {
        &mut self.data
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of bounds for {}x{} matrix",
            self.rows,
            self.cols
        );
        &self.data[row * self.cols + col]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of bounds for {}x{} matrix",
            self.rows,
            self.cols
        );
        &mut self.data[row * self.cols + col]
    }
}

/// One row per line, each element right-aligned in 8 columns.
///
/// Uses 2 decimals unless a precision is given (`{:.4}`).
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(2);
        for i in 0..self.rows {
            for value in self.row(i) {
                write!(f, "{value:8.precision$} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;
