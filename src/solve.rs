//! Determinant, linear solve and inverse by Gaussian elimination.
//!
//! # Solver
//!
//! Every routine deep-copies its input into a working matrix, reduces it with
//! [`forward_eliminate`](crate::elimination::forward_eliminate) and reads the
//! answer off the echelon form. The inverse is assembled column by column
//! from `n` independent solves; no factorization is cached between them.
//!
//! # Performance
//!
//! - determinant, solve: O(n³)
//! - inverse: O(n⁴)

use crate::elimination::forward_eliminate;
use crate::error::{LinalgError, Result};
use crate::matrix::Matrix;
use crate::tolerance::Tolerance;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Gaussian elimination solver with a configurable singularity tolerance.
///
/// # Examples
///
/// ```
/// use matrixcalc::{GaussSolver, Matrix, Tolerance};
///
/// let a = Matrix::from_rows(&[[3.0, 2.0], [1.0, 2.0]]).unwrap();
/// let b = Matrix::column_vector(&[5.0, 5.0]).unwrap();
///
/// let solver = GaussSolver::new().with_tolerance(Tolerance::new(1e-10).unwrap());
/// let x = solver.solve(&a, &b).unwrap();
/// assert!((x.get(0, 0) - 0.0).abs() < 1e-12);
/// assert!((x.get(1, 0) - 2.5).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GaussSolver {
    tolerance: Tolerance,
}

fn require_square(op: &'static str, a: &Matrix) -> Result<()> {
    a.require_initialized(op)?;
    if a.rows() != a.cols() {
        return Err(LinalgError::dimension_mismatch(op, (a.rows(), a.rows()), a.shape()));
    }
    Ok(())
}

impl GaussSolver {
    /// Creates a solver with the default tolerance.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the singularity tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Returns the singularity tolerance.
    #[must_use]
    pub fn tolerance(&self) -> Tolerance {
        self.tolerance
    }

    /// Determinant of a square matrix.
    ///
    /// Computed as the swap sign times the product of the echelon diagonal.
    ///
    /// # Errors
    ///
    /// - Dimension error if `a` is not square.
    /// - [`LinalgError::SingularMatrix`] if elimination finds no pivot. The
    ///   determinant of that outcome is `0.0` and is carried in the error's
    ///   `det` field, so a computed zero and an early stop stay
    ///   distinguishable.
    #[instrument(level = "debug", skip_all, fields(n = a.rows()))]
    pub fn determinant(&self, a: &Matrix) -> Result<f64> {
        require_square("determinant", a)?;
        let mut work = a.try_copy()?;
        let info = forward_eliminate(&mut work, self.tolerance)?;

        let n = work.rows();
        let det = (0..n).fold(info.sign(), |acc, i| acc * work.get(i, i));
        debug!(det, swaps = info.swaps, "determinant computed");
        Ok(det)
    }

    /// Solves `A x = b` for a square `A` and a single column `b`.
    ///
    /// # Errors
    ///
    /// - Dimension error unless `a` is `n x n` and `b` is `n x 1`.
    /// - [`LinalgError::SingularMatrix`] if elimination finds no pivot, or if a
    ///   diagonal used during back-substitution falls below the tolerance.
    #[instrument(level = "debug", skip_all, fields(n = a.rows()))]
    pub fn solve(&self, a: &Matrix, b: &Matrix) -> Result<Matrix> {
        require_square("solve", a)?;
        b.require_initialized("solve")?;
        let n = a.rows();
        if b.shape() != (n, 1) {
            return Err(LinalgError::dimension_mismatch("solve", (n, 1), b.shape()));
        }

        let mut aug = Matrix::new(n, n + 1)?;
        for i in 0..n {
            let row = aug.row_mut(i);
            row[..n].copy_from_slice(a.row(i));
            row[n] = b.get(i, 0);
        }

        forward_eliminate(&mut aug, self.tolerance)?;
        self.back_substitute(&aug)
    }

    /// Back-substitution over an `n x (n+1)` row-echelon augmented matrix.
    fn back_substitute(&self, aug: &Matrix) -> Result<Matrix> {
        let n = aug.rows();
        let mut x = Matrix::new(n, 1)?;
        for i in (0..n).rev() {
            let row = aug.row(i);
            let mut sum = 0.0;
            for j in (i + 1)..n {
                sum += row[j] * x.get(j, 0);
            }

            let diag = row[i];
            if self.tolerance.is_negligible(diag) {
                debug!(row = i, diag, "negligible diagonal during back-substitution");
                return Err(LinalgError::singular(i, diag.abs()));
            }
            x.set(i, 0, (row[n] - sum) / diag);
        }
        Ok(x)
    }

    /// Inverse of a square matrix, one solve per column.
    ///
    /// Column `k` of the result solves `A x = e_k`.
    ///
    /// # Errors
    ///
    /// - Dimension error if `a` is not square.
    /// - The first error returned by any of the column solves, typically
    ///   [`LinalgError::SingularMatrix`]. Nothing is returned on failure.
    #[instrument(level = "debug", skip_all, fields(n = a.rows()))]
    pub fn inverse(&self, a: &Matrix) -> Result<Matrix> {
        require_square("inverse", a)?;
        let n = a.rows();
        let mut inv = Matrix::new(n, n)?;
        for col in 0..n {
            let e = Matrix::basis_vector(n, col)?;
            let x = self.solve(a, &e)?;
            for (i, &value) in x.as_slice().iter().enumerate() {
                inv.set(i, col, value);
            }
        }
        Ok(inv)
    }
}

/// Determinant with the default tolerance. See [`GaussSolver::determinant`].
///
/// # Errors
///
/// See [`GaussSolver::determinant`].
pub fn determinant(a: &Matrix) -> Result<f64> {
    GaussSolver::default().determinant(a)
}

/// Solves `A x = b` with the default tolerance. See [`GaussSolver::solve`].
///
/// # Errors
///
/// See [`GaussSolver::solve`].
pub fn solve(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    GaussSolver::default().solve(a, b)
}

/// Inverse with the default tolerance. See [`GaussSolver::inverse`].
///
/// # Errors
///
/// See [`GaussSolver::inverse`].
pub fn inverse(a: &Matrix) -> Result<Matrix> {
    GaussSolver::default().inverse(a)
}

impl Matrix {
    /// Determinant with the default tolerance.
    ///
    /// # Errors
    ///
    /// See [`GaussSolver::determinant`].
    pub fn determinant(&self) -> Result<f64> {
        determinant(self)
    }

    /// Solves `self * x = b` with the default tolerance.
    ///
    /// # Errors
    ///
    /// See [`GaussSolver::solve`].
    pub fn solve(&self, b: &Matrix) -> Result<Matrix> {
        solve(self, b)
    }

    /// Inverse with the default tolerance.
    ///
    /// # Errors
    ///
    /// See [`GaussSolver::inverse`].
    pub fn inverse(&self) -> Result<Matrix> {
        inverse(self)
    }
}

#[cfg(test)]
#[path = "solve_tests.rs"]
mod tests;
