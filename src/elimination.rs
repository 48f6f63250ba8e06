//! Forward elimination with partial pivoting.
//!
//! Shared by the determinant and the linear solver. The engine works in
//! place on an `n x m` matrix with `m >= n`: a plain square matrix is reduced
//! to upper-triangular form, an augmented `[A | b]` to row-echelon form.

use crate::error::{LinalgError, Result};
use crate::matrix::Matrix;
use crate::tolerance::Tolerance;
use tracing::{debug, trace};

/// Summary of a completed forward elimination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Elimination {
    /// Number of row swaps performed while pivoting.
    pub swaps: usize,
}

impl Elimination {
    /// Determinant sign contributed by the row swaps: `+1.0` or `-1.0`.
    #[must_use]
    pub fn sign(&self) -> f64 {
        if self.swaps % 2 == 0 {
            1.0
        } else {
            -1.0
        }
    }
}

/// Row in `col..rows` with the largest magnitude in column `col`, and that
/// magnitude. Ties keep the topmost row.
fn find_pivot(work: &Matrix, col: usize) -> (usize, f64) {
    let mut pivot = col;
    let mut best = work.get(col, col).abs();
    for r in (col + 1)..work.rows() {
        let v = work.get(r, col).abs();
        if v > best {
            best = v;
            pivot = r;
        }
    }
    (pivot, best)
}

/// Reduces `work` to echelon form in place.
///
/// For each pivot column the largest-magnitude candidate at or below the
/// diagonal is swapped into place, then every row below it is reduced. The
/// eliminated entry is written as an exact `0.0`.
///
/// # Errors
///
/// - [`LinalgError::Uninitialized`] / [`LinalgError::DimensionMismatch`] if
///   `work` is empty or has fewer columns than rows.
/// - [`LinalgError::SingularMatrix`] if a pivot column has no entry whose
///   magnitude reaches the tolerance. `work` is left partially reduced.
///
/// # Examples
///
/// ```
/// use matrixcalc::{elimination::forward_eliminate, Matrix, Tolerance};
///
/// let mut m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
/// let info = forward_eliminate(&mut m, Tolerance::default()).unwrap();
/// assert_eq!(info.swaps, 1);
/// assert_eq!(m.get(1, 0), 0.0);
/// ```
pub fn forward_eliminate(work: &mut Matrix, tol: Tolerance) -> Result<Elimination> {
    work.require_initialized("forward_eliminate")?;
    let (n, cols) = work.shape();
    if cols < n {
        return Err(LinalgError::DimensionMismatch {
            op: "forward_eliminate",
            expected: format!("{n}xM with M >= {n}"),
            actual: format!("{n}x{cols}"),
        });
    }

    let mut swaps = 0;
    for col in 0..n {
        let (pivot_row, best) = find_pivot(work, col);
        if tol.is_negligible(best) {
            debug!(column = col, pivot = best, tolerance = %tol, "no usable pivot, matrix is singular");
            return Err(LinalgError::singular(col, best));
        }
        if pivot_row != col {
            trace!(column = col, from = pivot_row, "swapping pivot row into place");
            work.swap_rows(pivot_row, col);
            swaps += 1;
        }

        let data = work.data_mut();
        let (upper, lower) = data.split_at_mut((col + 1) * cols);
        let pivot = &upper[col * cols..];
        let pivot_value = pivot[col];
        for target in lower.chunks_exact_mut(cols) {
            let factor = target[col] / pivot_value;
            target[col] = 0.0;
            for k in (col + 1)..cols {
                target[k] -= factor * pivot[k];
            }
        }
    }

    Ok(Elimination { swaps })
}
