//! Elementwise and structural operations.
//!
//! All operations are pure: operands are borrowed and the result is a newly
//! allocated matrix. Uninitialized operands are rejected with a dimension
//! error.

use crate::error::{LinalgError, Result};
use crate::matrix::Matrix;

fn require_same_shape(op: &'static str, a: &Matrix, b: &Matrix) -> Result<()> {
    a.require_initialized(op)?;
    b.require_initialized(op)?;
    if a.shape() != b.shape() {
        return Err(LinalgError::dimension_mismatch(op, a.shape(), b.shape()));
    }
    Ok(())
}

fn zip_with(
    op: &'static str,
    a: &Matrix,
    b: &Matrix,
    f: impl Fn(f64, f64) -> f64,
) -> Result<Matrix> {
    require_same_shape(op, a, b)?;
    let mut out = Matrix::new(a.rows(), a.cols())?;
    let pairs = a.as_slice().iter().zip(b.as_slice());
    for (o, (&x, &y)) in out.data_mut().iter_mut().zip(pairs) {
        *o = f(x, y);
    }
    Ok(out)
}

/// Element-wise sum `a + b`.
///
/// # Errors
///
/// Returns a dimension error unless both operands are initialized and have
/// identical shapes.
pub fn add(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    zip_with("add", a, b, |x, y| x + y)
}

/// Element-wise difference `a - b`.
///
/// # Errors
///
/// Returns a dimension error unless both operands are initialized and have
/// identical shapes.
pub fn sub(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    zip_with("sub", a, b, |x, y| x - y)
}

/// Transpose: element `(j, i)` of the result is element `(i, j)` of `a`.
///
/// # Errors
///
/// Returns [`LinalgError::Uninitialized`] if `a` has no storage.
pub fn transpose(a: &Matrix) -> Result<Matrix> {
    a.require_initialized("transpose")?;
    let (rows, cols) = a.shape();
    let mut out = Matrix::new(cols, rows)?;
    let data = out.data_mut();
    for i in 0..rows {
        for (j, &value) in a.row(i).iter().enumerate() {
            data[j * rows + i] = value;
        }
    }
    Ok(out)
}

/// Matrix product `a * b`.
///
/// Each element is accumulated left to right over the shared dimension,
/// starting from zero.
///
/// # Errors
///
/// Returns a dimension error if `a.cols() != b.rows()`.
pub fn multiply(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    a.require_initialized("multiply")?;
    b.require_initialized("multiply")?;
    if a.cols() != b.rows() {
        return Err(LinalgError::DimensionMismatch {
            op: "multiply",
            expected: format!("{}xN right operand", a.cols()),
            actual: format!("{}x{}", b.rows(), b.cols()),
        });
    }

    let (n, inner, m) = (a.rows(), a.cols(), b.cols());
    let mut out = Matrix::new(n, m)?;
    let data = out.data_mut();
    for i in 0..n {
        let lhs = a.row(i);
        for j in 0..m {
            let mut sum = 0.0;
            for k in 0..inner {
                sum += lhs[k] * b.get(k, j);
            }
            data[i * m + j] = sum;
        }
    }
    Ok(out)
}

fn split_operands<'a>(
    op: &'static str,
    operands: &'a [Matrix],
) -> Result<(&'a Matrix, &'a [Matrix])> {
    operands
        .split_first()
        .ok_or_else(|| LinalgError::DimensionMismatch {
            op,
            expected: "at least 1 operand".to_string(),
            actual: "0 operands".to_string(),
        })
}

fn step_mismatch(
    op: &'static str,
    step: usize,
    expected: (usize, usize),
    actual: (usize, usize),
) -> LinalgError {
    LinalgError::DimensionMismatch {
        op,
        expected: format!("{}x{}", expected.0, expected.1),
        actual: format!("{}x{} (operand {})", actual.0, actual.1, step + 1),
    }
}

/// Sum of all operands, accumulated left to right.
///
/// # Errors
///
/// Returns a dimension error for an empty slice or when any operand's shape
/// differs from the first. The error names the offending operand (1-based).
pub fn sum(operands: &[Matrix]) -> Result<Matrix> {
    let (first, rest) = split_operands("sum", operands)?;
    let mut acc = first.try_copy()?;
    for (k, m) in rest.iter().enumerate() {
        m.require_initialized("sum")?;
        if m.shape() != acc.shape() {
            return Err(step_mismatch("sum", k + 1, acc.shape(), m.shape()));
        }
        for (o, &x) in acc.data_mut().iter_mut().zip(m.as_slice()) {
            *o += x;
        }
    }
    Ok(acc)
}

/// The first operand minus every following operand.
///
/// # Errors
///
/// Same conditions as [`sum`].
pub fn difference(operands: &[Matrix]) -> Result<Matrix> {
    let (first, rest) = split_operands("difference", operands)?;
    let mut acc = first.try_copy()?;
    for (k, m) in rest.iter().enumerate() {
        m.require_initialized("difference")?;
        if m.shape() != acc.shape() {
            return Err(step_mismatch("difference", k + 1, acc.shape(), m.shape()));
        }
        for (o, &x) in acc.data_mut().iter_mut().zip(m.as_slice()) {
            *o -= x;
        }
    }
    Ok(acc)
}

/// Product of all operands, multiplied left to right.
///
/// # Errors
///
/// Returns a dimension error for an empty slice or when the running result's
/// column count doesn't match the next operand's row count.
pub fn product(operands: &[Matrix]) -> Result<Matrix> {
    let (first, rest) = split_operands("product", operands)?;
    let mut acc = first.try_copy()?;
    for (k, m) in rest.iter().enumerate() {
        m.require_initialized("product")?;
        if acc.cols() != m.rows() {
            let expected = (acc.cols(), m.cols());
            return Err(step_mismatch("product", k + 1, expected, m.shape()));
        }
        acc = multiply(&acc, m)?;
    }
    Ok(acc)
}

impl Matrix {
    /// Adds another matrix element-wise. See [`add`].
    ///
    /// # Errors
    ///
    /// Returns an error if dimensions don't match.
    pub fn add(&self, other: &Self) -> Result<Self> {
        add(self, other)
    }

    /// Subtracts another matrix element-wise. See [`sub`].
    ///
    /// # Errors
    ///
    /// Returns an error if dimensions don't match.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        sub(self, other)
    }

    /// Transposes the matrix. See [`transpose`].
    ///
    /// # Errors
    ///
    /// Returns an error if the matrix is uninitialized.
    pub fn transpose(&self) -> Result<Self> {
        transpose(self)
    }

    /// Matrix-matrix multiplication. See [`multiply`].
    ///
    /// # Errors
    ///
    /// Returns an error if dimensions don't match.
    pub fn matmul(&self, other: &Self) -> Result<Self> {
        multiply(self, other)
    }
}

#[cfg(test)]
#[path = "ops_tests.rs"]
mod tests;
