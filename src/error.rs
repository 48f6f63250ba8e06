//! Error types for matrixcalc operations.
//!
//! Every failure maps onto one of the four kernel status codes, see [`Status`].

use std::fmt;
use thiserror::Error;

/// Main error type for kernel operations.
///
/// Dimension problems are caller bugs, allocation failures are resource
/// exhaustion, and a singular matrix is an ordinary mathematical outcome
/// that callers are expected to branch on.
///
/// # Examples
///
/// ```
/// use matrixcalc::error::{LinalgError, Status};
///
/// let err = LinalgError::dimension_mismatch("add", (2, 2), (3, 2));
/// assert!(err.to_string().contains("dimension mismatch"));
/// assert_eq!(err.status(), Status::DimensionError);
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LinalgError {
    /// Operand shapes are incompatible for the operation.
    #[error("Matrix dimension mismatch in {op}: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Operation that rejected its operands
        op: &'static str,
        /// Expected shape description
        expected: String,
        /// Actual shape found
        actual: String,
    },

    /// An operand was never initialized (or has been freed).
    #[error("Uninitialized matrix passed to {op}")]
    Uninitialized {
        /// Operation that received the empty matrix
        op: &'static str,
    },

    /// Requested shape has a zero dimension or data of the wrong length.
    #[error("Invalid matrix shape {rows}x{cols}: {reason}")]
    InvalidShape {
        /// Requested row count
        rows: usize,
        /// Requested column count
        cols: usize,
        /// What is wrong with it
        reason: String,
    },

    /// Backing storage for a matrix could not be allocated.
    #[error("Allocation failed for {rows}x{cols} matrix")]
    AllocationFailed {
        /// Requested row count
        rows: usize,
        /// Requested column count
        cols: usize,
    },

    /// Elimination found no usable pivot.
    #[error("Singular matrix: pivot in column {column} has magnitude {pivot:e} (determinant = {det})")]
    SingularMatrix {
        /// Column where elimination or back-substitution stopped
        column: usize,
        /// Magnitude of the best pivot candidate
        pivot: f64,
        /// Determinant reported for this outcome (always 0.0)
        det: f64,
    },
}

/// Kernel status code.
///
/// A flat view of an operation's outcome for callers that want to branch on
/// a code instead of matching the error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// Operation succeeded.
    Ok,
    /// Shape or precondition violation.
    DimensionError,
    /// Storage could not be allocated.
    AllocationError,
    /// No pivot above tolerance; the matrix has no unique solution or inverse.
    SingularMatrix,
}

impl Status {
    /// Status of an operation result.
    #[must_use]
    pub fn of<T>(result: &Result<T>) -> Self {
        match result {
            Ok(_) => Status::Ok,
            Err(e) => e.status(),
        }
    }

    /// Returns true for [`Status::Ok`].
    #[must_use]
    pub fn is_ok(self) -> bool {
        self == Status::Ok
    }

    /// Stable lowercase name, used in machine-readable output.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Status::Ok => "ok",
            Status::DimensionError => "dimension_error",
            Status::AllocationError => "allocation_error",
            Status::SingularMatrix => "singular_matrix",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl LinalgError {
    /// Create a dimension mismatch error from two shapes.
    #[must_use]
    pub fn dimension_mismatch(
        op: &'static str,
        expected: (usize, usize),
        actual: (usize, usize),
    ) -> Self {
        Self::DimensionMismatch {
            op,
            expected: format!("{}x{}", expected.0, expected.1),
            actual: format!("{}x{}", actual.0, actual.1),
        }
    }

    /// Create a singular matrix error. The determinant is reported as zero.
    #[must_use]
    pub fn singular(column: usize, pivot: f64) -> Self {
        Self::SingularMatrix {
            column,
            pivot,
            det: 0.0,
        }
    }

    /// Status code for this error.
    #[must_use]
    pub fn status(&self) -> Status {
        match self {
            Self::DimensionMismatch { .. } | Self::Uninitialized { .. } | Self::InvalidShape { .. } => {
                Status::DimensionError
            }
            Self::AllocationFailed { .. } => Status::AllocationError,
            Self::SingularMatrix { .. } => Status::SingularMatrix,
        }
    }

    /// Returns true if this is a singular matrix outcome.
    #[must_use]
    pub fn is_singular(&self) -> bool {
        matches!(self, Self::SingularMatrix { .. })
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, LinalgError>;
