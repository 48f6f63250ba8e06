//! Singularity tolerance.
//!
//! A single epsilon decides when a pivot or a back-substitution diagonal is
//! treated as zero. The same value is used for both checks.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Magnitude below which a pivot is considered zero.
///
/// # Examples
///
/// ```
/// use matrixcalc::Tolerance;
///
/// let tol = Tolerance::default();
/// assert_eq!(tol.epsilon(), 1e-12);
/// assert!(tol.is_negligible(1e-13));
/// assert!(!tol.is_negligible(-1e-3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Tolerance(f64);

impl Tolerance {
    /// Reference epsilon for double precision elimination.
    pub const DEFAULT: Tolerance = Tolerance(1e-12);

    /// Creates a tolerance.
    ///
    /// Returns `None` unless `epsilon` is finite and strictly positive.
    #[must_use]
    pub fn new(epsilon: f64) -> Option<Self> {
        (epsilon.is_finite() && epsilon > 0.0).then_some(Self(epsilon))
    }

    /// Returns the epsilon.
    #[must_use]
    pub fn epsilon(self) -> f64 {
        self.0
    }

    /// True if `|value|` is strictly below the epsilon.
    #[must_use]
    pub fn is_negligible(self, value: f64) -> bool {
        value.abs() < self.0
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<f64> for Tolerance {
    type Error = String;

    fn try_from(epsilon: f64) -> Result<Self, Self::Error> {
        Self::new(epsilon).ok_or_else(|| format!("tolerance must be finite and positive, got {epsilon}"))
    }
}

impl From<Tolerance> for f64 {
    fn from(tol: Tolerance) -> Self {
        tol.0
    }
}

impl fmt::Display for Tolerance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:e}", self.0)
    }
}
