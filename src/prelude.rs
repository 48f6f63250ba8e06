//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use matrixcalc::prelude::*;
//! ```

pub use crate::error::{LinalgError, Status};
pub use crate::matrix::Matrix;
pub use crate::solve::GaussSolver;
pub use crate::tolerance::Tolerance;
