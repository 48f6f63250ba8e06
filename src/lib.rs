//! Matrixcalc: dense matrix arithmetic and Gaussian elimination in pure Rust.
//!
//! A small kernel over a row-major `f64` [`Matrix`]: element-wise sums and
//! differences, transpose, products, and the three elimination-based
//! routines (determinant, linear solve, inverse) built on a shared forward
//! elimination with partial pivoting.
//!
//! # Quick Start
//!
//! ```
//! use matrixcalc::prelude::*;
//!
//! let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
//!
//! let det = a.determinant().unwrap();
//! assert!((det + 2.0).abs() < 1e-12);
//!
//! let inv = a.inverse().unwrap();
//! let eye = a.matmul(&inv).unwrap();
//! assert!(eye.approx_eq(&Matrix::identity(2).unwrap(), 1e-12));
//! ```
//!
//! # Modules
//!
//! - [`matrix`]: The `Matrix` type and its lifecycle
//! - [`ops`]: Add, subtract, transpose, multiply and their n-ary chains
//! - [`elimination`]: Forward elimination with partial pivoting
//! - [`solve`]: Determinant, linear solve and inverse
//! - [`tolerance`]: Singularity threshold
//! - [`error`]: Error type and outcome classification

pub mod elimination;
pub mod error;
pub mod matrix;
pub mod ops;
pub mod prelude;
pub mod solve;
pub mod tolerance;

pub use error::{LinalgError, Result, Status};
pub use matrix::Matrix;
pub use ops::{add, difference, multiply, product, sub, sum, transpose};
pub use solve::{determinant, inverse, solve, GaussSolver};
pub use tolerance::Tolerance;
