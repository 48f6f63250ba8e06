//! Determinant, solve and inverse commands.
//!
//! # Usage
//!
//! ```bash
//! mcalc det a.json
//! mcalc solve a.json b.json             # A x = b, b is n x 1
//! mcalc inverse a.json --tolerance 1e-9
//! ```
//!
//! A singular matrix is a normal outcome for `det` (printed as zero). For
//! `solve` and `inverse` it is an error with its own exit code.

use matrixcalc::{GaussSolver, LinalgError, Status};
use std::io::Write;
use std::path::Path;

use super::ops::emit_matrix;
use crate::error::Result;
use crate::input;
use crate::output::{self, Format};

/// Determinant, with a singular matrix mapped to `None`.
pub(crate) fn determinant_value(
    solver: &GaussSolver,
    a: &matrixcalc::Matrix,
) -> matrixcalc::Result<Option<f64>> {
    match solver.determinant(a) {
        Ok(det) => Ok(Some(det)),
        Err(LinalgError::SingularMatrix { .. }) => Ok(None),
        Err(e) => Err(e),
    }
}

pub(crate) fn determinant(
    out: &mut impl Write,
    file: &Path,
    solver: &GaussSolver,
    format: &Format,
) -> Result<()> {
    let a = input::load_matrix(file)?;
    let det = determinant_value(solver, &a)?;

    if format.json {
        let status = if det.is_some() {
            Status::Ok
        } else {
            Status::SingularMatrix
        };
        output::json_report(out, status, det.unwrap_or(0.0))?;
    } else {
        writeln!(out, "{}", output::determinant_line(det, format.precision))?;
    }
    Ok(())
}

pub(crate) fn solve(
    out: &mut impl Write,
    a: &Path,
    b: &Path,
    solver: &GaussSolver,
    format: &Format,
) -> Result<()> {
    let a = input::load_matrix(a)?;
    let b = input::load_matrix(b)?;
    let x = solver.solve(&a, &b)?;
    emit_matrix(out, "Solution x", &x, format)
}

pub(crate) fn inverse(
    out: &mut impl Write,
    file: &Path,
    solver: &GaussSolver,
    format: &Format,
) -> Result<()> {
    let a = input::load_matrix(file)?;
    let inv = solver.inverse(&a)?;
    emit_matrix(out, "Inverse", &inv, format)
}
