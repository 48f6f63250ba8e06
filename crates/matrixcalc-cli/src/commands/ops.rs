//! Add, subtract, multiply and transpose commands.
//!
//! # Usage
//!
//! ```bash
//! mcalc add a.json b.json c.json   # a + b + c
//! mcalc sub a.json b.json          # a - b
//! mcalc mul a.json b.json          # a * b
//! mcalc transpose a.json
//! ```

use matrixcalc::{Matrix, Status};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::Result;
use crate::input;
use crate::output::{self, Format};

/// N-ary operation applied to operands in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Chain {
    Sum,
    Difference,
    Product,
}

impl Chain {
    pub(crate) fn apply(self, operands: &[Matrix]) -> matrixcalc::Result<Matrix> {
        match self {
            Self::Sum => matrixcalc::sum(operands),
            Self::Difference => matrixcalc::difference(operands),
            Self::Product => matrixcalc::product(operands),
        }
    }

    pub(crate) fn title(self) -> &'static str {
        match self {
            Self::Sum => "Sum",
            Self::Difference => "Difference",
            Self::Product => "Product",
        }
    }
}

/// Writes a matrix result as text or as a JSON report.
pub(crate) fn emit_matrix(
    out: &mut impl Write,
    title: &str,
    m: &Matrix,
    format: &Format,
) -> Result<()> {
    if format.json {
        output::json_report(out, Status::Ok, m)?;
    } else {
        output::matrix(out, title, m, format)?;
    }
    Ok(())
}

pub(crate) fn chain(
    out: &mut impl Write,
    op: Chain,
    files: &[PathBuf],
    format: &Format,
) -> Result<()> {
    let operands = input::load_matrices(files)?;
    info!(op = op.title(), operands = operands.len(), "applying chain");
    let result = op.apply(&operands)?;
    emit_matrix(out, op.title(), &result, format)
}

pub(crate) fn transpose(out: &mut impl Write, file: &Path, format: &Format) -> Result<()> {
    let a = input::load_matrix(file)?;
    let t = a.transpose()?;
    emit_matrix(out, "Transpose", &t, format)
}
