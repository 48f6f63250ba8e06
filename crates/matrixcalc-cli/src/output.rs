//! Output formatting utilities

use colored::Colorize;
use matrixcalc::{Matrix, Status};
use serde::Serialize;
use std::io::{self, Write};

/// How results are rendered on stdout.
#[derive(Debug, Clone, Copy)]
pub struct Format {
    /// Decimal places for matrix elements and scalars.
    pub precision: usize,
    /// Emit one JSON document instead of text.
    pub json: bool,
    /// Suppress section headers.
    pub quiet: bool,
}

impl Default for Format {
    fn default() -> Self {
        Self {
            precision: 2,
            json: false,
            quiet: false,
        }
    }
}

#[derive(Serialize)]
struct Report<'a, T: Serialize> {
    status: &'a str,
    result: T,
}

/// Print a section header
pub(crate) fn section(out: &mut impl Write, title: &str) -> io::Result<()> {
    writeln!(out, "\n{}", format!("=== {title} ===").cyan().bold())
}

/// Print a key-value pair
pub(crate) fn kv(out: &mut impl Write, key: &str, value: impl std::fmt::Display) -> io::Result<()> {
    writeln!(out, "  {}: {}", key.white().bold(), value)
}

/// Print a matrix under a title.
pub(crate) fn matrix(
    out: &mut impl Write,
    title: &str,
    m: &Matrix,
    format: &Format,
) -> io::Result<()> {
    if !format.quiet {
        section(out, title)?;
    }
    write!(out, "{m:.precision$}", precision = format.precision)
}

/// Determinant line; a singular matrix reports zero.
pub(crate) fn determinant_line(det: Option<f64>, precision: usize) -> String {
    match det {
        Some(det) => format!("det = {det:.precision$}"),
        None => "det = 0 (singular)".to_string(),
    }
}

/// Write `{"status": ..., "result": ...}`.
pub(crate) fn json_report(
    out: &mut impl Write,
    status: Status,
    result: impl Serialize,
) -> io::Result<()> {
    let report = Report {
        status: status.name(),
        result,
    };
    let text = serde_json::to_string_pretty(&report).map_err(io::Error::other)?;
    writeln!(out, "{text}")
}

/// Print a failure message
pub(crate) fn fail(out: &mut impl Write, msg: impl std::fmt::Display) -> io::Result<()> {
    writeln!(out, "{} {}", "[FAIL]".red().bold(), msg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinant_line() {
        assert_eq!(determinant_line(Some(-2.0), 2), "det = -2.00");
        assert_eq!(determinant_line(Some(1.0 / 3.0), 4), "det = 0.3333");
        assert_eq!(determinant_line(None, 2), "det = 0 (singular)");
    }

    #[test]
    fn test_json_report() {
        let mut buf = Vec::new();
        json_report(&mut buf, Status::SingularMatrix, 0.0).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["status"], "singular_matrix");
        assert_eq!(value["result"], 0.0);
    }

    #[test]
    fn test_matrix_quiet_has_no_header() {
        colored::control::set_override(false);
        let m = Matrix::identity(2).unwrap();
        let format = Format {
            quiet: true,
            ..Format::default()
        };
        let mut buf = Vec::new();
        matrix(&mut buf, "Result", &m, &format).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "    1.00     0.00 \n    0.00     1.00 \n");
    }
}
