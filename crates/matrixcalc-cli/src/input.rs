//! Matrix files and value validation.
//!
//! A matrix file is JSON in one of two layouts:
//!
//! ```text
//! [[1, 2], [3, 4]]
//! {"rows": 2, "cols": 2, "data": [1, 2, 3, 4]}
//! ```
//!
//! Elements must be finite and within [`MAX_ABS_VALUE`] of zero. The kernel
//! itself accepts any `f64`; the range is a policy of this front-end.

use matrixcalc::Matrix;
use serde::Deserialize;
use std::path::Path;
use tracing::info;

use crate::error::{CliError, Result};

/// Largest accepted element magnitude.
pub const MAX_ABS_VALUE: f64 = 1e12;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum MatrixFile {
    Rows(Vec<Vec<f64>>),
    Flat {
        rows: usize,
        cols: usize,
        data: Vec<f64>,
    },
}

/// Checks one element against the accepted range.
pub fn check_value(value: f64) -> std::result::Result<f64, String> {
    if !value.is_finite() {
        return Err("Value must be finite".to_string());
    }
    if value.abs() > MAX_ABS_VALUE {
        return Err(format!(
            "Value must be between {:e} and {:e}",
            -MAX_ABS_VALUE, MAX_ABS_VALUE
        ));
    }
    Ok(value)
}

fn check_data(data: &[f64], cols: usize) -> Result<()> {
    for (k, &value) in data.iter().enumerate() {
        check_value(value).map_err(|reason| {
            CliError::Validation(format!("element ({}, {}): {reason}", k / cols, k % cols))
        })?;
    }
    Ok(())
}

fn into_matrix(file: MatrixFile) -> Result<Matrix> {
    let (rows, cols, data) = match file {
        MatrixFile::Rows(rows) => {
            let cols = rows.first().map_or(0, Vec::len);
            if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != cols) {
                return Err(CliError::Validation(format!(
                    "row {i} has {} values, expected {cols}",
                    row.len()
                )));
            }
            (rows.len(), cols, rows.concat())
        }
        MatrixFile::Flat { rows, cols, data } => {
            if rows.checked_mul(cols) != Some(data.len()) {
                return Err(CliError::Validation(format!(
                    "{rows}x{cols} matrix needs {} values, found {}",
                    rows.saturating_mul(cols),
                    data.len()
                )));
            }
            (rows, cols, data)
        }
    };

    if rows == 0 || cols == 0 {
        return Err(CliError::Validation(format!(
            "matrix must have at least one row and one column, got {rows}x{cols}"
        )));
    }
    check_data(&data, cols)?;
    Ok(Matrix::from_vec(rows, cols, data)?)
}

/// Parses matrix JSON. `source` only labels parse errors.
pub fn parse_matrix(text: &str, source: &Path) -> Result<Matrix> {
    let file: MatrixFile = serde_json::from_str(text).map_err(|e| CliError::Parse {
        path: source.to_path_buf(),
        source: e,
    })?;
    into_matrix(file)
}

/// Loads and validates a matrix file.
pub fn load_matrix(path: &Path) -> Result<Matrix> {
    if !path.exists() {
        return Err(CliError::FileNotFound(path.to_path_buf()));
    }
    if !path.is_file() {
        return Err(CliError::NotAFile(path.to_path_buf()));
    }

    let text = std::fs::read_to_string(path)?;
    let matrix = parse_matrix(&text, path)?;
    info!(path = %path.display(), rows = matrix.rows(), cols = matrix.cols(), "loaded matrix");
    Ok(matrix)
}

/// Loads every path in order, stopping at the first failure.
pub fn load_matrices(paths: &[impl AsRef<Path>]) -> Result<Vec<Matrix>> {
    paths.iter().map(|p| load_matrix(p.as_ref())).collect()
}
