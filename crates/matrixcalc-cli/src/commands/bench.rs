//! Solve benchmark.
//!
//! # Usage
//!
//! ```bash
//! mcalc bench --size 1000
//! ```
//!
//! The system has `n` on the diagonal and `1` everywhere else, with `b = 1`.
//! It is strictly diagonally dominant, so elimination never meets a small
//! pivot, and its exact solution is `x_i = 1 / (2n - 1)`.

use matrixcalc::{GaussSolver, Matrix, Status};
use serde::Serialize;
use std::io::Write;
use std::time::Instant;
use tracing::info;

use crate::error::Result;
use crate::output::{self, Format};

#[derive(Debug, Serialize)]
struct BenchResult {
    size: usize,
    seconds: f64,
    max_residual: f64,
}

pub(crate) fn generate_system(n: usize) -> matrixcalc::Result<(Matrix, Matrix)> {
    let mut a = Matrix::new(n, n)?;
    a.fill(1.0);
    for i in 0..n {
        a.set(i, i, n as f64);
    }
    let mut b = Matrix::new(n, 1)?;
    b.fill(1.0);
    Ok((a, b))
}

fn max_residual(a: &Matrix, x: &Matrix, b: &Matrix) -> matrixcalc::Result<f64> {
    let ax = a.matmul(x)?;
    let r = ax.sub(b)?;
    Ok(r.as_slice().iter().fold(0.0f64, |acc, v| acc.max(v.abs())))
}

pub(crate) fn run(
    out: &mut impl Write,
    size: usize,
    solver: &GaussSolver,
    format: &Format,
) -> Result<()> {
    let (a, b) = generate_system(size)?;

    let start = Instant::now();
    let x = solver.solve(&a, &b)?;
    let seconds = start.elapsed().as_secs_f64();
    info!(size, seconds, "solve finished");

    let result = BenchResult {
        size,
        seconds,
        max_residual: max_residual(&a, &x, &b)?,
    };

    if format.json {
        output::json_report(out, Status::Ok, &result)?;
    } else {
        writeln!(out, "Solved {size}x{size} system in {seconds:.3} seconds")?;
        if !format.quiet {
            output::kv(out, "max |Ax - b|", format!("{:e}", result.max_residual))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_system_solution() {
        let (a, b) = generate_system(5).unwrap();
        let x = GaussSolver::new().solve(&a, &b).unwrap();
        for &xi in x.as_slice() {
            assert!((xi - 1.0 / 9.0).abs() < 1e-12);
        }
        assert!(max_residual(&a, &x, &b).unwrap() < 1e-12);
    }

    #[test]
    fn test_run_json() {
        let format = Format {
            json: true,
            ..Format::default()
        };
        let mut buf = Vec::new();
        run(&mut buf, 8, &GaussSolver::new(), &format).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["status"], "ok");
        assert_eq!(value["result"]["size"], 8);
    }
}
