//! Menu-driven calculator.
//!
//! Each menu action prompts for its operands, runs one kernel call and
//! prints the result. A cancelled prompt, a kernel error or a bad menu choice
//! returns to the menu; end of input at the menu ends the session.

use matrixcalc::{GaussSolver, Matrix};
use std::io::{BufRead, Write};
use tracing::{debug, warn};

use super::linalg::determinant_value;
use super::ops::Chain;
use crate::error::{CliError, Result};
use crate::output::{self, Format};
use crate::prompt::{PromptError, Prompter};

const MAX_OPERANDS: i64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Chain(Chain),
    Transpose,
    Determinant,
    Solve,
    Inverse,
    Exit,
}

impl Action {
    fn from_choice(choice: i64) -> Option<Self> {
        match choice {
            1 => Some(Self::Chain(Chain::Sum)),
            2 => Some(Self::Chain(Chain::Difference)),
            3 => Some(Self::Chain(Chain::Product)),
            4 => Some(Self::Transpose),
            5 => Some(Self::Determinant),
            6 => Some(Self::Solve),
            7 => Some(Self::Inverse),
            0 => Some(Self::Exit),
            _ => None,
        }
    }
}

struct Session<'a, R, W> {
    prompter: &'a mut Prompter<R, W>,
    max_dim: i64,
    solver: &'a GaussSolver,
    format: Format,
}

fn print_menu(out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "\n===== Matrix Calculator =====")?;
    writeln!(out, "1. Add n matrices")?;
    writeln!(out, "2. Subtract n matrices")?;
    writeln!(out, "3. Multiply n matrices")?;
    writeln!(out, "4. Transpose a matrix")?;
    writeln!(out, "5. Determinant of a matrix")?;
    writeln!(out, "6. Solve Ax = b")?;
    writeln!(out, "7. Inverse of a matrix")?;
    writeln!(out, "0. Exit")?;
    writeln!(out, "=============================")
}

/// Runs the menu loop until `0` or end of input.
///
/// # Errors
///
/// Only I/O failures on the prompt streams end the session with an error.
pub(crate) fn run<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    max_dim: usize,
    solver: &GaussSolver,
    format: &Format,
) -> Result<()> {
    let mut session = Session {
        prompter,
        max_dim: i64::try_from(max_dim).unwrap_or(i64::MAX),
        solver,
        // JSON makes no sense between prompts
        format: Format {
            json: false,
            ..*format
        },
    };
    session.run()
}

impl<R: BufRead, W: Write> Session<'_, R, W> {
    fn run(&mut self) -> Result<()> {
        loop {
            print_menu(self.prompter.out())?;
            let choice = match self.prompter.read_int("Enter an option: ") {
                Ok(choice) => choice,
                Err(PromptError::Cancelled) => {
                    writeln!(self.prompter.out())?;
                    return Ok(());
                }
                Err(PromptError::Io(e)) => return Err(e.into()),
            };

            let Some(action) = Action::from_choice(choice) else {
                writeln!(self.prompter.out(), "Unknown option.")?;
                continue;
            };
            if action == Action::Exit {
                writeln!(self.prompter.out(), "Goodbye.")?;
                return Ok(());
            }

            debug!(?action, "menu selection");
            match self.perform(action) {
                Ok(()) => {}
                Err(CliError::Cancelled) => {
                    writeln!(self.prompter.out(), "\nOperation cancelled. Returning to main menu.")?;
                }
                Err(CliError::Io(e)) => return Err(CliError::Io(e)),
                Err(e) => {
                    warn!(error = %e, "operation failed");
                    output::fail(self.prompter.out(), &e)?;
                }
            }
        }
    }

    fn perform(&mut self, action: Action) -> Result<()> {
        match action {
            Action::Chain(op) => {
                let count = self.prompter.read_int_in_range(
                    &format!("How many matrices? (2-{MAX_OPERANDS}): "),
                    2,
                    MAX_OPERANDS,
                )?;
                let mut operands = Vec::new();
                for k in 1..=count {
                    operands.push(self.read_matrix(&format!("Matrix {k}"))?);
                }
                let result = op.apply(&operands)?;
                self.show(op.title(), &result)
            }
            Action::Transpose => {
                let a = self.read_matrix("Transpose a matrix")?;
                let t = a.transpose()?;
                self.show("A", &a)?;
                self.show("A^T", &t)
            }
            Action::Determinant => {
                let a = self.read_square_matrix("Determinant of a matrix")?;
                let det = determinant_value(self.solver, &a)?;
                let line = output::determinant_line(det, self.format.precision);
                writeln!(self.prompter.out(), "\n{line}")?;
                Ok(())
            }
            Action::Solve => {
                let a = self.read_square_matrix("Coefficient matrix A")?;
                let b = self.read_column(a.rows())?;
                let x = self.solver.solve(&a, &b)?;
                self.show("Solution x", &x)
            }
            Action::Inverse => {
                let a = self.read_square_matrix("Inverse of a matrix")?;
                let inv = self.solver.inverse(&a)?;
                self.show("A^-1", &inv)
            }
            Action::Exit => Ok(()),
        }
    }

    fn show(&mut self, title: &str, m: &Matrix) -> Result<()> {
        output::matrix(self.prompter.out(), title, m, &self.format)?;
        Ok(())
    }

    fn read_dim(&mut self, label: &str) -> Result<usize> {
        let prompt = format!("{label} (1-{}): ", self.max_dim);
        let value = self.prompter.read_int_in_range(&prompt, 1, self.max_dim)?;
        // in 1..=max_dim, which came from a usize
        Ok(value as usize)
    }

    fn read_elements(&mut self, m: &mut Matrix) -> Result<()> {
        let (rows, cols) = m.shape();
        for i in 0..rows {
            writeln!(self.prompter.out(), "Row {i} ({cols} values):")?;
            for j in 0..cols {
                let value = self.prompter.read_value(&format!("  a[{i}][{j}] = "))?;
                m.set(i, j, value);
            }
        }
        Ok(())
    }

    fn read_matrix(&mut self, title: &str) -> Result<Matrix> {
        writeln!(self.prompter.out(), "\n{title}")?;
        let rows = self.read_dim("Rows")?;
        let cols = self.read_dim("Cols")?;
        let mut m = Matrix::new(rows, cols)?;
        self.read_elements(&mut m)?;
        Ok(m)
    }

    fn read_square_matrix(&mut self, title: &str) -> Result<Matrix> {
        writeln!(self.prompter.out(), "\n{title}")?;
        let n = self.read_dim("Size")?;
        let mut m = Matrix::new(n, n)?;
        self.read_elements(&mut m)?;
        Ok(m)
    }

    fn read_column(&mut self, n: usize) -> Result<Matrix> {
        writeln!(self.prompter.out(), "\nRight-hand side b ({n} values):")?;
        let mut b = Matrix::new(n, 1)?;
        for i in 0..n {
            let value = self.prompter.read_value(&format!("  b[{i}] = "))?;
            b.set(i, 0, value);
        }
        Ok(b)
    }
}

#[cfg(test)]
#[path = "interactive_tests.rs"]
mod tests;
