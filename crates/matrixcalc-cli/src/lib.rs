//! mcalc library
//!
//! This library is the foundation for the mcalc binary.
//! Exports CLI structures for testing and reuse.

use clap::{ArgAction, Parser, Subcommand};
use matrixcalc::{GaussSolver, Tolerance};
use std::io;
use std::path::PathBuf;

mod commands;
pub mod error;
pub mod input;
mod output;
pub mod prompt;

pub use error::CliError;
pub use output::Format;

use commands::{bench, interactive, linalg, ops};

/// mcalc - Matrix Calculator
///
/// Add, subtract, multiply and transpose matrices; compute determinants,
/// solve linear systems and invert matrices by Gaussian elimination.
#[derive(Parser, Debug)]
#[command(name = "mcalc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Singularity threshold for pivots and back-substitution
    #[arg(long, global = true, default_value = "1e-12", value_parser = parse_tolerance)]
    pub tolerance: Tolerance,

    /// Decimal places when printing results
    #[arg(long, global = true, default_value = "2")]
    pub precision: usize,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose logging (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add two or more matrices
    Add {
        /// Matrix files (JSON)
        #[arg(value_name = "FILE", num_args = 2.., required = true)]
        files: Vec<PathBuf>,
    },

    /// Subtract every following matrix from the first
    Sub {
        /// Matrix files (JSON)
        #[arg(value_name = "FILE", num_args = 2.., required = true)]
        files: Vec<PathBuf>,
    },

    /// Multiply two or more matrices left to right
    Mul {
        /// Matrix files (JSON)
        #[arg(value_name = "FILE", num_args = 2.., required = true)]
        files: Vec<PathBuf>,
    },

    /// Transpose a matrix
    Transpose {
        /// Matrix file (JSON)
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Determinant of a square matrix
    Det {
        /// Matrix file (JSON)
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Solve A x = b
    Solve {
        /// Coefficient matrix A (n x n)
        #[arg(value_name = "A_FILE")]
        a: PathBuf,

        /// Right-hand side b (n x 1)
        #[arg(value_name = "B_FILE")]
        b: PathBuf,
    },

    /// Inverse of a square matrix
    Inverse {
        /// Matrix file (JSON)
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Menu-driven calculator reading from stdin
    Interactive {
        /// Largest row or column count accepted at the prompts
        #[arg(long, default_value = "10", value_parser = clap::value_parser!(u16).range(1..))]
        max_dim: u16,
    },

    /// Time one solve of a diagonally dominant n x n system
    Bench {
        /// System size n
        #[arg(long, default_value = "1000", value_parser = clap::value_parser!(u32).range(1..))]
        size: u32,
    },
}

fn parse_tolerance(s: &str) -> Result<Tolerance, String> {
    let eps: f64 = s.parse().map_err(|e| format!("{e}"))?;
    Tolerance::try_from(eps)
}

impl Cli {
    /// Solver configured from the global flags.
    pub fn solver(&self) -> GaussSolver {
        GaussSolver::new().with_tolerance(self.tolerance)
    }

    /// Output format from the global flags.
    pub fn format(&self) -> Format {
        Format {
            precision: self.precision,
            json: self.json,
            quiet: self.quiet,
        }
    }
}

/// Execute the CLI command and return the result.
///
/// # Errors
///
/// Returns the first load, validation or kernel error of the command.
pub fn execute_command(cli: &Cli) -> Result<(), CliError> {
    let solver = cli.solver();
    let format = cli.format();
    let mut stdout = io::stdout().lock();

    match &cli.command {
        Commands::Add { files } => ops::chain(&mut stdout, ops::Chain::Sum, files, &format),
        Commands::Sub { files } => ops::chain(&mut stdout, ops::Chain::Difference, files, &format),
        Commands::Mul { files } => ops::chain(&mut stdout, ops::Chain::Product, files, &format),
        Commands::Transpose { file } => ops::transpose(&mut stdout, file, &format),
        Commands::Det { file } => linalg::determinant(&mut stdout, file, &solver, &format),
        Commands::Solve { a, b } => linalg::solve(&mut stdout, a, b, &solver, &format),
        Commands::Inverse { file } => linalg::inverse(&mut stdout, file, &solver, &format),
        Commands::Interactive { max_dim } => {
            let stdin = io::stdin().lock();
            let mut prompter = prompt::Prompter::new(stdin, stdout);
            interactive::run(&mut prompter, usize::from(*max_dim), &solver, &format)
        }
        Commands::Bench { size } => bench::run(&mut stdout, *size as usize, &solver, &format),
    }
}
