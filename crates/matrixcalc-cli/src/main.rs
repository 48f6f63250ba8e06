//! mcalc - Matrix Calculator CLI
//!
//! Usage:
//!   mcalc add a.json b.json          # Element-wise sum of two or more matrices
//!   mcalc mul a.json b.json c.json   # Left-to-right product
//!   mcalc det a.json                 # Determinant
//!   mcalc solve a.json b.json        # Solve A x = b
//!   mcalc inverse a.json --json      # Inverse as JSON
//!   mcalc interactive                # Menu-driven calculator
//!   mcalc bench --size 1000          # Time one large solve

use clap::Parser;
use matrixcalc_cli::{execute_command, Cli};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: u8, quiet: bool) {
    let default = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, _) => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match execute_command(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.json {
                println!(
                    "{}",
                    serde_json::json!({ "status": e.status_name(), "error": e.to_string() })
                );
            }
            eprintln!("error: {e}");
            e.exit_code()
        }
    }
}
