//! Error types for mcalc

use matrixcalc::{LinalgError, Status};
use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;

use crate::prompt::PromptError;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI error types
#[derive(Error, Debug)]
pub enum CliError {
    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Not a file (e.g., directory)
    #[error("Not a file: {0}")]
    NotAFile(PathBuf),

    /// Matrix file is not valid JSON or has the wrong layout
    #[error("Invalid matrix file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Matrix data rejected before reaching the kernel
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Prompt abandoned with `q` or end of input
    #[error("Operation cancelled")]
    Cancelled,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Kernel error
    #[error(transparent)]
    Linalg(#[from] LinalgError),
}

impl CliError {
    /// Get exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.code())
    }

    fn code(&self) -> u8 {
        match self {
            Self::Linalg(e) => match e.status() {
                Status::SingularMatrix => 2,
                Status::DimensionError => 3,
                Status::AllocationError => 4,
                Status::Ok => 1,
            },
            Self::FileNotFound(_) | Self::NotAFile(_) => 5,
            Self::Parse { .. } => 6,
            Self::Validation(_) => 7,
            Self::Io(_) => 8,
            Self::Cancelled => 1,
        }
    }

    /// Outcome name used in JSON output.
    pub fn status_name(&self) -> &'static str {
        match self {
            Self::Linalg(e) => e.status().name(),
            Self::FileNotFound(_) | Self::NotAFile(_) | Self::Io(_) => "io_error",
            Self::Parse { .. } => "parse_error",
            Self::Validation(_) => "validation_error",
            Self::Cancelled => "cancelled",
        }
    }
}

impl From<PromptError> for CliError {
    fn from(e: PromptError) -> Self {
        match e {
            PromptError::Cancelled => Self::Cancelled,
            PromptError::Io(e) => Self::Io(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct() {
        let parse_err = serde_json::from_str::<Vec<f64>>("nope").unwrap_err();
        let errors = [
            CliError::Linalg(LinalgError::singular(0, 0.0)),
            CliError::Linalg(LinalgError::Uninitialized { op: "add" }),
            CliError::Linalg(LinalgError::AllocationFailed { rows: 1, cols: 1 }),
            CliError::FileNotFound(PathBuf::from("a.json")),
            CliError::Parse {
                path: PathBuf::from("a.json"),
                source: parse_err,
            },
            CliError::Validation("bad".to_string()),
            CliError::Io(std::io::Error::other("disk")),
        ];
        let codes: Vec<u8> = errors.iter().map(CliError::code).collect();
        assert_eq!(codes, vec![2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_prompt_error_conversion() {
        assert!(matches!(CliError::from(PromptError::Cancelled), CliError::Cancelled));
        let io = PromptError::Io(std::io::Error::other("closed"));
        assert!(matches!(CliError::from(io), CliError::Io(_)));
    }

    #[test]
    fn test_linalg_message_is_transparent() {
        let err = CliError::from(LinalgError::Uninitialized { op: "transpose" });
        assert_eq!(err.to_string(), "Uninitialized matrix passed to transpose");
        assert_eq!(err.status_name(), "dimension_error");
    }
}
