//! Error types for diffparse.
//!
//! Uses thiserror for derive macros. Only the two malformed-input variants
//! can come out of [`crate::parse`]; the rest belong to the CLI.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for diffparse operations.
///
/// Each variant maps to a process exit code via [`DiffError::exit_code`].
#[derive(Error, Debug)]
pub enum DiffError {
    /// A file-section boundary was found but no header dialect could
    /// extract paths from it.
    #[error("malformed file header at line {line}: {text:?}")]
    MalformedHeader { line: usize, text: String },

    /// A line starting with `@@` does not follow the hunk header grammar.
    #[error("malformed hunk header at line {line}: {text:?}")]
    MalformedHunkHeader { line: usize, text: String },

    /// Reading the diff or the config file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The config file could not be deserialized.
    #[error("Invalid config: {0}")]
    Config(String),

    /// Writing the JSON output failed.
    #[error("Failed to serialize output: {0}")]
    Output(#[from] serde_json::Error),
}

impl DiffError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            DiffError::MalformedHeader { .. } => exit_codes::PARSE_FAILURE,
            DiffError::MalformedHunkHeader { .. } => exit_codes::PARSE_FAILURE,
            DiffError::Io(_) => exit_codes::USER_ERROR,
            DiffError::Config(_) => exit_codes::USER_ERROR,
            DiffError::Output(_) => exit_codes::USER_ERROR,
        }
    }

    /// 1-based input line the parse failed on, if this is a parse error.
    pub fn line(&self) -> Option<usize> {
        match self {
            DiffError::MalformedHeader { line, .. }
            | DiffError::MalformedHunkHeader { line, .. } => Some(*line),
            _ => None,
        }
    }
}

/// Result type alias for diffparse operations.
pub type Result<T> = std::result::Result<T, DiffError>;
