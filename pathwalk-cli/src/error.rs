//! CLI-specific error types with exit codes.

use std::fmt;

use pathwalk::Error as LibError;

/// CLI-specific error type with exit code mapping.
#[derive(Debug)]
pub enum CliError {
    /// Library error (wrapped).
    Library(LibError),

    /// Invalid command-line arguments.
    InvalidArguments(String),

    /// The requested component does not exist for the given path
    /// (for example, the basename of a root-only path).
    NoResult,

    /// Failed to serialize output.
    Json(serde_json::Error),
}

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: No result for the given path
    /// - 4: Invalid arguments
    /// - 5: Output serialization failure
    /// - 6: Other library error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NoResult => 1,
            CliError::InvalidArguments(_) => 4,
            CliError::Json(_) => 5,
            CliError::Library(_) => 6,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Library(e) => write!(f, "{e}"),
            CliError::InvalidArguments(msg) => write!(f, "Invalid arguments: {msg}"),
            CliError::NoResult => write!(f, "no result for the given path"),
            CliError::Json(e) => write!(f, "Output serialization failed: {e}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Library(e) => Some(e),
            CliError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LibError> for CliError {
    fn from(e: LibError) -> Self {
        // Argument problems carry their own exit code.
        match e {
            LibError::Argument { message } => CliError::InvalidArguments(message),
            other => CliError::Library(other),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Json(e)
    }
}
