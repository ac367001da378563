use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts to distinguish between an inconsistent
/// query result, bad arguments and everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - query completed (an empty result is still a success)
    Success = 0,
    /// A missing package was reported as having dependents
    InconsistentResult = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (registry not found, parse error, config error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InconsistentResult => write!(f, "Inconsistent Result (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for dependent lookups.
///
/// Uses thiserror to derive Display and Error traits automatically.
#[derive(Debug, Error)]
pub enum UsesError {
    #[error("Package index not found: {path}\n\n💡 Hint: {suggestion}")]
    RegistryNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse package index: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the package index is valid TOML or JSON")]
    RegistryParseError { path: PathBuf, details: String },

    #[error("Missing packages should not have dependents!\nUnresolved: {}\n\n💡 Hint: A package declares a dependency on a name that no longer resolves. Check for renamed or removed packages.", .targets.join(", "))]
    InconsistentResult { targets: Vec<String> },

    /// Validation error for builder patterns
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}

impl UsesError {
    /// Maps an error to the exit code the CLI should terminate with
    pub fn exit_code(&self) -> ExitCode {
        match self {
            UsesError::InconsistentResult { .. } => ExitCode::InconsistentResult,
            _ => ExitCode::ApplicationError,
        }
    }
}
