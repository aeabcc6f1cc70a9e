use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// Scripts can tell a usage mistake apart from a failed comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// The comparison completed and the report was printed
    Success = 0,
    /// Git, I/O or lockfile parse failure
    ApplicationError = 1,
    /// Invalid command-line arguments (clap errors, too many revisions)
    InvalidArguments = 2,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Picks the exit code for an error that aborted the run.
    pub fn for_error(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<DiffError>() {
            Some(DiffError::TooManyRevisions { .. }) | Some(DiffError::Validation { .. }) => {
                ExitCode::InvalidArguments
            }
            _ => ExitCode::ApplicationError,
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ApplicationError => write!(f, "Application Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Application-specific errors for lockfile comparison.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// keeping the user-facing hint next to each failure.
#[derive(Debug, Error)]
pub enum DiffError {
    #[error("Too many revisions: expected at most 2, got {count}\n\n💡 Hint: Usage is `lockfile-diff [FROM [TO]]`")]
    TooManyRevisions { count: usize },

    #[error("Cannot read {path} at revision '{revision}'\nDetails: {details}\n\n💡 Hint: Check that the revision exists and that the lockfile was committed at that point")]
    SnapshotUnavailable {
        revision: String,
        path: PathBuf,
        details: String,
    },

    #[error("Lockfile not found: {path}\n\n💡 Hint: {suggestion}")]
    LockfileNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse {source_label}\nDetails: {details}\n\n💡 Hint: Please verify that the lockfile is in the correct format")]
    LockfileParseError {
        source_label: String,
        details: String,
    },

    #[error("Cannot determine whether {path} has local modifications\nDetails: {details}\n\n💡 Hint: Run inside a git working tree, or pass explicit revisions")]
    RepositoryStateError { path: PathBuf, details: String },

    #[error("Invalid project path: {path}\nReason: {reason}\n\n💡 Hint: Please specify a valid project directory")]
    InvalidProjectPath { path: PathBuf, reason: String },

    #[error("No supported lockfile found in {path}\n\n💡 Hint: Expected glide.lock or Gopkg.lock, or pass --format explicitly")]
    FormatNotDetected { path: PathBuf },

    /// Validation error for command-line configuration
    #[error("Validation error: {message}")]
    Validation { message: String },
}
