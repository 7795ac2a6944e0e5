use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A subprocess that ran (or failed to start) without reporting success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandFailure {
    /// The command line as logged.
    pub command: String,
    /// Printable exit status, or the spawn error.
    pub status: String,
    /// Combined stdout and stderr. Left out of `Display`; the runner has
    /// already echoed it.
    pub output: String,
}

impl fmt::Display for CommandFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' {}", self.command, self.status)
    }
}

/// Library-wide error type for gitcmd operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration file issue.
    #[error("{0}")]
    Configuration(String),

    /// No recognized input supplied the named variable.
    #[error("environment variable {name} is required")]
    MissingRequiredInput { name: String },

    /// The clone URL does not yield a usable project directory name.
    #[error("cannot derive a project name from clone URL '{url}'")]
    InvalidCloneUrl { url: String },

    /// The work root is missing or not a directory.
    #[error("workdir ({}) unavailable: {source}", .path.display())]
    WorkDirUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Clone project failed: {0}")]
    CloneFailed(CommandFailure),

    #[error("Switch to commit failed: {0}")]
    CheckoutFailed(CommandFailure),

    #[error("exec CMD failed: {0}")]
    CommandFailed(CommandFailure),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// True for failures raised before any filesystem or process work.
    pub fn is_resolution_error(&self) -> bool {
        matches!(
            self,
            AppError::Configuration(_)
                | AppError::MissingRequiredInput { .. }
                | AppError::InvalidCloneUrl { .. }
        )
    }

    /// The failing subprocess, for step errors.
    pub fn command_failure(&self) -> Option<&CommandFailure> {
        match self {
            AppError::CloneFailed(failure)
            | AppError::CheckoutFailed(failure)
            | AppError::CommandFailed(failure) => Some(failure),
            _ => None,
        }
    }
}
