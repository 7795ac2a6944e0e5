use std::path::Path;

use crate::domain::AppError;

/// Result of a subprocess that ran to completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Interleaved stdout and stderr.
    pub combined: String,
    pub success: bool,
    /// Printable exit status, e.g. `exit status: 1`.
    pub status: String,
}

impl CommandOutput {
    pub fn succeeded(combined: impl Into<String>) -> Self {
        Self { combined: combined.into(), success: true, status: "exit status: 0".to_string() }
    }

    pub fn failed(combined: impl Into<String>, code: i32) -> Self {
        Self { combined: combined.into(), success: false, status: format!("exit status: {}", code) }
    }
}

/// Runs external programs with an explicit working directory.
pub trait CommandRunner {
    /// Run `argv[0]` with the remaining arguments inside `cwd`.
    ///
    /// A non-zero exit is reported through `CommandOutput::success`, not as an
    /// error. `Err` means the program could not be started or waited on.
    fn run(&self, argv: &[&str], cwd: &Path) -> Result<CommandOutput, AppError>;
}

impl<T: CommandRunner + ?Sized> CommandRunner for &T {
    fn run(&self, argv: &[&str], cwd: &Path) -> Result<CommandOutput, AppError> {
        (**self).run(argv, cwd)
    }
}
