use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::{CommandOutput, CommandRunner};

/// One invocation seen by [`FakeCommandRunner`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub argv: Vec<String>,
    pub cwd: PathBuf,
}

enum Response {
    Output(CommandOutput),
    Unavailable,
}

/// Records every call and answers from canned responses.
///
/// A response is keyed by a token; the first rule whose token equals any
/// argument of the call wins. Unmatched calls succeed with empty output.
#[derive(Default)]
pub struct FakeCommandRunner {
    calls: Mutex<Vec<RecordedCall>>,
    rules: Vec<(String, Response)>,
}

impl FakeCommandRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_output(mut self, token: &str, combined: &str) -> Self {
        self.rules.push((token.to_string(), Response::Output(CommandOutput::succeeded(combined))));
        self
    }

    pub fn fail_on(mut self, token: &str, code: i32, combined: &str) -> Self {
        let output = CommandOutput::failed(combined, code);
        self.rules.push((token.to_string(), Response::Output(output)));
        self
    }

    /// Calls matching `token` fail to start.
    pub fn unavailable(mut self, token: &str) -> Self {
        self.rules.push((token.to_string(), Response::Unavailable));
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl CommandRunner for FakeCommandRunner {
    fn run(&self, argv: &[&str], cwd: &Path) -> Result<CommandOutput, AppError> {
        self.calls.lock().unwrap().push(RecordedCall {
            argv: argv.iter().map(|arg| arg.to_string()).collect(),
            cwd: cwd.to_path_buf(),
        });

        let rule = self.rules.iter().find(|(token, _)| argv.contains(&token.as_str()));
        match rule {
            Some((_, Response::Output(output))) => Ok(output.clone()),
            Some((token, Response::Unavailable)) => Err(AppError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{}: not found", token),
            ))),
            None => Ok(CommandOutput::succeeded("")),
        }
    }
}
