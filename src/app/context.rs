use crate::ports::CommandRunner;

/// Application context holding dependencies for command execution.
pub struct AppContext<R: CommandRunner> {
    runner: R,
}

impl<R: CommandRunner> AppContext<R> {
    /// Create a new application context.
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    /// Get a reference to the subprocess runner.
    pub fn runner(&self) -> &R {
        &self.runner
    }
}
