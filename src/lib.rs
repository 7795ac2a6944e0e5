//! gitcmd: clone a repository at a revision and run a shell command inside it.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

use std::path::PathBuf;

use adapters::ProcessCommandRunner;
use app::{
    AppContext,
    configuration::{load_spaces, read_env},
};

pub use app::commands::build::BuildOutcome;
pub use domain::{AppError, CommandFailure, SpaceRoots, WorkflowPlan};

/// Where the work roots come from, lowest to highest priority: built-in
/// defaults, the config file, explicit overrides.
#[derive(Debug, Clone, Default)]
pub struct SpaceOptions {
    pub config: Option<PathBuf>,
    pub ephemeral_root: Option<PathBuf>,
    pub cache_root: Option<PathBuf>,
}

impl SpaceOptions {
    pub fn roots(&self) -> Result<SpaceRoots, AppError> {
        let roots = load_spaces(self.config.as_deref())?;
        Ok(roots.with_overrides(self.ephemeral_root.clone(), self.cache_root.clone()))
    }
}

/// Resolve the workflow plan from the process environment.
pub fn resolve_plan(options: &SpaceOptions) -> Result<WorkflowPlan, AppError> {
    let roots = options.roots()?;
    WorkflowPlan::resolve(&read_env(), &roots)
}

/// Execute a resolved plan with real `git` and `/bin/sh` subprocesses.
pub fn build(plan: &WorkflowPlan) -> Result<BuildOutcome, AppError> {
    let ctx = AppContext::new(ProcessCommandRunner::new());
    app::commands::build::execute(&ctx, plan)
}
