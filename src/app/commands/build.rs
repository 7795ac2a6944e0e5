//! Build step execution.
//!
//! Ensures a working copy exists under the plan's work root, then runs the
//! user command inside it. Steps run strictly in order and the first failure
//! aborts the rest; nothing already written to disk is rolled back.

use std::fs;
use std::io;
use std::path::Path;

use crate::adapters::CacheLock;
use crate::app::AppContext;
use crate::domain::{AppError, CommandFailure, WorkflowPlan, display_command, redact_url};
use crate::ports::{CommandOutput, CommandRunner};

/// What a successful build step did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOutcome {
    /// The working copy already existed, so clone and checkout were skipped.
    pub cache_hit: bool,
    /// Combined output of the user command.
    pub output: String,
}

/// Run the plan: clone and checkout unless the project directory exists, then
/// run the command.
///
/// Subprocesses have no timeout. A hung clone or command blocks forever.
pub fn execute<R: CommandRunner>(
    ctx: &AppContext<R>,
    plan: &WorkflowPlan,
) -> Result<BuildOutcome, AppError> {
    ensure_work_dir(plan.work_dir())?;

    let _lock = if plan.cache_enabled() {
        Some(CacheLock::acquire(plan.work_dir(), plan.project_name())?)
    } else {
        None
    };

    let cache_hit = plan.project_dir().exists();
    if cache_hit {
        println!("Reuse existing working copy {}.", plan.project_dir().display());
    } else {
        clone(ctx.runner(), plan)?;
        checkout(ctx.runner(), plan)?;
    }

    let output = run_command(ctx.runner(), plan)?;
    Ok(BuildOutcome { cache_hit, output: output.combined })
}

fn ensure_work_dir(work_dir: &Path) -> Result<(), AppError> {
    let unavailable =
        |source: io::Error| AppError::WorkDirUnavailable { path: work_dir.to_path_buf(), source };

    // Only existence and type are checked. Search permission is left to the
    // subprocess spawn, which reports it against the failing step.
    let metadata = fs::metadata(work_dir).map_err(unavailable)?;
    if !metadata.is_dir() {
        return Err(unavailable(io::Error::new(io::ErrorKind::NotADirectory, "not a directory")));
    }
    Ok(())
}

fn clone<R: CommandRunner>(runner: &R, plan: &WorkflowPlan) -> Result<(), AppError> {
    let argv = ["git", "clone", "--recurse-submodules", plan.clone_url(), plan.project_name()];
    run_step(runner, &argv, plan.work_dir(), AppError::CloneFailed)?;
    println!("Clone project {} succeed.", redact_url(plan.clone_url()));
    Ok(())
}

fn checkout<R: CommandRunner>(runner: &R, plan: &WorkflowPlan) -> Result<(), AppError> {
    let argv = ["git", "checkout", plan.revision(), "--"];
    run_step(runner, &argv, plan.project_dir(), AppError::CheckoutFailed)?;
    println!("Switch to {} succeed.", plan.revision());
    Ok(())
}

fn run_command<R: CommandRunner>(
    runner: &R,
    plan: &WorkflowPlan,
) -> Result<CommandOutput, AppError> {
    let argv = ["/bin/sh", "-c", plan.command()];
    run_step(runner, &argv, plan.project_dir(), AppError::CommandFailed)
}

fn run_step<R: CommandRunner>(
    runner: &R,
    argv: &[&str],
    cwd: &Path,
    fail: fn(CommandFailure) -> AppError,
) -> Result<CommandOutput, AppError> {
    let command = display_command(argv);
    match runner.run(argv, cwd) {
        Ok(output) if output.success => Ok(output),
        Ok(output) => {
            Err(fail(CommandFailure { command, status: output.status, output: output.combined }))
        }
        Err(err) => Err(fail(CommandFailure {
            command,
            status: format!("failed to start: {}", err),
            output: String::new(),
        })),
    }
}
