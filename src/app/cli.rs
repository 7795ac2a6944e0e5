//! CLI Adapter.

use std::path::PathBuf;

use clap::Parser;

use crate::SpaceOptions;
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "gitcmd")]
#[command(version)]
#[command(
    about = "Clone GIT_CLONE_URL at GIT_REF and run CMD inside the working copy",
    long_about = None
)]
struct Cli {
    /// TOML file with a [spaces] table overriding the work roots
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Root used when the cache flag is off
    #[arg(long, value_name = "DIR")]
    ephemeral_root: Option<PathBuf>,
    /// Root used when _WORKFLOW_FLAG_CACHE is true
    #[arg(long, value_name = "DIR")]
    cache_root: Option<PathBuf>,
    /// Print the resolved plan as JSON and exit without running anything
    #[arg(long)]
    print_plan: bool,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    let options = SpaceOptions {
        config: cli.config,
        ephemeral_root: cli.ephemeral_root,
        cache_root: cli.cache_root,
    };

    let result = crate::resolve_plan(&options).and_then(|plan| {
        if cli.print_plan {
            let json = serde_json::to_string_pretty(&plan)
                .map_err(|e| AppError::config_error(format!("Failed to render plan: {}", e)))?;
            println!("{}", json);
            return Ok(());
        }
        crate::build(&plan)?;
        println!("BUILD SUCCEED");
        Ok(())
    });

    if let Err(e) = result {
        let prefix = if e.is_resolution_error() { "BUILDER FAILED" } else { "BUILD FAILED" };
        println!("{}: {}", prefix, e);
        std::process::exit(1);
    }
}
