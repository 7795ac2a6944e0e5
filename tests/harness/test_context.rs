//! Shared testing harness for `gitcmd` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::git_repository;

/// Variables the binary reads; cleared so the host environment cannot leak in.
const PLAN_VARIABLES: [&str; 6] = [
    "GIT_CLONE_URL",
    "GIT_REF",
    "_WORKFLOW_GIT_CLONE_URL",
    "_WORKFLOW_GIT_REF",
    "_WORKFLOW_FLAG_CACHE",
    "CMD",
];

/// Isolated upstream repository plus ephemeral and cache roots.
///
/// The upstream `myrepo` has two commits on `master`: the first writes
/// `VERSION` = `1` and is tagged `v1`, the second bumps it to `2`.
pub(crate) struct TestContext {
    root: TempDir,
    upstream: PathBuf,
    ephemeral: PathBuf,
    cache: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let upstream = root.path().join("upstream").join("myrepo");
        let ephemeral = root.path().join("src");
        let cache = root.path().join("cache");
        for dir in [&upstream, &ephemeral, &cache] {
            fs::create_dir_all(dir).expect("Failed to create test directory");
        }

        git_repository::init_repo(&upstream);
        fs::write(upstream.join("README.md"), "# myrepo\n").expect("write README.md");
        fs::write(upstream.join("VERSION"), "1\n").expect("write VERSION");
        git_repository::commit_all(&upstream, "Initial commit");
        git_repository::tag(&upstream, "v1");
        fs::write(upstream.join("VERSION"), "2\n").expect("write VERSION");
        git_repository::commit_all(&upstream, "Bump version");

        Self { root, upstream, ephemeral, cache }
    }

    /// `file://` URL of the upstream repository.
    pub(crate) fn clone_url(&self) -> String {
        format!("file://{}", self.upstream.display())
    }

    pub(crate) fn root(&self) -> &Path {
        self.root.path()
    }

    pub(crate) fn ephemeral(&self) -> &Path {
        &self.ephemeral
    }

    pub(crate) fn cache(&self) -> &Path {
        &self.cache
    }

    /// Build a command for the compiled `gitcmd` binary with both roots
    /// pointed into the sandbox and no plan variables inherited.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("gitcmd").expect("Failed to locate gitcmd binary");
        cmd.current_dir(self.root.path())
            .arg("--ephemeral-root")
            .arg(&self.ephemeral)
            .arg("--cache-root")
            .arg(&self.cache);
        for name in PLAN_VARIABLES {
            cmd.env_remove(name);
        }
        cmd
    }

    /// Like [`TestContext::cli`] but with no root overrides.
    pub(crate) fn bare_cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("gitcmd").expect("Failed to locate gitcmd binary");
        cmd.current_dir(self.root.path());
        for name in PLAN_VARIABLES {
            cmd.env_remove(name);
        }
        cmd
    }
}
