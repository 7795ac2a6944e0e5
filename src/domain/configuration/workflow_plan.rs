//! Resolution of environment inputs into a workflow plan.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::project_name::derive_project_name;
use super::spaces::SpaceRoots;
use crate::domain::AppError;

pub const GIT_CLONE_URL: &str = "GIT_CLONE_URL";
pub const GIT_REF: &str = "GIT_REF";
pub const WORKFLOW_GIT_CLONE_URL: &str = "_WORKFLOW_GIT_CLONE_URL";
pub const WORKFLOW_GIT_REF: &str = "_WORKFLOW_GIT_REF";
pub const WORKFLOW_FLAG_CACHE: &str = "_WORKFLOW_FLAG_CACHE";
pub const CMD: &str = "CMD";

/// Every variable the resolver consumes.
pub const ENV_ALLOWLIST: [&str; 6] =
    [GIT_CLONE_URL, GIT_REF, WORKFLOW_GIT_CLONE_URL, WORKFLOW_GIT_REF, WORKFLOW_FLAG_CACHE, CMD];

pub const DEFAULT_REVISION: &str = "master";

/// (url, revision) variable names, in priority order.
const SOURCE_PAIRS: [(&str, &str); 2] =
    [(GIT_CLONE_URL, GIT_REF), (WORKFLOW_GIT_CLONE_URL, WORKFLOW_GIT_REF)];

/// Fully resolved parameters for one build step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkflowPlan {
    clone_url: String,
    revision: String,
    project_name: String,
    cache_enabled: bool,
    work_dir: PathBuf,
    project_dir: PathBuf,
    command: String,
}

impl WorkflowPlan {
    /// Resolve a plan from an environment mapping.
    ///
    /// The first source pair with a non-empty URL supplies both the URL and the
    /// revision; the revision of the other pair is never consulted.
    pub fn resolve(env: &BTreeMap<String, String>, roots: &SpaceRoots) -> Result<Self, AppError> {
        let lookup = |name: &str| env.get(name).map(String::as_str).unwrap_or("");

        let (clone_url, revision) = SOURCE_PAIRS
            .into_iter()
            .find(|&(url, _)| !lookup(url).is_empty())
            .map(|(url, rev)| (lookup(url), lookup(rev)))
            .ok_or_else(|| AppError::MissingRequiredInput { name: GIT_CLONE_URL.to_string() })?;

        let revision = if revision.is_empty() { DEFAULT_REVISION } else { revision };
        let project_name = derive_project_name(clone_url)?;
        let cache_enabled = lookup(WORKFLOW_FLAG_CACHE).eq_ignore_ascii_case("true");

        Ok(Self::new(
            clone_url.to_string(),
            revision.to_string(),
            project_name,
            cache_enabled,
            roots.select(cache_enabled).to_path_buf(),
            lookup(CMD).to_string(),
        ))
    }

    fn new(
        clone_url: String,
        revision: String,
        project_name: String,
        cache_enabled: bool,
        work_dir: PathBuf,
        command: String,
    ) -> Self {
        let project_dir = work_dir.join(&project_name);
        Self { clone_url, revision, project_name, cache_enabled, work_dir, project_dir, command }
    }

    pub fn clone_url(&self) -> &str {
        &self.clone_url
    }

    pub fn revision(&self) -> &str {
        &self.revision
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn cache_enabled(&self) -> bool {
        self.cache_enabled
    }

    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    pub fn command(&self) -> &str {
        &self.command
    }
}
