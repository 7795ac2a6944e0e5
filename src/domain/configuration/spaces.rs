//! Work-area roots and their TOML representation.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::AppError;

/// Root used when the cache flag is off. Assumed fresh for every container.
pub const EPHEMERAL_SPACE: &str = "/root/src";

/// Root shared across invocations when the cache flag is on.
pub const CACHE_SPACE: &str = "/workflow-cache";

/// The two fixed roots a working copy can live under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpaceRoots {
    pub ephemeral: PathBuf,
    pub cache: PathBuf,
}

impl Default for SpaceRoots {
    fn default() -> Self {
        Self { ephemeral: PathBuf::from(EPHEMERAL_SPACE), cache: PathBuf::from(CACHE_SPACE) }
    }
}

impl SpaceRoots {
    pub fn select(&self, cache_enabled: bool) -> &Path {
        if cache_enabled { &self.cache } else { &self.ephemeral }
    }

    /// Apply per-field overrides, keeping the current value where none is given.
    pub fn with_overrides(self, ephemeral: Option<PathBuf>, cache: Option<PathBuf>) -> Self {
        Self { ephemeral: ephemeral.unwrap_or(self.ephemeral), cache: cache.unwrap_or(self.cache) }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SpacesFile {
    #[serde(default)]
    spaces: SpacesTable,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SpacesTable {
    ephemeral: Option<PathBuf>,
    cache: Option<PathBuf>,
}

/// Parse a config file body of the form:
///
/// ```toml
/// [spaces]
/// ephemeral = "/root/src"
/// cache = "/workflow-cache"
/// ```
///
/// Missing keys fall back to the built-in roots.
pub fn parse_spaces_content(content: &str) -> Result<SpaceRoots, AppError> {
    let file: SpacesFile = toml::from_str(content)
        .map_err(|e| AppError::config_error(format!("Invalid config file: {}", e)))?;

    for (key, path) in [("ephemeral", &file.spaces.ephemeral), ("cache", &file.spaces.cache)] {
        if let Some(path) = path
            && path.as_os_str().is_empty()
        {
            return Err(AppError::config_error(format!("spaces.{} must not be empty", key)));
        }
    }

    Ok(SpaceRoots::default().with_overrides(file.spaces.ephemeral, file.spaces.cache))
}
