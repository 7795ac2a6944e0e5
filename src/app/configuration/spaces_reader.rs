//! Space-root loading from an optional config file.

use std::fs;
use std::io;
use std::path::Path;

use crate::domain::configuration::parse_spaces_content;
use crate::domain::{AppError, SpaceRoots};

/// Load roots from `path`, or the built-in roots when no file is given.
pub fn load_spaces(path: Option<&Path>) -> Result<SpaceRoots, AppError> {
    let Some(path) = path else {
        return Ok(SpaceRoots::default());
    };

    let content = fs::read_to_string(path).map_err(|err| {
        if err.kind() == io::ErrorKind::NotFound {
            AppError::config_error(format!("Config file not found: {}", path.display()))
        } else {
            AppError::config_error(format!("Failed to read {}: {}", path.display(), err))
        }
    })?;
    parse_spaces_content(&content)
}
