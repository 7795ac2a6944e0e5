//! Process environment snapshot for plan resolution.

use std::collections::BTreeMap;

use crate::domain::configuration::ENV_ALLOWLIST;

/// Read every allowlisted variable from the process environment.
///
/// Unset or non-unicode variables map to an empty string.
pub fn read_env() -> BTreeMap<String, String> {
    read_env_with(|name| std::env::var(name).ok())
}

pub fn read_env_with<F>(lookup: F) -> BTreeMap<String, String>
where
    F: Fn(&str) -> Option<String>,
{
    ENV_ALLOWLIST
        .iter()
        .map(|&name| (name.to_string(), lookup(name).unwrap_or_default()))
        .collect()
}
