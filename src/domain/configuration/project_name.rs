use crate::domain::AppError;

/// Derive the working-copy directory name from a clone URL.
///
/// Strips one trailing `/`, then one trailing `.git`, and keeps whatever follows
/// the last remaining `/`. Names that would alias the work root or its parent
/// are rejected.
pub fn derive_project_name(clone_url: &str) -> Result<String, AppError> {
    let trimmed = clone_url.strip_suffix('/').unwrap_or(clone_url);
    let trimmed = trimmed.strip_suffix(".git").unwrap_or(trimmed);
    let name = match trimmed.rfind('/') {
        Some(idx) => &trimmed[idx + 1..],
        None => trimmed,
    };

    if name.is_empty() || name == "." || name == ".." {
        return Err(AppError::InvalidCloneUrl { url: clone_url.to_string() });
    }

    Ok(name.to_string())
}
