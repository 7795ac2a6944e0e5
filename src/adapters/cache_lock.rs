use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::domain::AppError;

/// Exclusive advisory lock over one project in the shared cache root.
///
/// Held until dropped. Other processes asking for the same project block in
/// [`CacheLock::acquire`] until then.
#[derive(Debug)]
pub struct CacheLock {
    file: File,
    path: PathBuf,
}

impl CacheLock {
    pub fn lock_path(work_dir: &Path, project_name: &str) -> PathBuf {
        work_dir.join(format!(".{}.lock", project_name))
    }

    pub fn acquire(work_dir: &Path, project_name: &str) -> Result<Self, AppError> {
        let path = Self::lock_path(work_dir, project_name);
        let file =
            OpenOptions::new().read(true).write(true).create(true).truncate(false).open(&path)?;
        file.lock_exclusive()?;
        Ok(Self { file, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for CacheLock {
    fn drop(&mut self) {
        let _ = self.file.unlock();
    }
}
