use std::path::Path;

use crate::domain::AppError;

/// Port for the filesystem operations the copier needs.
pub trait FileStore {
    /// Whether anything exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Copy the contents of `from` into `to`, creating or truncating `to`.
    ///
    /// Returns the number of bytes written.
    fn copy(&self, from: &Path, to: &Path) -> Result<u64, AppError>;
}
