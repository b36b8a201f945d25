use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// Port for enumerating directory contents.
pub trait DirectoryLister {
    /// Full paths of every entry directly inside `dir` whose name does not start with `.`.
    ///
    /// Entries come back in the platform's enumeration order, which is not sorted.
    /// Fails with `AppError::InvalidPath` if `dir` is missing or not a directory.
    fn list_visible_entries(&self, dir: &Path) -> Result<Vec<PathBuf>, AppError>;
}

impl<T: DirectoryLister + ?Sized> DirectoryLister for &T {
    fn list_visible_entries(&self, dir: &Path) -> Result<Vec<PathBuf>, AppError> {
        (**self).list_visible_entries(dir)
    }
}
