//! `DirectoryLister` implementation for `FilesystemStore`.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::DirectoryLister;

use super::FilesystemStore;

const HIDDEN_MARKER: char = '.';

impl DirectoryLister for FilesystemStore {
    fn list_visible_entries(&self, dir: &Path) -> Result<Vec<PathBuf>, AppError> {
        let full_path = self.resolve_path(dir);
        if !full_path.is_dir() {
            return Err(AppError::InvalidPath(full_path.display().to_string()));
        }

        let mut paths = Vec::new();
        for entry in fs::read_dir(&full_path)? {
            let entry = entry?;
            if entry.file_name().to_string_lossy().starts_with(HIDDEN_MARKER) {
                continue;
            }
            paths.push(entry.path());
        }
        Ok(paths)
    }
}
