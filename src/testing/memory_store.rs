use std::cell::RefCell;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::domain::document;
use crate::domain::{AppError, JsonObject};
use crate::ports::{DirectoryLister, DocumentCodec};

#[derive(Debug, Clone)]
pub struct MemoryFile {
    pub path: PathBuf,
    pub content: String,
    pub compressed: bool,
}

/// In-memory store implementing both I/O ports.
///
/// Files are kept in insertion order, which doubles as directory enumeration
/// order. Compression is recorded but not applied.
#[derive(Default)]
pub struct MemoryStore {
    files: RefCell<Vec<MemoryFile>>,
    dirs: RefCell<Vec<PathBuf>>,
    reads: RefCell<Vec<PathBuf>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.put(Path::new(path), content.to_string(), false);
        self
    }

    pub fn with_json(self, path: &str, value: Value) -> Self {
        self.with_file(path, &value.to_string())
    }

    /// Paths read so far, in read order.
    pub fn reads(&self) -> Vec<PathBuf> {
        self.reads.borrow().clone()
    }

    pub fn file(&self, path: &str) -> Option<MemoryFile> {
        self.files.borrow().iter().find(|f| f.path == Path::new(path)).cloned()
    }

    fn add_dir(&self, dir: &Path) {
        let mut dirs = self.dirs.borrow_mut();
        for ancestor in dir.ancestors().filter(|a| !a.as_os_str().is_empty()) {
            if !dirs.iter().any(|d| d == ancestor) {
                dirs.push(ancestor.to_path_buf());
            }
        }
    }

    fn put(&self, path: &Path, content: String, compressed: bool) {
        if let Some(parent) = path.parent() {
            self.add_dir(parent);
        }
        let mut files = self.files.borrow_mut();
        files.retain(|f| f.path != path);
        files.push(MemoryFile { path: path.to_path_buf(), content, compressed });
    }

    fn read(&self, path: &Path) -> Result<String, AppError> {
        self.reads.borrow_mut().push(path.to_path_buf());
        self.files
            .borrow()
            .iter()
            .find(|f| f.path == path)
            .map(|f| f.content.clone())
            .ok_or_else(|| AppError::NotFound(path.display().to_string()))
    }
}

impl DirectoryLister for MemoryStore {
    fn list_visible_entries(&self, dir: &Path) -> Result<Vec<PathBuf>, AppError> {
        if !self.dirs.borrow().iter().any(|d| d == dir) {
            return Err(AppError::InvalidPath(dir.display().to_string()));
        }
        let files = self.files.borrow();
        let dirs = self.dirs.borrow();
        let children = files
            .iter()
            .map(|f| f.path.as_path())
            .chain(dirs.iter().map(PathBuf::as_path))
            .filter(|p| p.parent() == Some(dir))
            .filter(|p| {
                !p.file_name().map(|n| n.to_string_lossy().starts_with('.')).unwrap_or(false)
            })
            .map(Path::to_path_buf)
            .collect();
        Ok(children)
    }
}

impl DocumentCodec for MemoryStore {
    fn read_text(&self, path: &Path) -> Result<Vec<String>, AppError> {
        Ok(document::text_lines(&self.read(path)?))
    }

    fn write_text(&self, text: &str, path: &Path, compress: bool) -> Result<(), AppError> {
        self.put(path, text.to_string(), compress);
        Ok(())
    }

    fn parse_json(&self, path: &Path) -> Result<Value, AppError> {
        document::parse_json(path, &self.read(path)?)
    }

    fn parse_jsonl(&self, path: &Path) -> Result<Vec<JsonObject>, AppError> {
        document::parse_jsonl(path, &self.read(path)?)
    }

    fn write_json(&self, value: &Value, path: &Path, compress: bool) -> Result<(), AppError> {
        self.put(path, document::render_json(value)?, compress);
        Ok(())
    }

    fn write_jsonl(
        &self,
        records: &[JsonObject],
        path: &Path,
        compress: bool,
    ) -> Result<(), AppError> {
        self.put(path, document::render_jsonl(records)?, compress);
        Ok(())
    }
}
