use std::path::Path;

use serde_json::Value;

use crate::domain::{AppError, JsonObject};

/// Port for reading and writing text, JSON, and JSON-lines documents.
///
/// Reads decompress when the path passes [`crate::domain::is_gzip_path`];
/// writes compress only when asked to. Writers create missing parent directories.
pub trait DocumentCodec {
    /// Read a text file as whitespace-trimmed lines.
    fn read_text(&self, path: &Path) -> Result<Vec<String>, AppError>;

    fn write_text(&self, text: &str, path: &Path, compress: bool) -> Result<(), AppError>;

    /// Parse a single JSON document.
    fn parse_json(&self, path: &Path) -> Result<Value, AppError>;

    /// Parse one JSON object per line.
    fn parse_jsonl(&self, path: &Path) -> Result<Vec<JsonObject>, AppError>;

    fn write_json(&self, value: &Value, path: &Path, compress: bool) -> Result<(), AppError>;

    fn write_jsonl(
        &self,
        records: &[JsonObject],
        path: &Path,
        compress: bool,
    ) -> Result<(), AppError>;
}

impl<T: DocumentCodec + ?Sized> DocumentCodec for &T {
    fn read_text(&self, path: &Path) -> Result<Vec<String>, AppError> {
        (**self).read_text(path)
    }

    fn write_text(&self, text: &str, path: &Path, compress: bool) -> Result<(), AppError> {
        (**self).write_text(text, path, compress)
    }

    fn parse_json(&self, path: &Path) -> Result<Value, AppError> {
        (**self).parse_json(path)
    }

    fn parse_jsonl(&self, path: &Path) -> Result<Vec<JsonObject>, AppError> {
        (**self).parse_jsonl(path)
    }

    fn write_json(&self, value: &Value, path: &Path, compress: bool) -> Result<(), AppError> {
        (**self).write_json(value, path, compress)
    }

    fn write_jsonl(
        &self,
        records: &[JsonObject],
        path: &Path,
        compress: bool,
    ) -> Result<(), AppError> {
        (**self).write_jsonl(records, path, compress)
    }
}
