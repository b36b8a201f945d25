//! `DocumentCodec` implementation for `FilesystemStore`.

use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

use flate2::Compression;
use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;
use serde_json::Value;

use crate::domain::document;
use crate::domain::{AppError, JsonObject, is_gzip_path};
use crate::ports::DocumentCodec;

use super::FilesystemStore;

impl FilesystemStore {
    /// Read a whole file as UTF-8, decompressing when the path looks gzipped.
    fn read_document(&self, path: &Path) -> Result<String, AppError> {
        let full_path = self.resolve_path(path);
        let file = File::open(&full_path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => AppError::NotFound(full_path.display().to_string()),
            _ => AppError::Io(err),
        })?;

        let mut content = String::new();
        let read = if is_gzip_path(&full_path) {
            MultiGzDecoder::new(file).read_to_string(&mut content)
        } else {
            BufReader::new(file).read_to_string(&mut content)
        };
        read.map_err(|err| match err.kind() {
            io::ErrorKind::InvalidData
            | io::ErrorKind::InvalidInput
            | io::ErrorKind::UnexpectedEof => {
                AppError::decode(full_path.display().to_string(), err)
            }
            _ => AppError::Io(err),
        })?;
        Ok(content)
    }

    fn write_document(&self, content: &str, path: &Path, compress: bool) -> Result<(), AppError> {
        let full_path = self.resolve_path(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        log::debug!("Writing {}{}", full_path.display(), if compress { " (gzip)" } else { "" });
        let file = File::create(&full_path)?;
        if compress {
            let mut encoder = GzEncoder::new(BufWriter::new(file), Compression::default());
            encoder.write_all(content.as_bytes())?;
            encoder.finish()?.flush()?;
        } else {
            let mut writer = BufWriter::new(file);
            writer.write_all(content.as_bytes())?;
            writer.flush()?;
        }
        Ok(())
    }
}

impl DocumentCodec for FilesystemStore {
    fn read_text(&self, path: &Path) -> Result<Vec<String>, AppError> {
        let content = self.read_document(path)?;
        Ok(document::text_lines(&content))
    }

    fn write_text(&self, text: &str, path: &Path, compress: bool) -> Result<(), AppError> {
        self.write_document(text, path, compress)
    }

    fn parse_json(&self, path: &Path) -> Result<Value, AppError> {
        log::debug!("Reading {}...", path.display());
        let content = self.read_document(path)?;
        document::parse_json(path, &content)
    }

    fn parse_jsonl(&self, path: &Path) -> Result<Vec<JsonObject>, AppError> {
        let content = self.read_document(path)?;
        document::parse_jsonl(path, &content)
    }

    fn write_json(&self, value: &Value, path: &Path, compress: bool) -> Result<(), AppError> {
        let content = document::render_json(value)?;
        self.write_document(&content, path, compress)
    }

    fn write_jsonl(
        &self,
        records: &[JsonObject],
        path: &Path,
        compress: bool,
    ) -> Result<(), AppError> {
        let content = document::render_jsonl(records)?;
        self.write_document(&content, path, compress)
    }
}
