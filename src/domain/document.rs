//! Pure rendering and parsing of text, JSON, and JSON-lines documents.

use std::io;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};

use crate::domain::AppError;

/// A single JSON-lines record.
pub type JsonObject = Map<String, Value>;

/// Trailing characters that mark a path as gzip-compressed on read.
pub const GZIP_SUFFIXES: [&str; 2] = ["gz", "gzip"];

/// Whether reads from `path` go through a gzip decoder.
///
/// Only the last two characters of the path are compared against
/// [`GZIP_SUFFIXES`], so `data.json.gz` and `datagz` both match while
/// `data.gzip` does not.
pub fn is_gzip_path(path: &Path) -> bool {
    let path = path.to_string_lossy();
    let chars: Vec<char> = path.chars().collect();
    let tail: String = chars[chars.len().saturating_sub(2)..].iter().collect();
    GZIP_SUFFIXES.contains(&tail.as_str())
}

/// Split text into lines with surrounding whitespace removed.
pub fn text_lines(content: &str) -> Vec<String> {
    content.lines().map(|line| line.trim().to_string()).collect()
}

pub fn parse_json(path: &Path, content: &str) -> Result<Value, AppError> {
    serde_json::from_str(content).map_err(|err| AppError::decode(path.display().to_string(), err))
}

/// Parse newline-delimited JSON objects. The first bad line fails the whole document.
pub fn parse_jsonl(path: &Path, content: &str) -> Result<Vec<JsonObject>, AppError> {
    let mut records = Vec::new();
    for (index, line) in content.lines().enumerate() {
        let line_no = index + 1;
        let value: Value = serde_json::from_str(line).map_err(|err| {
            AppError::decode(path.display().to_string(), format!("line {line_no}: {err}"))
        })?;
        match value {
            Value::Object(record) => records.push(record),
            _ => {
                return Err(AppError::decode(
                    path.display().to_string(),
                    format!("line {line_no}: expected a JSON object"),
                ));
            }
        }
    }
    Ok(records)
}

/// Render a value as pretty JSON with a four-space indent.
///
/// Non-ASCII characters are written as-is.
pub fn render_json(value: &Value) -> Result<String, AppError> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    value.serialize(&mut serializer).map_err(io::Error::from)?;
    String::from_utf8(buffer).map_err(|err| AppError::Io(io::Error::other(err)))
}

/// Render records as one compact JSON object per line, each newline-terminated.
pub fn render_jsonl(records: &[JsonObject]) -> Result<String, AppError> {
    let mut out = String::new();
    for record in records {
        out.push_str(&serde_json::to_string(record).map_err(io::Error::from)?);
        out.push('\n');
    }
    Ok(out)
}
