//! Collection summary records.

use std::path::Path;

use serde_json::{Map, Value};

use crate::domain::AppError;

/// Provenance metadata for one dataset collection, passed through verbatim.
pub type SummaryRecord = Map<String, Value>;

/// Name fragments marking template or schema files in a summary directory.
pub const TEMPLATE_MARKERS: [&str; 2] = ["_template.json", "_template_spec.yaml"];

/// Whether a summary-directory entry is a template that must not be collected.
pub fn is_template_entry(path: &Path) -> bool {
    let path = path.to_string_lossy();
    TEMPLATE_MARKERS.iter().any(|marker| path.contains(marker))
}

/// Extract the records held in one collection file, in file order.
///
/// The document must be an object whose values are themselves objects; the
/// top-level keys are dropped.
pub fn records_from_document(
    path: &Path,
    document: Value,
) -> Result<Vec<SummaryRecord>, AppError> {
    let entries = match document {
        Value::Object(entries) => entries,
        other => {
            return Err(AppError::decode(
                path.display().to_string(),
                format!("expected a JSON object of collection records, found {}", kind_of(&other)),
            ));
        }
    };

    entries
        .into_iter()
        .map(|(key, value)| match value {
            Value::Object(record) => Ok(record),
            other => Err(AppError::decode(
                path.display().to_string(),
                format!("record '{key}' is {}, expected an object", kind_of(&other)),
            )),
        })
        .collect()
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
