use std::io;

use thiserror::Error;

/// Library-wide error type for provkit operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// A required directory does not exist or is not a directory.
    #[error("Invalid directory: {0}")]
    InvalidPath(String),

    /// A required file does not exist.
    #[error("File not found: {0}")]
    NotFound(String),

    /// File content is not valid JSON or JSON-lines.
    #[error("Failed to decode {path}: {details}")]
    Decode { path: String, details: String },

    /// Configuration issue.
    #[error("{0}")]
    Configuration(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub(crate) fn decode<P: Into<String>, D: ToString>(path: P, details: D) -> Self {
        AppError::Decode { path: path.into(), details: details.to_string() }
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::InvalidPath(_) => io::ErrorKind::NotADirectory,
            AppError::NotFound(_) => io::ErrorKind::NotFound,
            AppError::Decode { .. } => io::ErrorKind::InvalidData,
            AppError::Configuration(_) | AppError::TomlParseError(_) => {
                io::ErrorKind::InvalidInput
            }
        }
    }
}
