//! Configuration loading from `provkit.toml`.

use std::fs;
use std::io;
use std::path::Path;

use crate::domain::config::{self, parse_config_content};
use crate::domain::{AppError, ProvkitConfig};

/// Load and parse configuration from the given TOML file.
///
/// Relative paths inside the file resolve against the file's directory.
pub fn load_config(config_path: &Path) -> Result<ProvkitConfig, AppError> {
    let content = fs::read_to_string(config_path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => AppError::NotFound(config_path.display().to_string()),
        _ => AppError::Io(err),
    })?;
    let base_dir = config_path.parent().unwrap_or_else(|| Path::new(""));
    log::debug!("Loaded config from {}", config_path.display());
    parse_config_content(&content, base_dir)
}

/// Load `provkit.toml` from `root`.
pub fn load_default_config(root: &Path) -> Result<ProvkitConfig, AppError> {
    load_config(&config::paths::config(root))
}
