//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution against the real filesystem.

use std::path::Path;

use crate::adapters::FilesystemStore;
use crate::app::{
    AppContext,
    commands::{constants, summaries},
    config,
};
use crate::domain::{
    AggregatedConstants, AppError, ConstantGroupPaths, ProvkitConfig, SummaryRecord,
};

pub use crate::app::commands::summaries::{SummaryExportOptions, SummaryFormat};

/// Create an `AppContext` rooted at the current working directory.
fn current_context() -> Result<AppContext<FilesystemStore, FilesystemStore>, AppError> {
    let store = FilesystemStore::current()?;
    Ok(AppContext::new(store.clone(), store))
}

// =============================================================================
// Summaries API
// =============================================================================

/// Collect every collection summary record under `summary_dir`.
pub fn collect_summaries_at(
    summary_dir: impl AsRef<Path>,
) -> Result<Vec<SummaryRecord>, AppError> {
    summaries::collect(&current_context()?, summary_dir.as_ref())
}

/// Collect summaries and write them out. Returns the number of records written.
pub fn export_summaries(options: &SummaryExportOptions) -> Result<usize, AppError> {
    summaries::export(&current_context()?, options)
}

// =============================================================================
// Constants API
// =============================================================================

/// Load all constant groups from already-resolved paths.
pub fn load_constant_groups_at(
    paths: &ConstantGroupPaths,
) -> Result<AggregatedConstants, AppError> {
    constants::load(&current_context()?, paths)
}

/// Load all constant groups using the paths configured in `config_path`.
pub fn load_constants_at(config_path: impl AsRef<Path>) -> Result<AggregatedConstants, AppError> {
    let config = config::load_config(config_path.as_ref())?;
    load_constant_groups_at(&config.constants)
}

/// Load all constant groups and write the aggregated object to `output`.
pub fn export_constants(
    paths: &ConstantGroupPaths,
    output: &Path,
    compress: bool,
) -> Result<AggregatedConstants, AppError> {
    constants::export(&current_context()?, paths, output, compress)
}

// =============================================================================
// Configuration API
// =============================================================================

/// Load configuration from an explicit file.
pub fn load_config_at(config_path: impl AsRef<Path>) -> Result<ProvkitConfig, AppError> {
    config::load_config(config_path.as_ref())
}

/// Load `provkit.toml` from the current directory.
pub fn load_default_config() -> Result<ProvkitConfig, AppError> {
    config::load_default_config(&std::env::current_dir()?)
}
