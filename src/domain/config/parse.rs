//! Pure parse/validate for `provkit.toml`.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::AppError;

use super::{ConstantGroupPaths, ProvkitConfig, resolve_against};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    constants: ConstantsSection,
    #[serde(default)]
    summaries: Option<SummariesSection>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConstantsSection {
    license_classes: PathBuf,
    custom_license_classes: PathBuf,
    language_groups: PathBuf,
    task_groups: PathBuf,
    domain_groups: PathBuf,
    model_groups: PathBuf,
    creator_groups: PathBuf,
    formats: PathBuf,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SummariesSection {
    directory: PathBuf,
}

/// Parse and validate configuration from TOML content.
///
/// Relative paths are resolved against `base_dir`, normally the directory
/// holding the config file.
pub fn parse_config_content(content: &str, base_dir: &Path) -> Result<ProvkitConfig, AppError> {
    let file: ConfigFile = toml::from_str(content)?;
    let c = file.constants;
    let constants = ConstantGroupPaths::new([
        c.license_classes,
        c.custom_license_classes,
        c.language_groups,
        c.task_groups,
        c.domain_groups,
        c.model_groups,
        c.creator_groups,
        c.formats,
    ])?
    .resolved_against(base_dir);

    let summary_dir = match file.summaries {
        Some(section) if section.directory.as_os_str().is_empty() => {
            return Err(AppError::config_error("summaries.directory must not be empty"));
        }
        Some(section) => Some(resolve_against(base_dir, section.directory)),
        None => None,
    };

    Ok(ProvkitConfig { constants, summary_dir })
}
