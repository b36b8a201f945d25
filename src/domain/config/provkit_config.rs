//! Resolved configuration records.

use std::path::{Path, PathBuf};

use crate::domain::{AppError, ConstantGroup};

/// One source path per constant group.
///
/// Built once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstantGroupPaths {
    paths: [PathBuf; ConstantGroup::COUNT],
}

impl ConstantGroupPaths {
    /// Paths given in aggregation order (see [`ConstantGroup::ALL`]).
    pub fn new(paths: [PathBuf; ConstantGroup::COUNT]) -> Result<Self, AppError> {
        for (group, path) in ConstantGroup::ALL.iter().zip(paths.iter()) {
            if path.as_os_str().is_empty() {
                return Err(AppError::config_error(format!(
                    "constants.{} must not be empty",
                    group.config_key()
                )));
            }
        }
        Ok(Self { paths })
    }

    /// Conventional layout: `<dir>/<group>.json` for every group.
    pub fn from_dir(dir: &Path) -> Self {
        Self {
            paths: ConstantGroup::ALL
                .map(|group| dir.join(format!("{}.json", group.config_key()))),
        }
    }

    pub fn path_for(&self, group: ConstantGroup) -> &Path {
        &self.paths[group as usize]
    }

    pub fn iter(&self) -> impl Iterator<Item = (ConstantGroup, &Path)> {
        ConstantGroup::ALL.into_iter().zip(self.paths.iter().map(PathBuf::as_path))
    }

    /// Resolve relative paths against `base`.
    pub fn resolved_against(self, base: &Path) -> Self {
        Self {
            paths: self.paths.map(|path| resolve_against(base, path)),
        }
    }
}

/// Absolute paths pass through; relative ones are joined onto `base`.
pub(crate) fn resolve_against(base: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() { path } else { base.join(path) }
}

/// Top-level provkit configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvkitConfig {
    /// Where each constant group is read from.
    pub constants: ConstantGroupPaths,
    /// Default directory of collection summaries, if configured.
    pub summary_dir: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_dir_uses_conventional_file_names() {
        let paths = ConstantGroupPaths::from_dir(Path::new("constants"));
        assert_eq!(
            paths.path_for(ConstantGroup::LicenseClasses),
            Path::new("constants/license_classes.json")
        );
        assert_eq!(paths.path_for(ConstantGroup::Formats), Path::new("constants/formats.json"));
        assert_eq!(paths.iter().count(), ConstantGroup::COUNT);
    }

    #[test]
    fn new_rejects_empty_path() {
        let mut raw = ConstantGroup::ALL.map(|g| PathBuf::from(format!("{}.json", g.config_key())));
        raw[3] = PathBuf::new();
        let result = ConstantGroupPaths::new(raw);
        assert!(
            matches!(result, Err(AppError::Configuration(ref msg)) if msg.contains("task_groups"))
        );
    }

    #[test]
    fn resolved_against_keeps_absolute_paths() {
        let mut raw = ConstantGroup::ALL.map(|g| PathBuf::from(format!("{}.json", g.config_key())));
        raw[0] = PathBuf::from("/etc/licenses.json");
        let paths = ConstantGroupPaths::new(raw).unwrap().resolved_against(Path::new("/data"));
        assert_eq!(paths.path_for(ConstantGroup::LicenseClasses), Path::new("/etc/licenses.json"));
        assert_eq!(
            paths.path_for(ConstantGroup::ModelGroups),
            Path::new("/data/model_groups.json")
        );
    }
}
