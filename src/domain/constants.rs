//! Provenance constant groups and their aggregated form.

use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};

/// One of the fixed reference vocabularies used to normalize collection summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ConstantGroup {
    LicenseClasses,
    CustomLicenseClasses,
    LanguageGroups,
    TaskGroups,
    DomainGroups,
    ModelGroups,
    CreatorGroups,
    Formats,
}

impl ConstantGroup {
    pub const COUNT: usize = 8;

    /// Every group, in aggregation order.
    pub const ALL: [ConstantGroup; Self::COUNT] = [
        ConstantGroup::LicenseClasses,
        ConstantGroup::CustomLicenseClasses,
        ConstantGroup::LanguageGroups,
        ConstantGroup::TaskGroups,
        ConstantGroup::DomainGroups,
        ConstantGroup::ModelGroups,
        ConstantGroup::CreatorGroups,
        ConstantGroup::Formats,
    ];

    /// Label used as the key in the aggregated output.
    pub fn label(self) -> &'static str {
        match self {
            ConstantGroup::LicenseClasses => "LICENSE_CLASSES",
            ConstantGroup::CustomLicenseClasses => "CUSTOM_LICENSE_CLASSES",
            ConstantGroup::LanguageGroups => "LANGUAGE_GROUPS",
            ConstantGroup::TaskGroups => "TASK_GROUPS",
            ConstantGroup::DomainGroups => "DOMAIN_GROUPS",
            ConstantGroup::ModelGroups => "MODEL_GROUPS",
            ConstantGroup::CreatorGroups => "CREATOR_GROUPS",
            ConstantGroup::Formats => "FORMATS",
        }
    }

    /// Lower snake-case name, used for config keys and conventional file names.
    pub fn config_key(self) -> &'static str {
        match self {
            ConstantGroup::LicenseClasses => "license_classes",
            ConstantGroup::CustomLicenseClasses => "custom_license_classes",
            ConstantGroup::LanguageGroups => "language_groups",
            ConstantGroup::TaskGroups => "task_groups",
            ConstantGroup::DomainGroups => "domain_groups",
            ConstantGroup::ModelGroups => "model_groups",
            ConstantGroup::CreatorGroups => "creator_groups",
            ConstantGroup::Formats => "formats",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|group| group.label() == label)
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ConstantGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Parsed contents of all eight constant groups.
///
/// Holds exactly one value per [`ConstantGroup`]; there is no way to build
/// one with a group missing.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedConstants {
    values: [Value; ConstantGroup::COUNT],
}

impl AggregatedConstants {
    pub fn new(values: [Value; ConstantGroup::COUNT]) -> Self {
        Self { values }
    }

    pub fn get(&self, group: ConstantGroup) -> &Value {
        &self.values[group.index()]
    }

    /// Iterate groups and their contents in aggregation order.
    pub fn iter(&self) -> impl Iterator<Item = (ConstantGroup, &Value)> {
        ConstantGroup::ALL.into_iter().zip(self.values.iter())
    }

    /// Convert into a JSON object keyed by group label.
    pub fn into_json(self) -> Value {
        let map: Map<String, Value> = ConstantGroup::ALL
            .into_iter()
            .zip(self.values)
            .map(|(group, value)| (group.label().to_string(), value))
            .collect();
        Value::Object(map)
    }
}

impl Serialize for AggregatedConstants {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(ConstantGroup::COUNT))?;
        for (group, value) in self.iter() {
            map.serialize_entry(group.label(), value)?;
        }
        map.end()
    }
}
