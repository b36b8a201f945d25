//! provkit: collect dataset-provenance summaries and aggregate provenance constant groups.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use adapters::FilesystemStore;
pub use app::AppContext;
pub use app::api::{
    SummaryExportOptions, SummaryFormat, collect_summaries_at, export_constants,
    export_summaries, load_config_at, load_constant_groups_at, load_constants_at,
    load_default_config,
};
pub use domain::{
    AggregatedConstants, AppError, ConstantGroup, ConstantGroupPaths, JsonObject, ProvkitConfig,
    SummaryRecord, is_gzip_path,
};
pub use ports::{DirectoryLister, DocumentCodec};
