pub mod config;
pub mod constants;
pub mod document;
pub mod error;
pub mod summary;

pub use config::{ConstantGroupPaths, ProvkitConfig};
pub use constants::{AggregatedConstants, ConstantGroup};
pub use document::{JsonObject, is_gzip_path};
pub use error::AppError;
pub use summary::SummaryRecord;
