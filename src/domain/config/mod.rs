//! Configuration model for constant-group and summary locations.

pub mod parse;
pub mod paths;
mod provkit_config;

pub use parse::parse_config_content;
pub use provkit_config::{ConstantGroupPaths, ProvkitConfig};
pub(crate) use provkit_config::resolve_against;
