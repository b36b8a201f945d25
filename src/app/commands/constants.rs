//! Constant-group aggregation.

use std::path::Path;

use serde_json::Value;

use crate::app::AppContext;
use crate::domain::{AggregatedConstants, AppError, ConstantGroup, ConstantGroupPaths};
use crate::ports::{DirectoryLister, DocumentCodec};

/// Parse every constant group, in aggregation order.
///
/// The first missing or malformed source aborts the load; nothing partial is returned.
pub fn load<L, C>(
    ctx: &AppContext<L, C>,
    paths: &ConstantGroupPaths,
) -> Result<AggregatedConstants, AppError>
where
    L: DirectoryLister,
    C: DocumentCodec,
{
    let mut values: [Value; ConstantGroup::COUNT] = Default::default();
    for (slot, (group, path)) in values.iter_mut().zip(paths.iter()) {
        log::debug!("Loading {} from {}", group, path.display());
        *slot = ctx.codec().parse_json(path)?;
    }
    Ok(AggregatedConstants::new(values))
}

/// Load every constant group and write the aggregated object to `output`.
pub fn export<L, C>(
    ctx: &AppContext<L, C>,
    paths: &ConstantGroupPaths,
    output: &Path,
    compress: bool,
) -> Result<AggregatedConstants, AppError>
where
    L: DirectoryLister,
    C: DocumentCodec,
{
    let constants = load(ctx, paths)?;
    ctx.codec().write_json(&constants.clone().into_json(), output, compress)?;
    log::info!("Wrote {} constant groups to {}", ConstantGroup::COUNT, output.display());
    Ok(constants)
}
