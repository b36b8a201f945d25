//! Collection-summary gathering and export.

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::app::AppContext;
use crate::domain::summary::{is_template_entry, records_from_document};
use crate::domain::{AppError, SummaryRecord};
use crate::ports::{DirectoryLister, DocumentCodec};

/// On-disk format for exported summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SummaryFormat {
    /// One JSON array.
    #[default]
    Json,
    /// One record per line.
    JsonLines,
}

/// Options for the summaries export.
#[derive(Debug, Clone)]
pub struct SummaryExportOptions {
    pub summary_dir: PathBuf,
    pub output: PathBuf,
    pub format: SummaryFormat,
    pub compress: bool,
}

/// Gather every collection record under `summary_dir`.
///
/// Template files are skipped. Records keep directory enumeration order, then
/// in-file order. Any unreadable collection file fails the whole call.
pub fn collect<L, C>(
    ctx: &AppContext<L, C>,
    summary_dir: &Path,
) -> Result<Vec<SummaryRecord>, AppError>
where
    L: DirectoryLister,
    C: DocumentCodec,
{
    let mut summaries = Vec::new();
    for collection_path in ctx.lister().list_visible_entries(summary_dir)? {
        if is_template_entry(&collection_path) {
            log::debug!("Skipping template {}", collection_path.display());
            continue;
        }
        log::info!("{}", collection_path.display());
        let document = ctx.codec().parse_json(&collection_path)?;
        summaries.extend(records_from_document(&collection_path, document)?);
    }
    Ok(summaries)
}

/// Collect summaries and write them to `options.output`.
///
/// Returns the number of records written.
pub fn export<L, C>(
    ctx: &AppContext<L, C>,
    options: &SummaryExportOptions,
) -> Result<usize, AppError>
where
    L: DirectoryLister,
    C: DocumentCodec,
{
    let summaries = collect(ctx, &options.summary_dir)?;
    let count = summaries.len();

    match options.format {
        SummaryFormat::Json => {
            let value = Value::Array(summaries.into_iter().map(Value::Object).collect());
            ctx.codec().write_json(&value, &options.output, options.compress)?;
        }
        SummaryFormat::JsonLines => {
            ctx.codec().write_jsonl(&summaries, &options.output, options.compress)?;
        }
    }

    log::info!("Wrote {} summaries to {}", count, options.output.display());
    Ok(count)
}
