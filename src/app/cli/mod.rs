//! CLI Adapter.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use serde_json::Value;

use crate::app::api::{self, SummaryExportOptions, SummaryFormat};
use crate::domain::document::{render_json, render_jsonl};
use crate::domain::{AppError, ConstantGroupPaths, ProvkitConfig};

#[derive(Parser)]
#[command(name = "provkit")]
#[command(version)]
#[command(
    about = "Collect dataset-provenance summaries and aggregate provenance constants",
    long_about = None
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Collect collection summary records from a directory
    #[clap(visible_alias = "s")]
    Summaries {
        /// Summary directory (defaults to [summaries].directory in provkit.toml)
        dir: Option<PathBuf>,
        /// Config file path (defaults to ./provkit.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Emit one record per line
        #[arg(long)]
        jsonl: bool,
        /// Gzip the output file
        #[arg(long, requires = "output")]
        compress: bool,
    },
    /// Load and merge the provenance constant groups
    #[clap(visible_alias = "c")]
    Constants {
        /// Config file path (defaults to ./provkit.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Read `<group>.json` files from this directory instead of a config file
        #[arg(short = 'd', long, conflicts_with = "config")]
        constants_dir: Option<PathBuf>,
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Gzip the output file
        #[arg(long, requires = "output")]
        compress: bool,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result: Result<(), AppError> = match cli.command {
        Commands::Summaries { dir, config, output, jsonl, compress } => {
            run_summaries(dir, config, output, jsonl, compress)
        }
        Commands::Constants { config, constants_dir, output, compress } => {
            run_constants(config, constants_dir, output, compress)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn load_config(config: Option<PathBuf>) -> Result<ProvkitConfig, AppError> {
    match config {
        Some(path) => api::load_config_at(path),
        None => api::load_default_config(),
    }
}

fn run_summaries(
    dir: Option<PathBuf>,
    config: Option<PathBuf>,
    output: Option<PathBuf>,
    jsonl: bool,
    compress: bool,
) -> Result<(), AppError> {
    let summary_dir = match dir {
        Some(dir) => dir,
        None => load_config(config)?.summary_dir.ok_or_else(|| {
            AppError::config_error(
                "No summary directory given and the config has no [summaries] directory",
            )
        })?,
    };
    let format = if jsonl { SummaryFormat::JsonLines } else { SummaryFormat::Json };

    match output {
        Some(output) => {
            let options = SummaryExportOptions { summary_dir, output, format, compress };
            let count = api::export_summaries(&options)?;
            println!("✅ Wrote {} summaries to {}", count, options.output.display());
        }
        None => {
            let summaries = api::collect_summaries_at(&summary_dir)?;
            match format {
                SummaryFormat::Json => {
                    let value = Value::Array(summaries.into_iter().map(Value::Object).collect());
                    println!("{}", render_json(&value)?);
                }
                SummaryFormat::JsonLines => print!("{}", render_jsonl(&summaries)?),
            }
        }
    }
    Ok(())
}

fn run_constants(
    config: Option<PathBuf>,
    constants_dir: Option<PathBuf>,
    output: Option<PathBuf>,
    compress: bool,
) -> Result<(), AppError> {
    let paths = match constants_dir {
        Some(dir) => ConstantGroupPaths::from_dir(&dir),
        None => load_config(config)?.constants,
    };

    match output {
        Some(output) => {
            api::export_constants(&paths, &output, compress)?;
            println!("✅ Wrote constant groups to {}", output.display());
        }
        None => {
            let constants = api::load_constant_groups_at(&paths)?;
            println!("{}", render_json(&constants.into_json())?);
        }
    }
    Ok(())
}
