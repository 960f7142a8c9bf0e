//! Command-line interface for exploring SiteScout suggestions.
//!
//! The binary stands in for a map front end: it generates the synthetic
//! business data set, applies a viewport and category, and prints the
//! outcome as JSON.
#![forbid(unsafe_code)]

use std::io::Write;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

mod error;
mod heatmap;
mod suggest;

pub use error::CliError;

use heatmap::{HeatmapArgs, run_heatmap};
use suggest::{SuggestArgs, run_suggest};

const ARG_CATEGORY: &str = "category";
const ARG_SOUTH: &str = "south";
const ARG_WEST: &str = "west";
const ARG_NORTH: &str = "north";
const ARG_EAST: &str = "east";
const ARG_TOP_K: &str = "top-k";
const ARG_GRID_SIZE: &str = "grid-size";
const ARG_SEED: &str = "seed";
const ENV_SUGGEST_CATEGORY: &str = "SITESCOUT_CMDS_SUGGEST_CATEGORY";
const ENV_SUGGEST_SOUTH: &str = "SITESCOUT_CMDS_SUGGEST_SOUTH";
const ENV_SUGGEST_WEST: &str = "SITESCOUT_CMDS_SUGGEST_WEST";
const ENV_SUGGEST_NORTH: &str = "SITESCOUT_CMDS_SUGGEST_NORTH";
const ENV_SUGGEST_EAST: &str = "SITESCOUT_CMDS_SUGGEST_EAST";

/// Run the SiteScout CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Suggest(args) => run_suggest(args),
        Command::Heatmap(args) => run_heatmap(args),
    }
}

/// Install a stderr log subscriber filtered by `RUST_LOG`.
///
/// Records emitted through the `log` facade by the library crates are
/// forwarded to the subscriber. Stdout stays reserved for JSON reports.
pub fn init_logging() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(CliError::Logging)
}

#[derive(Debug, Parser)]
#[command(
    name = "sitescout",
    about = "Suggest where to open a business using synthetic market data",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank candidate locations for a category inside a viewport.
    Suggest(SuggestArgs),
    /// Print the business positions that feed the density heatmap.
    Heatmap(HeatmapArgs),
}

fn write_report<T: Serialize>(writer: &mut dyn Write, report: &T) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(report).map_err(CliError::SerialiseReport)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
mod tests;
