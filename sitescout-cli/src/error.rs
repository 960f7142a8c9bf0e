//! Error types emitted by the SiteScout CLI.
//!
//! Keep this error type reasonably small, as every command helper returns
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use sitescout_core::{RegionError, UnknownCategory};
use sitescout_data::SampleConfigError;
use thiserror::Error;

/// Errors emitted by the SiteScout CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// A count option must be at least one.
    #[error("{field} must be at least 1")]
    ZeroCount { field: &'static str },
    /// The category key is not one the engine knows.
    #[error(transparent)]
    InvalidCategory(#[from] UnknownCategory),
    /// The viewport bounds do not describe a region.
    #[error("invalid region: {0}")]
    InvalidRegion(#[from] RegionError),
    /// Sample data generation rejected its configuration.
    #[error("failed to generate sample data: {0}")]
    SampleData(#[from] SampleConfigError),
    /// Serialising the command report failed.
    #[error("failed to serialise report: {0}")]
    SerialiseReport(#[source] serde_json::Error),
    /// Installing the log subscriber failed.
    #[error("failed to install logger: {0}")]
    Logging(#[source] Box<dyn std::error::Error + Send + Sync>),
    /// Writing the command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
