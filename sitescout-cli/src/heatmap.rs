//! Heatmap command implementation for the SiteScout CLI.

use std::io::Write;

use clap::Parser;
use log::debug;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use sitescout_core::{CategoryFilter, heatmap_points};
use sitescout_data::{DEFAULT_SEED, SampleConfig, sample_store};

use crate::{ARG_CATEGORY, ARG_SEED, CliError, write_report};

/// CLI arguments for the `heatmap` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(about = "Print heatmap points, optionally filtered by category")]
#[ortho_config(prefix = "SITESCOUT")]
pub(crate) struct HeatmapArgs {
    /// Category key, or `all` for every business.
    #[arg(long = ARG_CATEGORY, value_name = "key")]
    #[serde(default)]
    pub(crate) category: Option<String>,
    /// Seed for the synthetic business data.
    #[arg(long = ARG_SEED, value_name = "n")]
    #[serde(default)]
    pub(crate) seed: Option<u64>,
}

impl HeatmapArgs {
    pub(crate) fn into_config(self) -> Result<HeatmapConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        HeatmapConfig::try_from(merged)
    }
}

/// Resolved `heatmap` command configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct HeatmapConfig {
    pub(crate) filter: CategoryFilter,
    pub(crate) seed: u64,
}

impl TryFrom<HeatmapArgs> for HeatmapConfig {
    type Error = CliError;

    fn try_from(args: HeatmapArgs) -> Result<Self, Self::Error> {
        let filter = match args.category.as_deref() {
            Some(key) => key.parse::<CategoryFilter>()?,
            None => CategoryFilter::All,
        };
        Ok(Self {
            filter,
            seed: args.seed.unwrap_or(DEFAULT_SEED),
        })
    }
}

pub(crate) fn run_heatmap(args: HeatmapArgs) -> Result<(), CliError> {
    let config = args.into_config()?;
    let mut stdout = std::io::stdout().lock();
    run_heatmap_with(config, &mut stdout)
}

pub(crate) fn run_heatmap_with(
    config: HeatmapConfig,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let store = sample_store(&SampleConfig::with_seed(config.seed))?;
    let points: Vec<_> = heatmap_points(&store, config.filter)
        .into_iter()
        .map(|point| PointReport {
            latitude: point.y,
            longitude: point.x,
        })
        .collect();
    debug!(
        "heatmap {} kept {} of {} businesses",
        config.filter,
        points.len(),
        store.len()
    );

    let report = HeatmapReport {
        filter: config.filter.to_string(),
        total_businesses: store.len(),
        count: points.len(),
        points,
    };
    write_report(writer, &report)
}

/// JSON document printed by `heatmap`.
#[derive(Debug, Serialize)]
struct HeatmapReport {
    filter: String,
    total_businesses: usize,
    count: usize,
    points: Vec<PointReport>,
}

#[derive(Debug, Serialize)]
struct PointReport {
    latitude: f64,
    longitude: f64,
}
