//! Suggest command implementation for the SiteScout CLI.

use std::io::Write;

use clap::Parser;
use log::debug;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use sitescout_core::{
    BoundingRegion, CandidateLocation, Category, DEFAULT_GRID_SIZE, DEFAULT_TOP_K, GridSearch,
    RegionSnapshot, SuggestionRanker, Suggestions,
};
use sitescout_data::{DEFAULT_SEED, SampleConfig, sample_store};

use crate::{
    ARG_CATEGORY, ARG_EAST, ARG_GRID_SIZE, ARG_NORTH, ARG_SEED, ARG_SOUTH, ARG_TOP_K, ARG_WEST,
    CliError, ENV_SUGGEST_CATEGORY, ENV_SUGGEST_EAST, ENV_SUGGEST_NORTH, ENV_SUGGEST_SOUTH,
    ENV_SUGGEST_WEST, write_report,
};

// Central Monterrey, the viewport the map opens on.
const DEFAULT_SOUTH: f64 = 25.60;
const DEFAULT_WEST: f64 = -100.40;
const DEFAULT_NORTH: f64 = 25.70;
const DEFAULT_EAST: f64 = -100.20;

/// CLI arguments for the `suggest` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Rank candidate locations for a new business of the given \
                 category inside a viewport. Omit all four bounds to use the \
                 default Monterrey viewport. Options can come from CLI flags, \
                 configuration files, or environment variables.",
    about = "Suggest locations for a new business"
)]
#[ortho_config(prefix = "SITESCOUT")]
pub(crate) struct SuggestArgs {
    /// Category of the business to site (restaurant, retail, service, entertainment).
    #[arg(long = ARG_CATEGORY, value_name = "key")]
    #[serde(default)]
    pub(crate) category: Option<String>,
    /// Southern latitude of the viewport.
    #[arg(long = ARG_SOUTH, value_name = "lat", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) south: Option<f64>,
    /// Western longitude of the viewport.
    #[arg(long = ARG_WEST, value_name = "lng", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) west: Option<f64>,
    /// Northern latitude of the viewport.
    #[arg(long = ARG_NORTH, value_name = "lat", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) north: Option<f64>,
    /// Eastern longitude of the viewport.
    #[arg(long = ARG_EAST, value_name = "lng", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) east: Option<f64>,
    /// Number of suggestions to return.
    #[arg(long = ARG_TOP_K, value_name = "n")]
    #[serde(default)]
    pub(crate) top_k: Option<usize>,
    /// Lattice steps per axis.
    #[arg(long = ARG_GRID_SIZE, value_name = "n")]
    #[serde(default)]
    pub(crate) grid_size: Option<u16>,
    /// Seed for the synthetic business data.
    #[arg(long = ARG_SEED, value_name = "n")]
    #[serde(default)]
    pub(crate) seed: Option<u64>,
}

impl SuggestArgs {
    pub(crate) fn into_config(self) -> Result<SuggestConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        SuggestConfig::try_from(merged)
    }
}

/// Resolved `suggest` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SuggestConfig {
    pub(crate) category: Category,
    pub(crate) region: BoundingRegion,
    pub(crate) top_k: usize,
    pub(crate) grid_size: u16,
    pub(crate) seed: u64,
}

impl TryFrom<SuggestArgs> for SuggestConfig {
    type Error = CliError;

    fn try_from(args: SuggestArgs) -> Result<Self, Self::Error> {
        let category = args
            .category
            .as_deref()
            .ok_or(CliError::MissingArgument {
                field: ARG_CATEGORY,
                env: ENV_SUGGEST_CATEGORY,
            })?
            .parse::<Category>()?;
        let region = resolve_region(&args)?;
        let top_k = args.top_k.unwrap_or(DEFAULT_TOP_K);
        if top_k == 0 {
            return Err(CliError::ZeroCount { field: ARG_TOP_K });
        }

        Ok(Self {
            category,
            region,
            top_k,
            grid_size: args.grid_size.unwrap_or(DEFAULT_GRID_SIZE),
            seed: args.seed.unwrap_or(DEFAULT_SEED),
        })
    }
}

/// Use the default viewport when no bound is given; otherwise all four are
/// required.
fn resolve_region(args: &SuggestArgs) -> Result<BoundingRegion, CliError> {
    let bounds = [args.south, args.west, args.north, args.east];
    if bounds.iter().all(Option::is_none) {
        return Ok(BoundingRegion::from_bounds(
            DEFAULT_SOUTH,
            DEFAULT_WEST,
            DEFAULT_NORTH,
            DEFAULT_EAST,
        )?);
    }
    let south = require_bound(args.south, ARG_SOUTH, ENV_SUGGEST_SOUTH)?;
    let west = require_bound(args.west, ARG_WEST, ENV_SUGGEST_WEST)?;
    let north = require_bound(args.north, ARG_NORTH, ENV_SUGGEST_NORTH)?;
    let east = require_bound(args.east, ARG_EAST, ENV_SUGGEST_EAST)?;
    Ok(BoundingRegion::from_bounds(south, west, north, east)?)
}

fn require_bound(
    value: Option<f64>,
    field: &'static str,
    env: &'static str,
) -> Result<f64, CliError> {
    value.ok_or(CliError::MissingArgument { field, env })
}

pub(crate) fn run_suggest(args: SuggestArgs) -> Result<(), CliError> {
    let config = args.into_config()?;
    let mut stdout = std::io::stdout().lock();
    run_suggest_with(&config, &mut stdout)
}

pub(crate) fn run_suggest_with(
    config: &SuggestConfig,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let report = execute_suggest(config)?;
    write_report(writer, &report)
}

fn execute_suggest(config: &SuggestConfig) -> Result<SuggestReport, CliError> {
    let store = sample_store(&SampleConfig::with_seed(config.seed))?;
    let ranker = SuggestionRanker::default()
        .with_top_k(config.top_k)
        .with_search(GridSearch::new(config.grid_size));
    debug!(
        "suggesting {} sites in {:?} over {} sample businesses",
        config.category,
        config.region,
        store.len()
    );

    let snapshot = RegionSnapshot::capture(&store, config.region, config.category);
    let outcome = ranker.rank_snapshot(&snapshot);
    Ok(SuggestReport::new(&snapshot, outcome))
}

/// JSON document printed by `suggest`.
#[derive(Debug, Serialize)]
pub(crate) struct SuggestReport {
    pub(crate) kind: &'static str,
    pub(crate) category: Category,
    pub(crate) message: String,
    pub(crate) businesses_in_view: usize,
    pub(crate) competitors_in_view: usize,
    pub(crate) candidates: Vec<CandidateReport>,
}

/// One ranked location in a [`SuggestReport`].
#[derive(Debug, Serialize)]
pub(crate) struct CandidateReport {
    pub(crate) rank: usize,
    pub(crate) latitude: f64,
    pub(crate) longitude: f64,
    pub(crate) score: f64,
    pub(crate) rationale: &'static str,
}

impl SuggestReport {
    fn new(snapshot: &RegionSnapshot, outcome: Suggestions) -> Self {
        let (kind, message) = match &outcome {
            Suggestions::NoBusinesses => (
                "no_businesses",
                String::from("no businesses in this area to analyse"),
            ),
            Suggestions::NoCompetition(_) => (
                "no_competition",
                String::from("no competition in this area: ideal location"),
            ),
            Suggestions::Ranked(list) if list.is_empty() => {
                ("ranked", String::from("no optimal locations found"))
            }
            Suggestions::Ranked(list) => ("ranked", format!("found {} locations", list.len())),
        };
        let candidates = outcome
            .into_candidates()
            .into_iter()
            .zip(1..)
            .map(|(candidate, rank)| CandidateReport::new(rank, &candidate))
            .collect();

        Self {
            kind,
            category: snapshot.category(),
            message,
            businesses_in_view: snapshot.businesses().len(),
            competitors_in_view: snapshot.competitors().len(),
            candidates,
        }
    }
}

impl CandidateReport {
    fn new(rank: usize, candidate: &CandidateLocation) -> Self {
        Self {
            rank,
            latitude: candidate.latitude(),
            longitude: candidate.longitude(),
            score: candidate.display_score(),
            rationale: candidate.rationale.as_str(),
        }
    }
}
