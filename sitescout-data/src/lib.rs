//! Synthetic business data for the SiteScout engine.
//!
//! Responsibilities:
//! - Generate reproducible sample businesses around well-known cities.
//! - Load them into an in-memory store ready for heatmaps and searches.
//!
//! Boundaries:
//! - Do not encode scoring rules (live in `sitescout-core`).
//! - No file or network access; real data ingestion is out of scope.
//!
//! Invariants:
//! - Output depends only on the supplied configuration and seed.
//! - No global mutable state.

#![forbid(unsafe_code)]

mod cities;
mod sample;

pub use cities::{City, SEED_CITIES};
pub use sample::{
    DEFAULT_SEED, SampleConfig, SampleConfigError, generate_sample_businesses, sample_store,
};
