//! Facade crate for the SiteScout placement engine.
//!
//! This crate re-exports the core domain types and scoring operations, and
//! exposes the synthetic sample-data generator behind the `sample-data`
//! feature.
//!
//! # Examples
//! ```
//! # #[cfg(feature = "sample-data")]
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use sitescout::{BoundingRegion, Category, SampleConfig, SuggestionRanker, sample_store};
//!
//! let store = sample_store(&SampleConfig::default())?;
//! let viewport = BoundingRegion::from_bounds(25.60, -100.40, 25.70, -100.20)?;
//! let outcome = SuggestionRanker::default().suggest(&store, viewport, Category::Retail);
//! assert!(outcome.len() <= 5);
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "sample-data"))]
//! # fn main() {}
//! ```

#![forbid(unsafe_code)]

pub use sitescout_core::{
    BoundingRegion, BusinessItem, BusinessStore, CandidateLocation, Category, CategoryFilter,
    DEFAULT_GRID_SIZE, DEFAULT_TOP_K, EARTH_RADIUS_KM, GridSearch, LocationScorer, MemoryStore,
    NO_COMPETITION_SCORE, OpportunityScorer, Rationale, RegionError, RegionSnapshot,
    SavedLocation, SavedLocations, ScoreBreakdown, ScoreWeights, SuggestionRanker, Suggestions,
    UnknownCategory, distance_km, heatmap_points,
};

#[cfg(feature = "sample-data")]
pub use sitescout_data::{
    City, DEFAULT_SEED, SEED_CITIES, SampleConfig, SampleConfigError, generate_sample_businesses,
    sample_store,
};
