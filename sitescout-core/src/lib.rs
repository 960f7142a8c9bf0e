//! Core domain types and scoring for the SiteScout placement engine.
//!
//! The crate answers one question: given the businesses visible in a map
//! viewport, where inside that viewport should a new business of a given
//! category open? It scores a regular lattice of candidate points against
//! competitor isolation and ambient commercial activity, then ranks the
//! survivors.
//!
//! Everything here is synchronous and pure. Callers hand in an immutable
//! snapshot of the business collection and receive a fresh result, so a
//! search can run on any thread without coordination.
//!
//! # Examples
//!
//! ```
//! use geo::Coord;
//! use sitescout_core::{
//!     BoundingRegion, BusinessItem, Category, MemoryStore, SuggestionRanker, Suggestions,
//! };
//!
//! # fn main() -> Result<(), sitescout_core::RegionError> {
//! let region = BoundingRegion::from_bounds(25.60, -100.40, 25.70, -100.20)?;
//! let store = MemoryStore::with_items([BusinessItem::unnamed(
//!     1,
//!     Coord { x: -100.30, y: 25.65 },
//!     Category::Retail,
//! )]);
//!
//! let ranker = SuggestionRanker::default();
//! let outcome = ranker.suggest(&store, region, Category::Restaurant);
//! assert!(matches!(outcome, Suggestions::NoCompetition(_)));
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod business;
pub mod candidate;
pub mod category;
pub mod distance;
pub mod heatmap;
pub mod ranker;
pub mod rationale;
pub mod region;
pub mod saved;
pub mod scorer;
pub mod search;
pub mod snapshot;
pub mod store;

pub use business::BusinessItem;
pub use candidate::CandidateLocation;
pub use category::{Category, CategoryFilter, UnknownCategory};
pub use distance::{EARTH_RADIUS_KM, distance_km};
pub use heatmap::heatmap_points;
pub use ranker::{DEFAULT_TOP_K, NO_COMPETITION_SCORE, SuggestionRanker, Suggestions};
pub use rationale::Rationale;
pub use region::{BoundingRegion, RegionError};
pub use saved::{SavedLocation, SavedLocations};
pub use scorer::{LocationScorer, OpportunityScorer, ScoreBreakdown, ScoreWeights};
pub use search::{DEFAULT_GRID_SIZE, GridSearch};
pub use snapshot::RegionSnapshot;
pub use store::{BusinessStore, MemoryStore};
