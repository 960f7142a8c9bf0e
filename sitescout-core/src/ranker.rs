//! Turn grid search output into the suggestions shown to a user.
//!
//! The ranker distinguishes three outcomes so the caller can render the
//! right empty state: nothing to analyse, an uncontested area, or a ranked
//! shortlist.

use log::info;

use crate::{
    BoundingRegion, BusinessItem, BusinessStore, CandidateLocation, Category, GridSearch,
    LocationScorer, OpportunityScorer, Rationale, RegionSnapshot,
};

/// Length of the shortlist returned by [`SuggestionRanker::default`].
pub const DEFAULT_TOP_K: usize = 5;

/// Score given to the single suggestion in an uncontested area.
pub const NO_COMPETITION_SCORE: f64 = 100.0;

/// Result of ranking a region for a category.
#[derive(Debug, Clone, PartialEq)]
pub enum Suggestions {
    /// The region holds no businesses, so nothing can be scored.
    NoBusinesses,
    /// The region holds businesses but no competitors; the region centroid
    /// is suggested outright.
    NoCompetition(CandidateLocation),
    /// Best grid candidates, highest score first. Empty when no grid point
    /// scored above zero.
    Ranked(Vec<CandidateLocation>),
}

impl Suggestions {
    /// Suggested locations, best first.
    #[must_use]
    pub fn candidates(&self) -> &[CandidateLocation] {
        match self {
            Self::NoBusinesses => &[],
            Self::NoCompetition(candidate) => std::slice::from_ref(candidate),
            Self::Ranked(candidates) => candidates,
        }
    }

    /// Consume the outcome and return its locations, best first.
    #[must_use]
    pub fn into_candidates(self) -> Vec<CandidateLocation> {
        match self {
            Self::NoBusinesses => Vec::new(),
            Self::NoCompetition(candidate) => vec![candidate],
            Self::Ranked(candidates) => candidates,
        }
    }

    /// Best suggestion, if any.
    #[must_use]
    pub fn best(&self) -> Option<&CandidateLocation> {
        self.candidates().first()
    }

    /// Number of suggested locations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.candidates().len()
    }

    /// Report whether no location is suggested.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candidates().is_empty()
    }
}

/// Ranks candidate sites for a new business inside a region.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use sitescout_core::{BoundingRegion, BusinessItem, Category, SuggestionRanker, Suggestions};
///
/// # fn main() -> Result<(), sitescout_core::RegionError> {
/// let region = BoundingRegion::from_bounds(0.0, 0.0, 0.1, 0.1)?;
/// let cafe = BusinessItem::unnamed(1, Coord { x: 0.05, y: 0.05 }, Category::Restaurant);
/// let all = [cafe.clone()];
///
/// let outcome = SuggestionRanker::default().rank(&region, &[cafe], &all);
/// assert!(matches!(outcome, Suggestions::Ranked(ref list) if list.len() == 5));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SuggestionRanker<S = OpportunityScorer> {
    scorer: S,
    search: GridSearch,
    top_k: usize,
}

impl Default for SuggestionRanker {
    fn default() -> Self {
        Self::new(OpportunityScorer::default(), GridSearch::default(), DEFAULT_TOP_K)
    }
}

impl<S: LocationScorer> SuggestionRanker<S> {
    /// Construct a ranker from its parts.
    #[must_use]
    pub const fn new(scorer: S, search: GridSearch, top_k: usize) -> Self {
        Self {
            scorer,
            search,
            top_k,
        }
    }

    /// Replace the shortlist length.
    #[must_use]
    pub fn with_top_k(self, top_k: usize) -> Self {
        Self { top_k, ..self }
    }

    /// Replace the lattice resolution.
    #[must_use]
    pub fn with_search(self, search: GridSearch) -> Self {
        Self { search, ..self }
    }

    /// Shortlist length.
    #[must_use]
    pub const fn top_k(&self) -> usize {
        self.top_k
    }

    /// Scorer in use.
    #[must_use]
    pub const fn scorer(&self) -> &S {
        &self.scorer
    }

    /// Rank `region` given the visible competitors and visible businesses.
    ///
    /// Returns [`Suggestions::NoBusinesses`] when `all_businesses` is empty,
    /// [`Suggestions::NoCompetition`] at the region centroid when
    /// `same_category` is empty, and otherwise the first `top_k` grid
    /// candidates.
    #[must_use]
    pub fn rank(
        &self,
        region: &BoundingRegion,
        same_category: &[BusinessItem],
        all_businesses: &[BusinessItem],
    ) -> Suggestions {
        if all_businesses.is_empty() {
            info!("no businesses in region; nothing to rank");
            return Suggestions::NoBusinesses;
        }
        if same_category.is_empty() {
            info!("no competitors in region; suggesting the centroid");
            return Suggestions::NoCompetition(CandidateLocation::with_rationale(
                region.centroid(),
                NO_COMPETITION_SCORE,
                Rationale::NoCompetition,
            ));
        }

        let mut ranked = self
            .search
            .search(region, same_category, all_businesses, &self.scorer);
        let found = ranked.len();
        ranked.truncate(self.top_k);
        info!(
            "ranked {found} viable locations; returning {}",
            ranked.len()
        );
        Suggestions::Ranked(ranked)
    }

    /// Rank the region and category captured in `snapshot`.
    #[must_use]
    pub fn rank_snapshot(&self, snapshot: &RegionSnapshot) -> Suggestions {
        self.rank(
            snapshot.region(),
            snapshot.competitors(),
            snapshot.businesses(),
        )
    }

    /// Capture `region` from `store` and rank it for `category`.
    #[must_use]
    pub fn suggest<St>(&self, store: &St, region: BoundingRegion, category: Category) -> Suggestions
    where
        St: BusinessStore + ?Sized,
    {
        let snapshot = RegionSnapshot::capture(store, region, category);
        self.rank_snapshot(&snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::Coord;
    use rstest::{fixture, rstest};

    #[fixture]
    fn region() -> BoundingRegion {
        BoundingRegion::from_bounds(10.0, 20.0, 10.2, 20.4).expect("valid region")
    }

    fn item(id: u64, lat: f64, lng: f64, category: Category) -> BusinessItem {
        BusinessItem::unnamed(id, Coord { x: lng, y: lat }, category)
    }

    #[rstest]
    fn empty_region_has_no_suggestions(region: BoundingRegion) {
        let outcome = SuggestionRanker::default().rank(&region, &[], &[]);
        assert_eq!(outcome, Suggestions::NoBusinesses);
        assert!(outcome.is_empty());
    }

    #[rstest]
    #[expect(clippy::float_arithmetic, reason = "tolerance checks need float maths")]
    fn uncontested_region_suggests_centroid(region: BoundingRegion) {
        let shop = item(1, 10.05, 20.05, Category::Retail);
        let outcome = SuggestionRanker::default().rank(&region, &[], &[shop]);
        let Suggestions::NoCompetition(candidate) = outcome else {
            panic!("expected NoCompetition, found {outcome:?}");
        };
        assert_eq!(candidate.score, NO_COMPETITION_SCORE);
        assert_eq!(candidate.rationale, Rationale::NoCompetition);
        assert!((candidate.latitude() - 10.1).abs() < 1e-12);
        assert!((candidate.longitude() - 20.2).abs() < 1e-12);
    }

    #[rstest]
    #[case(1)]
    #[case(5)]
    #[case(1000)]
    fn ranked_output_respects_top_k(region: BoundingRegion, #[case] top_k: usize) {
        let cafe = item(1, 10.1, 20.2, Category::Restaurant);
        let all = [cafe.clone(), item(2, 10.1, 20.21, Category::Retail)];
        let outcome = SuggestionRanker::default()
            .with_top_k(top_k)
            .rank(&region, &[cafe], &all);
        assert!(matches!(outcome, Suggestions::Ranked(_)));
        assert!(outcome.len() <= top_k);
        assert!(!outcome.is_empty());
    }

    struct FlatScorer(f64);

    impl LocationScorer for FlatScorer {
        fn score(&self, _: Coord<f64>, _: &[BusinessItem], _: &[BusinessItem]) -> f64 {
            self.0
        }
    }

    #[rstest]
    fn contested_region_without_viable_sites_ranks_nothing(region: BoundingRegion) {
        let cafe = item(1, 10.1, 20.2, Category::Restaurant);
        let ranker = SuggestionRanker::new(FlatScorer(0.0), GridSearch::default(), DEFAULT_TOP_K);
        let outcome = ranker.rank(&region, std::slice::from_ref(&cafe), &[cafe.clone()]);
        assert_eq!(outcome, Suggestions::Ranked(Vec::new()));
        assert!(outcome.is_empty());
        assert!(outcome.best().is_none());
    }

    #[rstest]
    fn suggest_only_considers_businesses_in_region(region: BoundingRegion) {
        let store = crate::MemoryStore::with_items([
            item(1, 50.0, 50.0, Category::Restaurant),
            item(2, 10.1, 20.2, Category::Retail),
        ]);
        let outcome = SuggestionRanker::default().suggest(&store, region, Category::Restaurant);
        assert!(matches!(outcome, Suggestions::NoCompetition(_)));
    }
}
