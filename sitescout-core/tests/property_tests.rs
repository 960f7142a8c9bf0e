//! Property-based tests for distance, scoring and grid search.
//!
//! # Invariants tested
//!
//! - **Distance identity:** a point is zero kilometres from itself.
//! - **Distance symmetry:** swapping arguments does not change the distance.
//! - **Score validity:** scores are finite and never negative.
//! - **Crowding:** adding a competitor never raises a score.
//! - **Search output:** candidates score above zero and arrive sorted.

#![expect(
    clippy::float_arithmetic,
    clippy::expect_used,
    reason = "property assertions compare floating point values and fail fast on setup"
)]

use geo::Coord;
use proptest::prelude::*;
use sitescout_core::{
    BoundingRegion, BusinessItem, Category, GridSearch, LocationScorer, OpportunityScorer,
    distance_km,
};

const TOLERANCE: f64 = 1e-9;

/// Any coordinate away from the poles and the antimeridian.
fn world_coord() -> impl Strategy<Value = Coord<f64>> {
    (-85.0..85.0_f64, -179.0..179.0_f64).prop_map(|(lat, lng)| Coord { x: lng, y: lat })
}

/// A coordinate inside the 0.1° square north-east of the origin.
fn local_coord() -> impl Strategy<Value = Coord<f64>> {
    (0.0..0.1_f64, 0.0..0.1_f64).prop_map(|(lat, lng)| Coord { x: lng, y: lat })
}

fn category() -> impl Strategy<Value = Category> {
    prop::sample::select(Category::ALL.to_vec())
}

fn local_businesses(max: usize) -> impl Strategy<Value = Vec<BusinessItem>> {
    prop::collection::vec((local_coord(), category()), 0..max).prop_map(|entries| {
        entries
            .into_iter()
            .zip(1_u64..)
            .map(|((location, category), id)| BusinessItem::unnamed(id, location, category))
            .collect()
    })
}

fn competitors_of(items: &[BusinessItem], category: Category) -> Vec<BusinessItem> {
    items
        .iter()
        .filter(|item| item.category == category)
        .cloned()
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn distance_to_self_is_zero(point in world_coord()) {
        prop_assert_eq!(distance_km(point, point), 0.0);
    }

    #[test]
    fn distance_is_symmetric(a in world_coord(), b in world_coord()) {
        let forward = distance_km(a, b);
        let backward = distance_km(b, a);
        prop_assert!(forward >= 0.0);
        prop_assert!((forward - backward).abs() <= TOLERANCE);
    }

    #[test]
    fn scores_are_finite_and_non_negative(
        candidate in local_coord(),
        businesses in local_businesses(40),
        sited in category(),
    ) {
        let competitors = competitors_of(&businesses, sited);
        let score = OpportunityScorer::default().score(candidate, &competitors, &businesses);
        prop_assert!(score.is_finite());
        prop_assert!(score >= 0.0);
    }

    #[test]
    fn extra_competitor_never_raises_score(
        candidate in local_coord(),
        businesses in local_businesses(40),
        rival in local_coord(),
    ) {
        let scorer = OpportunityScorer::default();
        let mut competitors = competitors_of(&businesses, Category::Restaurant);
        let before = scorer.score(candidate, &competitors, &businesses);
        competitors.push(BusinessItem::unnamed(0, rival, Category::Restaurant));
        let after = scorer.score(candidate, &competitors, &businesses);
        prop_assert!(after <= before + TOLERANCE, "before {before}, after {after}");
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn search_returns_positive_scores_in_descending_order(
        businesses in local_businesses(30),
        sited in category(),
        grid_size in 0_u16..20,
    ) {
        let region = BoundingRegion::from_bounds(0.0, 0.0, 0.1, 0.1).expect("valid region");
        let competitors = competitors_of(&businesses, sited);
        let found = GridSearch::new(grid_size).search(
            &region,
            &competitors,
            &businesses,
            &OpportunityScorer::default(),
        );

        let lattice_points = (usize::from(grid_size) + 1).pow(2);
        prop_assert!(found.len() <= lattice_points);
        if businesses.is_empty() {
            prop_assert!(found.is_empty());
        }
        prop_assert!(found.iter().all(|candidate| candidate.score > 0.0));
        let descending = found.windows(2).all(|pair| match pair {
            [a, b] => a.score >= b.score,
            _ => true,
        });
        prop_assert!(descending, "scores out of order: {found:?}");
    }
}
