//! Score candidate sites against the surrounding businesses.
//!
//! The [`LocationScorer`] trait assigns an opportunity score to a candidate
//! point given the visible competitors and the visible businesses of every
//! category. [`OpportunityScorer`] is the production implementation: it
//! rewards distance from competitors while still rewarding proximity to
//! general commercial activity, so an empty desert scores poorly.

use geo::Coord;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{BusinessItem, distance_km};

/// Calculate an opportunity score for a candidate site.
///
/// Higher scores indicate a better site. Implementations must be
/// thread-safe (`Send` + `Sync`) so searches can run on worker threads.
/// The method is infallible and must:
/// - Produce finite scores.
/// - Return non-negative values.
///
/// Use [`LocationScorer::sanitise`] to apply these guards.
///
/// # Examples
///
/// ```rust
/// use geo::Coord;
/// use sitescout_core::{BusinessItem, LocationScorer};
///
/// struct FlatScorer;
///
/// impl LocationScorer for FlatScorer {
///     fn score(
///         &self,
///         _candidate: Coord<f64>,
///         _same_category: &[BusinessItem],
///         _all_businesses: &[BusinessItem],
///     ) -> f64 {
///         1.0
///     }
/// }
///
/// assert_eq!(FlatScorer.score(Coord { x: 0.0, y: 0.0 }, &[], &[]), 1.0);
/// ```
pub trait LocationScorer: Send + Sync {
    /// Return a score for `candidate` given competitors and all businesses.
    fn score(
        &self,
        candidate: Coord<f64>,
        same_category: &[BusinessItem],
        all_businesses: &[BusinessItem],
    ) -> f64;

    /// Clamp and validate a raw score.
    ///
    /// Returns `0.0` for non-finite and negative values.
    #[must_use]
    fn sanitise(score: f64) -> f64
    where
        Self: Sized,
    {
        if !score.is_finite() {
            return 0.0;
        }
        score.max(0.0)
    }
}

/// Tunable constants for [`OpportunityScorer`].
///
/// Distances are in kilometres.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScoreWeights {
    /// Isolation bonus earned per kilometre to the nearest competitor.
    pub isolation_per_km: f64,
    /// Upper bound on the isolation bonus.
    pub isolation_cap: f64,
    /// Activity bonus for a site sitting on top of another business.
    pub activity_base: f64,
    /// Activity bonus lost per kilometre to the nearest business.
    pub activity_decay_per_km: f64,
    /// Radius within which businesses count towards density.
    pub density_radius_km: f64,
    /// Density bonus per business inside `density_radius_km`.
    pub density_per_business: f64,
    /// Upper bound on the density bonus.
    pub density_cap: f64,
    /// Radius within which competitors crowd a site.
    pub crowding_radius_km: f64,
    /// Penalty per competitor inside `crowding_radius_km`.
    pub crowding_penalty: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            isolation_per_km: 10.0,
            isolation_cap: 50.0,
            activity_base: 30.0,
            activity_decay_per_km: 5.0,
            density_radius_km: 2.0,
            density_per_business: 2.0,
            density_cap: 20.0,
            crowding_radius_km: 1.0,
            crowding_penalty: 10.0,
        }
    }
}

/// The individual signals behind an opportunity score.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ScoreBreakdown {
    /// Reward for distance from the nearest competitor.
    pub isolation: f64,
    /// Reward for proximity to any business.
    pub activity: f64,
    /// Reward for the number of nearby businesses.
    pub density: f64,
    /// Deduction for competitors crowding the site.
    pub crowding: f64,
}

impl ScoreBreakdown {
    /// Sum the bonuses, subtract the penalty and clamp at zero.
    #[must_use]
    #[expect(clippy::float_arithmetic, reason = "combining weighted signals")]
    pub fn total(&self) -> f64 {
        (self.isolation + self.activity + self.density - self.crowding).max(0.0)
    }
}

/// Scores sites by balancing competitor isolation against ambient activity.
///
/// With the default weights the score is
/// `min(10 * nearest_competitor_km, 50) + max(30 - 5 * nearest_business_km, 0)
/// + min(2 * businesses_within_2km, 20) - 10 * competitors_within_1km`,
/// clamped at zero. With no competitors the isolation term saturates at its
/// cap; with no businesses the activity term is zero.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use sitescout_core::{BusinessItem, Category, LocationScorer, OpportunityScorer};
///
/// let site = Coord { x: 0.0, y: 0.0 };
/// let shop = BusinessItem::unnamed(1, site, Category::Retail);
/// let scorer = OpportunityScorer::default();
///
/// // No competitors (50), on top of a business (30), one neighbour (2).
/// assert_eq!(scorer.score(site, &[], &[shop]), 82.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OpportunityScorer {
    weights: ScoreWeights,
}

impl OpportunityScorer {
    /// Construct a scorer with custom weights.
    #[must_use]
    pub const fn new(weights: ScoreWeights) -> Self {
        Self { weights }
    }

    /// Weights in use.
    #[must_use]
    pub const fn weights(&self) -> &ScoreWeights {
        &self.weights
    }

    /// Compute each signal for `candidate` without combining them.
    #[must_use]
    #[expect(clippy::float_arithmetic, reason = "signals are weighted distances")]
    pub fn breakdown(
        &self,
        candidate: Coord<f64>,
        same_category: &[BusinessItem],
        all_businesses: &[BusinessItem],
    ) -> ScoreBreakdown {
        let w = &self.weights;
        let nearest_competitor = nearest_km(candidate, same_category);
        let nearest_business = nearest_km(candidate, all_businesses);

        ScoreBreakdown {
            isolation: (nearest_competitor * w.isolation_per_km).min(w.isolation_cap),
            activity: (w.activity_base - nearest_business * w.activity_decay_per_km).max(0.0),
            density: (count_within(candidate, all_businesses, w.density_radius_km)
                * w.density_per_business)
                .min(w.density_cap),
            crowding: count_within(candidate, same_category, w.crowding_radius_km)
                * w.crowding_penalty,
        }
    }
}

impl LocationScorer for OpportunityScorer {
    fn score(
        &self,
        candidate: Coord<f64>,
        same_category: &[BusinessItem],
        all_businesses: &[BusinessItem],
    ) -> f64 {
        let breakdown = self.breakdown(candidate, same_category, all_businesses);
        Self::sanitise(breakdown.total())
    }
}

/// Distance to the closest item, or infinity when `items` is empty.
fn nearest_km(candidate: Coord<f64>, items: &[BusinessItem]) -> f64 {
    items
        .iter()
        .map(|item| distance_km(candidate, item.location))
        .fold(f64::INFINITY, f64::min)
}

/// Number of items strictly closer than `radius_km`.
#[expect(
    clippy::cast_precision_loss,
    reason = "visible business counts are far below f64's exact integer range"
)]
fn count_within(candidate: Coord<f64>, items: &[BusinessItem], radius_km: f64) -> f64 {
    items
        .iter()
        .filter(|item| distance_km(candidate, item.location) < radius_km)
        .count() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Category;
    use rstest::{fixture, rstest};

    fn item(id: u64, lat: f64, lng: f64, category: Category) -> BusinessItem {
        BusinessItem::unnamed(id, Coord { x: lng, y: lat }, category)
    }

    #[fixture]
    fn scorer() -> OpportunityScorer {
        OpportunityScorer::default()
    }

    #[rstest]
    fn empty_collections_saturate_isolation_only(scorer: OpportunityScorer) {
        let breakdown = scorer.breakdown(Coord { x: 0.0, y: 0.0 }, &[], &[]);
        assert_eq!(
            breakdown,
            ScoreBreakdown {
                isolation: 50.0,
                activity: 0.0,
                density: 0.0,
                crowding: 0.0,
            }
        );
    }

    #[rstest]
    fn crowding_can_drive_total_to_zero(scorer: OpportunityScorer) {
        let competitors: Vec<_> = (0..10)
            .map(|id| item(id, 0.0, 0.0, Category::Restaurant))
            .collect();
        let site = Coord { x: 0.0, y: 0.0 };
        let breakdown = scorer.breakdown(site, &competitors, &competitors);
        assert_eq!(breakdown.crowding, 100.0);
        assert_eq!(scorer.score(site, &competitors, &competitors), 0.0);
    }

    #[rstest]
    fn density_bonus_is_capped(scorer: OpportunityScorer) {
        let shops: Vec<_> = (0..25)
            .map(|id| item(id, 0.0, 0.0, Category::Retail))
            .collect();
        let breakdown = scorer.breakdown(Coord { x: 0.0, y: 0.0 }, &[], &shops);
        assert_eq!(breakdown.density, 20.0);
    }

    #[rstest]
    fn activity_decays_to_zero_past_six_kilometres(scorer: OpportunityScorer) {
        // 0.1 degrees of latitude is roughly 11 km.
        let far = [item(1, 0.1, 0.0, Category::Retail)];
        let breakdown = scorer.breakdown(Coord { x: 0.0, y: 0.0 }, &[], &far);
        assert_eq!(breakdown.activity, 0.0);
        assert_eq!(breakdown.density, 0.0);
    }

    #[rstest]
    #[case(f64::NAN, 0.0)]
    #[case(f64::INFINITY, 0.0)]
    #[case(-3.0, 0.0)]
    #[case(42.5, 42.5)]
    fn sanitise_clamps_and_filters(#[case] input: f64, #[case] expected: f64) {
        assert_eq!(OpportunityScorer::sanitise(input), expected);
    }

    #[rstest]
    fn custom_weights_are_applied() {
        let scorer = OpportunityScorer::new(ScoreWeights {
            isolation_cap: 5.0,
            ..ScoreWeights::default()
        });
        let breakdown = scorer.breakdown(Coord { x: 0.0, y: 0.0 }, &[], &[]);
        assert_eq!(breakdown.isolation, 5.0);
    }
}
