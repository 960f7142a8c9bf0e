//! Scored candidate sites produced by a search.

use geo::Coord;
#[cfg(feature = "serde")]
use serde::Serialize;

use crate::Rationale;

/// A scored point proposed as a site for a new business.
///
/// Candidates are created fresh by every search and carry no identity beyond
/// their coordinates.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use sitescout_core::{CandidateLocation, Rationale};
///
/// let candidate = CandidateLocation::new(Coord { x: 0.0, y: 0.0 }, 63.456);
/// assert_eq!(candidate.rationale, Rationale::Good);
/// assert_eq!(candidate.display_score(), 63.5);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct CandidateLocation {
    /// Position of the candidate (`x = longitude`, `y = latitude`).
    pub location: Coord<f64>,
    /// Opportunity score, never negative.
    pub score: f64,
    /// Explanation shown alongside the score.
    pub rationale: Rationale,
}

impl CandidateLocation {
    /// Construct a candidate whose rationale is banded from `score`.
    #[must_use]
    pub fn new(location: Coord<f64>, score: f64) -> Self {
        Self {
            location,
            score,
            rationale: Rationale::for_score(score),
        }
    }

    /// Construct a candidate with an explicit rationale.
    #[must_use]
    pub const fn with_rationale(location: Coord<f64>, score: f64, rationale: Rationale) -> Self {
        Self {
            location,
            score,
            rationale,
        }
    }

    /// Latitude in degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.location.y
    }

    /// Longitude in degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.location.x
    }

    /// Score rounded to one decimal place for display.
    #[must_use]
    #[expect(clippy::float_arithmetic, reason = "rounding to one decimal place")]
    pub fn display_score(&self) -> f64 {
        (self.score * 10.0).round() / 10.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(100.0, 100.0)]
    #[case(42.04, 42.0)]
    #[case(42.06, 42.1)]
    #[case(0.0, 0.0)]
    #[expect(clippy::float_arithmetic, reason = "tolerance checks need float maths")]
    fn display_score_rounds_to_one_decimal(#[case] score: f64, #[case] expected: f64) {
        let candidate = CandidateLocation::new(Coord { x: 0.0, y: 0.0 }, score);
        assert!((candidate.display_score() - expected).abs() < 1e-9);
    }
}
