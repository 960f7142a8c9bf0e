//! Human-readable explanations attached to suggested locations.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Why a candidate location was suggested.
///
/// Grid candidates are banded by score with [`Rationale::for_score`]; the
/// zero-competitor suggestion always carries [`Rationale::NoCompetition`].
///
/// # Examples
/// ```
/// use sitescout_core::Rationale;
///
/// assert_eq!(Rationale::for_score(75.0), Rationale::Excellent);
/// assert_eq!(Rationale::for_score(50.0), Rationale::Acceptable);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Rationale {
    /// Score above 70.
    Excellent,
    /// Score above 50, up to 70.
    Good,
    /// Score above 30, up to 50.
    Acceptable,
    /// Score of 30 or less.
    GrowthOpportunity,
    /// No same-category business is visible at all.
    NoCompetition,
}

impl Rationale {
    /// Band a grid score. Every threshold is a strict `>` comparison.
    #[must_use]
    pub fn for_score(score: f64) -> Self {
        if score > 70.0 {
            Self::Excellent
        } else if score > 50.0 {
            Self::Good
        } else if score > 30.0 {
            Self::Acceptable
        } else {
            Self::GrowthOpportunity
        }
    }

    /// Display text for the rationale.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Excellent => "excellent: low competition, high commercial activity",
            Self::Good => "good: balance between competition and traffic",
            Self::Acceptable => "acceptable: emerging zone with potential",
            Self::GrowthOpportunity => "growth-opportunity zone",
            Self::NoCompetition => "no competition in this area",
        }
    }
}

impl fmt::Display for Rationale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
