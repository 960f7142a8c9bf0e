//! Shortlisted locations a user chose to keep.

use geo::Coord;
#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{CandidateLocation, Category};

/// A suggestion the user saved for later review.
///
/// Timestamps are supplied by the caller in milliseconds since the Unix
/// epoch, which keeps this crate free of clock access.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct SavedLocation {
    /// Saved position (`x = longitude`, `y = latitude`).
    pub location: Coord<f64>,
    /// User-facing title.
    pub title: String,
    /// Summary shown under the title.
    pub description: String,
    /// Category the location was scored for.
    pub category: Category,
    /// Score at the time of saving.
    pub score: f64,
    /// When the location was saved, in Unix milliseconds.
    pub saved_at_ms: u64,
}

impl SavedLocation {
    /// Save `candidate` under `title`.
    ///
    /// The description records the score to one decimal place.
    ///
    /// # Examples
    /// ```
    /// use geo::Coord;
    /// use sitescout_core::{CandidateLocation, Category, SavedLocation};
    ///
    /// let candidate = CandidateLocation::new(Coord { x: 2.35, y: 48.85 }, 64.27);
    /// let saved = SavedLocation::from_candidate(&candidate, "Rue de Rivoli", Category::Retail, 0);
    /// assert_eq!(saved.description, "Score: 64.3");
    /// ```
    #[must_use]
    pub fn from_candidate(
        candidate: &CandidateLocation,
        title: impl Into<String>,
        category: Category,
        saved_at_ms: u64,
    ) -> Self {
        Self {
            location: candidate.location,
            title: title.into(),
            description: format!("Score: {:.1}", candidate.display_score()),
            category,
            score: candidate.score,
            saved_at_ms,
        }
    }
}

/// Append-only list of saved locations, oldest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SavedLocations {
    items: Vec<SavedLocation>,
}

impl SavedLocations {
    /// Create an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Append a saved location.
    pub fn save(&mut self, location: SavedLocation) {
        self.items.push(location);
    }

    /// Number of saved locations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Report whether nothing has been saved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate in the order locations were saved.
    pub fn iter(&self) -> std::slice::Iter<'_, SavedLocation> {
        self.items.iter()
    }

    /// The location saved last.
    #[must_use]
    pub fn latest(&self) -> Option<&SavedLocation> {
        self.items.last()
    }

    /// Saved locations scored for `category`, in save order.
    pub fn for_category(&self, category: Category) -> impl Iterator<Item = &SavedLocation> {
        self.items
            .iter()
            .filter(move |saved| saved.category == category)
    }
}

impl<'a> IntoIterator for &'a SavedLocations {
    type Item = &'a SavedLocation;
    type IntoIter = std::slice::Iter<'a, SavedLocation>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
