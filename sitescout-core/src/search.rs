//! Exhaustive lattice search for candidate sites inside a region.

use geo::Coord;
use log::{debug, warn};

use crate::{BoundingRegion, BusinessItem, CandidateLocation, LocationScorer};

/// Number of lattice steps per axis used by [`GridSearch::default`].
pub const DEFAULT_GRID_SIZE: u16 = 15;

/// Enumerates and scores a regular lattice of points inside a region.
///
/// A grid size of `n` yields `(n + 1) * (n + 1)` points because both edges
/// of the region are included. A grid size of zero yields the single
/// south-west corner.
///
/// # Examples
/// ```
/// use sitescout_core::{BoundingRegion, GridSearch};
///
/// # fn main() -> Result<(), sitescout_core::RegionError> {
/// let region = BoundingRegion::from_bounds(0.0, 0.0, 1.0, 1.0)?;
/// assert_eq!(GridSearch::default().lattice(&region).count(), 256);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSearch {
    grid_size: u16,
}

impl Default for GridSearch {
    fn default() -> Self {
        Self::new(DEFAULT_GRID_SIZE)
    }
}

impl GridSearch {
    /// Construct a search with `grid_size` steps per axis.
    #[must_use]
    pub const fn new(grid_size: u16) -> Self {
        Self { grid_size }
    }

    /// Steps per axis.
    #[must_use]
    pub const fn grid_size(&self) -> u16 {
        self.grid_size
    }

    /// Yield lattice points row by row, starting at the south-west corner
    /// and walking east along each row of latitude.
    #[expect(
        clippy::float_arithmetic,
        reason = "lattice points are offsets from the south-west corner"
    )]
    pub fn lattice(&self, region: &BoundingRegion) -> impl Iterator<Item = Coord<f64>> + use<> {
        let steps = self.grid_size;
        let origin = region.south_west();
        let (lat_step, lng_step) = if steps == 0 {
            (0.0, 0.0)
        } else {
            let divisor = f64::from(steps);
            (region.lat_span() / divisor, region.lng_span() / divisor)
        };

        (0..=steps).flat_map(move |i| {
            (0..=steps).map(move |j| Coord {
                x: origin.x + lng_step * f64::from(j),
                y: origin.y + lat_step * f64::from(i),
            })
        })
    }

    /// Score every lattice point and return those scoring above zero,
    /// ranked by descending score.
    ///
    /// Equal scores keep lattice order. Returns an empty list when
    /// `all_businesses` is empty.
    #[must_use]
    pub fn search<S>(
        &self,
        region: &BoundingRegion,
        same_category: &[BusinessItem],
        all_businesses: &[BusinessItem],
        scorer: &S,
    ) -> Vec<CandidateLocation>
    where
        S: LocationScorer + ?Sized,
    {
        if all_businesses.is_empty() {
            debug!("grid search skipped: no businesses in region");
            return Vec::new();
        }
        if self.grid_size == 0 || region.lat_span() <= 0.0 || region.lng_span() <= 0.0 {
            warn!("degenerate lattice: grid size {} over {region:?}", self.grid_size);
        }

        let mut candidates: Vec<CandidateLocation> = self
            .lattice(region)
            .filter_map(|point| {
                let score = scorer.score(point, same_category, all_businesses);
                (score > 0.0).then(|| CandidateLocation::new(point, score))
            })
            .collect();
        // `sort_by` is stable, so ties stay in lattice order.
        candidates.sort_by(|a, b| b.score.total_cmp(&a.score));

        debug!(
            "grid search kept {} candidates from a {}x{} lattice against {} competitors and {} businesses",
            candidates.len(),
            u32::from(self.grid_size) + 1,
            u32::from(self.grid_size) + 1,
            same_category.len(),
            all_businesses.len(),
        );
        candidates
    }
}
