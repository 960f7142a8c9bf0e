//! Axis-aligned latitude/longitude rectangles supplied by a map viewport.

use geo::{Coord, Intersects, Rect};
#[cfg(feature = "serde")]
use serde::Serialize;
use thiserror::Error;

/// A viewport rectangle described by its south-west and north-east corners.
///
/// Coordinates are WGS84 degrees with `x = longitude` and `y = latitude`.
/// Regions crossing the antimeridian are not modelled; callers that need one
/// must split it into two regions.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use sitescout_core::BoundingRegion;
///
/// # fn main() -> Result<(), sitescout_core::RegionError> {
/// let region = BoundingRegion::from_bounds(25.60, -100.40, 25.70, -100.20)?;
/// assert!(region.contains(Coord { x: -100.30, y: 25.65 }));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct BoundingRegion {
    south_west: Coord<f64>,
    north_east: Coord<f64>,
}

/// Errors returned when constructing a [`BoundingRegion`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RegionError {
    /// A corner coordinate was NaN or infinite.
    #[error("region corners must be finite coordinates")]
    NonFinite,
    /// The south-west corner lies north or east of the north-east corner.
    #[error(
        "south-west corner ({south}, {west}) lies north or east of north-east corner ({north}, {east})"
    )]
    Inverted {
        /// Southern latitude as supplied.
        south: f64,
        /// Western longitude as supplied.
        west: f64,
        /// Northern latitude as supplied.
        north: f64,
        /// Eastern longitude as supplied.
        east: f64,
    },
}

impl BoundingRegion {
    /// Validate and construct a region from its corners.
    ///
    /// # Errors
    /// Returns [`RegionError::NonFinite`] for NaN or infinite coordinates and
    /// [`RegionError::Inverted`] when the south-west corner is north or east
    /// of the north-east corner. Degenerate regions with zero height or width
    /// are accepted.
    pub fn new(south_west: Coord<f64>, north_east: Coord<f64>) -> Result<Self, RegionError> {
        let corners = [south_west.x, south_west.y, north_east.x, north_east.y];
        if corners.iter().any(|value| !value.is_finite()) {
            return Err(RegionError::NonFinite);
        }
        if south_west.y > north_east.y || south_west.x > north_east.x {
            return Err(RegionError::Inverted {
                south: south_west.y,
                west: south_west.x,
                north: north_east.y,
                east: north_east.x,
            });
        }
        Ok(Self {
            south_west,
            north_east,
        })
    }

    /// Construct a region from latitude and longitude bounds.
    ///
    /// # Errors
    /// Fails under the same conditions as [`BoundingRegion::new`].
    pub fn from_bounds(south: f64, west: f64, north: f64, east: f64) -> Result<Self, RegionError> {
        Self::new(Coord { x: west, y: south }, Coord { x: east, y: north })
    }

    /// South-west corner.
    #[must_use]
    pub const fn south_west(&self) -> Coord<f64> {
        self.south_west
    }

    /// North-east corner.
    #[must_use]
    pub const fn north_east(&self) -> Coord<f64> {
        self.north_east
    }

    /// Latitude extent in degrees.
    #[must_use]
    #[expect(clippy::float_arithmetic, reason = "span is a coordinate difference")]
    pub fn lat_span(&self) -> f64 {
        self.north_east.y - self.south_west.y
    }

    /// Longitude extent in degrees.
    #[must_use]
    #[expect(clippy::float_arithmetic, reason = "span is a coordinate difference")]
    pub fn lng_span(&self) -> f64 {
        self.north_east.x - self.south_west.x
    }

    /// Midpoint of the two corners in degree space.
    #[must_use]
    #[expect(clippy::float_arithmetic, reason = "centroid averages the corners")]
    pub fn centroid(&self) -> Coord<f64> {
        Coord {
            x: (self.north_east.x + self.south_west.x) / 2.0,
            y: (self.north_east.y + self.south_west.y) / 2.0,
        }
    }

    /// Report whether `point` lies inside the region, boundaries included.
    #[must_use]
    pub fn contains(&self, point: Coord<f64>) -> bool {
        // `Intersects` treats boundary points as inside the rectangle.
        self.as_rect().intersects(&point)
    }

    /// The region as a `geo` rectangle.
    #[must_use]
    pub fn as_rect(&self) -> Rect<f64> {
        Rect::new(self.south_west, self.north_east)
    }
}

impl TryFrom<Rect<f64>> for BoundingRegion {
    type Error = RegionError;

    fn try_from(rect: Rect<f64>) -> Result<Self, Self::Error> {
        Self::new(rect.min(), rect.max())
    }
}
