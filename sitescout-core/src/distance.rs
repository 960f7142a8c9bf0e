//! Great-circle distance between WGS84 coordinates.

use geo::Coord;

/// Earth radius used by [`distance_km`], in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Return the haversine distance between `a` and `b` in kilometres.
///
/// Coordinates are WGS84 degrees with `x = longitude` and `y = latitude`.
/// Inputs are not range-checked; the function is total over valid
/// coordinates and returns `0.0` when `a == b`.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use sitescout_core::distance_km;
///
/// let origin = Coord { x: 0.0, y: 0.0 };
/// let one_degree_north = Coord { x: 0.0, y: 1.0 };
///
/// assert_eq!(distance_km(origin, origin), 0.0);
/// assert!((distance_km(origin, one_degree_north) - 111.19).abs() < 0.01);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "the haversine formula is floating-point trigonometry"
)]
pub fn distance_km(a: Coord<f64>, b: Coord<f64>) -> f64 {
    let d_lat = (b.y - a.y).to_radians();
    let d_lng = (b.x - a.x).to_radians();
    let raw = (d_lat / 2.0).sin().powi(2)
        + a.y.to_radians().cos() * b.y.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    // Rounding can push antipodal inputs fractionally past 1.0.
    let h = raw.clamp(0.0, 1.0);
    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}
