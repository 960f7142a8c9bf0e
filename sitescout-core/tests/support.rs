//! Shared fixtures for the core integration tests.

#![expect(
    dead_code,
    reason = "each test binary uses a different subset of the helpers"
)]

use geo::Coord;
use sitescout_core::{BoundingRegion, BusinessItem, Category};

/// Golden angle in radians; spreads spiral points evenly.
const GOLDEN_ANGLE: f64 = 2.399_963_229_728_653;

/// The Monterrey viewport used across scenarios.
pub fn monterrey_region() -> BoundingRegion {
    BoundingRegion::from_bounds(25.60, -100.40, 25.70, -100.20).expect("valid Monterrey region")
}

/// Build an unnamed business at `lat`, `lng`.
pub fn business(id: u64, lat: f64, lng: f64, category: Category) -> BusinessItem {
    BusinessItem::unnamed(id, Coord { x: lng, y: lat }, category)
}

/// Lay `count` businesses on a sunflower spiral of `radius_deg` around
/// `centre`. The first item sits exactly on `centre`.
#[expect(
    clippy::float_arithmetic,
    reason = "spiral layout needs trigonometry"
)]
pub fn spiral_cluster(
    centre: Coord<f64>,
    count: u32,
    radius_deg: f64,
    category: Category,
    first_id: u64,
) -> Vec<BusinessItem> {
    (0..count)
        .map(|k| {
            let fraction = f64::from(k) / f64::from(count);
            let radius = radius_deg * fraction.sqrt();
            let theta = f64::from(k) * GOLDEN_ANGLE;
            BusinessItem::new(
                first_id + u64::from(k),
                Coord {
                    x: centre.x + radius * theta.cos(),
                    y: centre.y + radius * theta.sin(),
                },
                category,
                format!("{category} {k}"),
                format!("Category: {category}"),
            )
        })
        .collect()
}
