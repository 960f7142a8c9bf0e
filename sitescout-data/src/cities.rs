//! City centres that anchor the synthetic business clusters.

use geo::Coord;

/// A named anchor point for a cluster of sample businesses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct City {
    /// Display name used in generated business names.
    pub name: &'static str,
    /// City centre (`x = longitude`, `y = latitude`).
    pub centre: Coord<f64>,
}

impl City {
    /// Construct a city from a name and centre coordinates.
    #[must_use]
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self {
            name,
            centre: Coord { x: lng, y: lat },
        }
    }
}

/// Cities seeded by [`SampleConfig::default`](crate::SampleConfig).
pub const SEED_CITIES: [City; 8] = [
    City::new("Monterrey", 25.6866, -100.3161),
    City::new("Saltillo", 25.4232, -100.9903),
    City::new("Mexico City", 19.4326, -99.1332),
    City::new("New York", 40.7128, -74.0060),
    City::new("Los Angeles", 34.0522, -118.2437),
    City::new("London", 51.5074, -0.1278),
    City::new("Paris", 48.8566, 2.3522),
    City::new("Tokyo", 35.6762, 139.6503),
];
