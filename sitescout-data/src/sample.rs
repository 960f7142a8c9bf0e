//! Deterministic synthetic businesses clustered around seed cities.

use geo::Coord;
use log::info;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use sitescout_core::{BusinessItem, Category, MemoryStore};
use thiserror::Error;

use crate::{City, SEED_CITIES};

/// Seed used by [`SampleConfig::default`].
pub const DEFAULT_SEED: u64 = 42;

/// Parameters for [`generate_sample_businesses`].
#[derive(Debug, Clone, PartialEq)]
pub struct SampleConfig {
    /// Seed for the random number generator.
    pub seed: u64,
    /// Fewest businesses drawn per city.
    pub min_per_city: u16,
    /// Most businesses drawn per city, inclusive.
    pub max_per_city: u16,
    /// Full width in degrees of the square each city's businesses fall in.
    pub spread_deg: f64,
    /// Cities to populate.
    pub cities: Vec<City>,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            min_per_city: 80,
            max_per_city: 120,
            spread_deg: 0.1,
            cities: SEED_CITIES.to_vec(),
        }
    }
}

impl SampleConfig {
    /// Default configuration with a different seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Check the configuration before generating data.
    ///
    /// # Errors
    /// See [`SampleConfigError`] for the rejected configurations.
    pub fn validate(&self) -> Result<(), SampleConfigError> {
        if self.min_per_city > self.max_per_city {
            return Err(SampleConfigError::InvertedCounts {
                min: self.min_per_city,
                max: self.max_per_city,
            });
        }
        if !(self.spread_deg.is_finite() && self.spread_deg > 0.0) {
            return Err(SampleConfigError::InvalidSpread {
                spread: self.spread_deg,
            });
        }
        if self.cities.is_empty() {
            return Err(SampleConfigError::NoCities);
        }
        Ok(())
    }
}

/// Errors raised by an unusable [`SampleConfig`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SampleConfigError {
    /// The minimum count per city exceeds the maximum.
    #[error("minimum businesses per city ({min}) exceeds maximum ({max})")]
    InvertedCounts {
        /// Minimum as supplied.
        min: u16,
        /// Maximum as supplied.
        max: u16,
    },
    /// The spread is zero, negative or not finite.
    #[error("spread must be a positive number of degrees, got {spread}")]
    InvalidSpread {
        /// Spread as supplied.
        spread: f64,
    },
    /// No cities were configured.
    #[error("at least one city is required")]
    NoCities,
}

/// Generate businesses scattered uniformly around each configured city.
///
/// Each business sits within `spread_deg / 2` of its city centre on both
/// axes and receives a uniformly chosen [`Category`]. Identifiers are
/// assigned sequentially from 1. The same configuration always yields the
/// same businesses.
///
/// # Errors
/// Returns [`SampleConfigError`] when `config` fails validation.
///
/// # Examples
/// ```
/// use sitescout_data::{SampleConfig, generate_sample_businesses};
///
/// # fn main() -> Result<(), sitescout_data::SampleConfigError> {
/// let items = generate_sample_businesses(&SampleConfig::default())?;
/// assert!((640..=960).contains(&items.len()));
/// # Ok(())
/// # }
/// ```
pub fn generate_sample_businesses(
    config: &SampleConfig,
) -> Result<Vec<BusinessItem>, SampleConfigError> {
    config.validate()?;

    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let mut items = Vec::new();
    let mut next_id: u64 = 1;
    for city in &config.cities {
        let count = rng.gen_range(config.min_per_city..=config.max_per_city);
        for _ in 0..count {
            let location = scatter(&mut rng, city.centre, config.spread_deg);
            let category = Category::ALL
                .get(rng.gen_range(0..Category::ALL.len()))
                .copied()
                .unwrap_or(Category::Restaurant);
            items.push(BusinessItem::new(
                next_id,
                location,
                category,
                format!("Business in {}", city.name),
                format!("Category: {category}"),
            ));
            next_id = next_id.saturating_add(1);
        }
    }

    info!(
        "generated {} sample businesses across {} cities (seed {})",
        items.len(),
        config.cities.len(),
        config.seed,
    );
    Ok(items)
}

/// Generate sample businesses straight into a [`MemoryStore`].
///
/// # Errors
/// Fails under the same conditions as [`generate_sample_businesses`].
pub fn sample_store(config: &SampleConfig) -> Result<MemoryStore, SampleConfigError> {
    generate_sample_businesses(config).map(MemoryStore::with_items)
}

#[expect(
    clippy::float_arithmetic,
    reason = "offsets are uniform fractions of the spread"
)]
fn scatter(rng: &mut ChaCha8Rng, centre: Coord<f64>, spread: f64) -> Coord<f64> {
    let dx = (rng.gen_range(0.0..1.0) - 0.5) * spread;
    let dy = (rng.gen_range(0.0..1.0) - 0.5) * spread;
    Coord {
        x: centre.x + dx,
        y: centre.y + dy,
    }
}
