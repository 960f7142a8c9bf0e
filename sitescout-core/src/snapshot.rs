//! Immutable views of the businesses visible in a region.

use log::debug;

use crate::{BoundingRegion, BusinessItem, BusinessStore, Category};

/// The businesses visible in a region, split out by category.
///
/// A snapshot is the input to one search. It owns its items, so the store
/// may keep growing while a search runs elsewhere.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use sitescout_core::{BoundingRegion, BusinessItem, Category, MemoryStore, RegionSnapshot};
///
/// # fn main() -> Result<(), sitescout_core::RegionError> {
/// let store = MemoryStore::with_items([
///     BusinessItem::unnamed(1, Coord { x: 0.5, y: 0.5 }, Category::Restaurant),
///     BusinessItem::unnamed(2, Coord { x: 0.5, y: 0.5 }, Category::Retail),
///     BusinessItem::unnamed(3, Coord { x: 9.0, y: 9.0 }, Category::Restaurant),
/// ]);
/// let region = BoundingRegion::from_bounds(0.0, 0.0, 1.0, 1.0)?;
///
/// let snapshot = RegionSnapshot::capture(&store, region, Category::Restaurant);
/// assert_eq!(snapshot.businesses().len(), 2);
/// assert_eq!(snapshot.competitors().len(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RegionSnapshot {
    region: BoundingRegion,
    category: Category,
    businesses: Vec<BusinessItem>,
    competitors: Vec<BusinessItem>,
}

impl RegionSnapshot {
    /// Capture the businesses inside `region` from `store`.
    #[must_use]
    pub fn capture<S>(store: &S, region: BoundingRegion, category: Category) -> Self
    where
        S: BusinessStore + ?Sized,
    {
        let businesses: Vec<_> = store.businesses_in_region(&region).collect();
        Self::from_visible(region, category, businesses)
    }

    /// Build a snapshot from businesses already known to be visible.
    ///
    /// Competitors are the items whose category equals `category`.
    #[must_use]
    pub fn from_visible(
        region: BoundingRegion,
        category: Category,
        businesses: Vec<BusinessItem>,
    ) -> Self {
        let competitors: Vec<_> = businesses
            .iter()
            .filter(|item| item.category == category)
            .cloned()
            .collect();
        debug!(
            "captured {} businesses and {} {category} competitors",
            businesses.len(),
            competitors.len(),
        );
        Self {
            region,
            category,
            businesses,
            competitors,
        }
    }

    /// Region the snapshot covers.
    #[must_use]
    pub const fn region(&self) -> &BoundingRegion {
        &self.region
    }

    /// Category being sited.
    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    /// Every visible business.
    #[must_use]
    pub fn businesses(&self) -> &[BusinessItem] {
        &self.businesses
    }

    /// Visible businesses sharing the sited category.
    #[must_use]
    pub fn competitors(&self) -> &[BusinessItem] {
        &self.competitors
    }
}
