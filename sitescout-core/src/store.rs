//! Read access to the business collection.
//!
//! The [`BusinessStore`] trait abstracts the data source that feeds the
//! heatmap and the placement search. [`MemoryStore`] is the append-only,
//! in-memory implementation used by the sample-data pipeline.

use crate::{BoundingRegion, BusinessItem};

/// Read-only access to businesses.
///
/// Coordinates use WGS84 with `x = longitude` and `y = latitude`.
///
/// # Examples
///
/// ```rust
/// use geo::Coord;
/// use sitescout_core::{BoundingRegion, BusinessItem, BusinessStore, Category};
///
/// struct FixedStore {
///     items: Vec<BusinessItem>,
/// }
///
/// impl BusinessStore for FixedStore {
///     fn businesses(&self) -> Box<dyn Iterator<Item = BusinessItem> + Send + '_> {
///         Box::new(self.items.iter().cloned())
///     }
/// }
///
/// # fn main() -> Result<(), sitescout_core::RegionError> {
/// let item = BusinessItem::unnamed(1, Coord { x: 0.0, y: 0.0 }, Category::Retail);
/// let store = FixedStore { items: vec![item.clone()] };
/// let region = BoundingRegion::from_bounds(-1.0, -1.0, 1.0, 1.0)?;
///
/// let found: Vec<_> = store.businesses_in_region(&region).collect();
/// assert_eq!(found, vec![item]);
/// # Ok(())
/// # }
/// ```
pub trait BusinessStore {
    /// Return every business in the store.
    fn businesses(&self) -> Box<dyn Iterator<Item = BusinessItem> + Send + '_>;

    /// Return the businesses inside `region`, boundaries included.
    ///
    /// The default implementation scans [`BusinessStore::businesses`].
    /// Stores backed by a spatial index should override it.
    fn businesses_in_region(
        &self,
        region: &BoundingRegion,
    ) -> Box<dyn Iterator<Item = BusinessItem> + Send + '_> {
        let bounds = *region;
        Box::new(
            self.businesses()
                .filter(move |item| bounds.contains(item.location)),
        )
    }
}

/// Append-only in-memory business collection.
///
/// The store performs linear scans and suits scene-scale collections of a
/// few thousand items.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryStore {
    items: Vec<BusinessItem>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Create a store from a collection of businesses.
    #[must_use]
    pub fn with_items<I>(items: I) -> Self
    where
        I: IntoIterator<Item = BusinessItem>,
    {
        Self {
            items: items.into_iter().collect(),
        }
    }

    /// Append a business.
    pub fn push(&mut self, item: BusinessItem) {
        self.items.push(item);
    }

    /// Number of stored businesses.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Report whether the store holds no businesses.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over stored businesses without cloning.
    pub fn iter(&self) -> std::slice::Iter<'_, BusinessItem> {
        self.items.iter()
    }
}

impl Extend<BusinessItem> for MemoryStore {
    fn extend<T: IntoIterator<Item = BusinessItem>>(&mut self, iter: T) {
        self.items.extend(iter);
    }
}

impl FromIterator<BusinessItem> for MemoryStore {
    fn from_iter<T: IntoIterator<Item = BusinessItem>>(iter: T) -> Self {
        Self::with_items(iter)
    }
}

impl<'a> IntoIterator for &'a MemoryStore {
    type Item = &'a BusinessItem;
    type IntoIter = std::slice::Iter<'a, BusinessItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl BusinessStore for MemoryStore {
    fn businesses(&self) -> Box<dyn Iterator<Item = BusinessItem> + Send + '_> {
        Box::new(self.items.iter().cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Category;
    use geo::Coord;
    use rstest::{fixture, rstest};

    fn item(id: u64, lng: f64, lat: f64) -> BusinessItem {
        BusinessItem::unnamed(id, Coord { x: lng, y: lat }, Category::Service)
    }

    #[fixture]
    fn store() -> MemoryStore {
        MemoryStore::with_items([item(1, 0.0, 0.0), item(2, 1.0, 1.0), item(3, 5.0, 5.0)])
    }

    #[rstest]
    fn region_query_includes_boundary_points(store: MemoryStore) {
        let region = BoundingRegion::from_bounds(0.0, 0.0, 1.0, 1.0).expect("valid region");
        let ids: Vec<_> = store.businesses_in_region(&region).map(|b| b.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[rstest]
    fn push_appends_in_order(mut store: MemoryStore) {
        store.push(item(4, 2.0, 2.0));
        let ids: Vec<_> = store.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert_eq!(store.len(), 4);
    }

    #[rstest]
    fn empty_store_yields_nothing() {
        let store = MemoryStore::new();
        assert!(store.is_empty());
        assert_eq!(store.businesses().count(), 0);
    }
}
