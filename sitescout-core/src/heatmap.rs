//! Density heatmap input filtered by category.

use geo::Coord;
use log::debug;

use crate::{BusinessStore, CategoryFilter};

/// Positions of every business in `store` that passes `filter`.
///
/// Points keep store order. The caller renders them as a weighted heatmap.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use sitescout_core::{BusinessItem, Category, CategoryFilter, MemoryStore, heatmap_points};
///
/// let store = MemoryStore::with_items([
///     BusinessItem::unnamed(1, Coord { x: 1.0, y: 1.0 }, Category::Retail),
///     BusinessItem::unnamed(2, Coord { x: 2.0, y: 2.0 }, Category::Service),
/// ]);
///
/// assert_eq!(heatmap_points(&store, CategoryFilter::All).len(), 2);
/// assert_eq!(
///     heatmap_points(&store, CategoryFilter::Only(Category::Service)),
///     vec![Coord { x: 2.0, y: 2.0 }],
/// );
/// ```
#[must_use]
pub fn heatmap_points<S>(store: &S, filter: CategoryFilter) -> Vec<Coord<f64>>
where
    S: BusinessStore + ?Sized,
{
    let points: Vec<_> = store
        .businesses()
        .filter(|item| filter.matches(item.category))
        .map(|item| item.location)
        .collect();
    debug!("heatmap filter {filter} kept {} points", points.len());
    points
}
