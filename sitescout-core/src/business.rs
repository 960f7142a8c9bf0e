//! Existing businesses that shape the opportunity landscape.

use geo::Coord;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Category;

/// An existing business plotted on the map.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`. Name and
/// description are display metadata only; scoring reads `location` and
/// `category`.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use sitescout_core::{BusinessItem, Category};
///
/// let item = BusinessItem::new(
///     1,
///     Coord { x: -100.3161, y: 25.6866 },
///     Category::Restaurant,
///     "Business in Monterrey",
///     "Category: restaurant",
/// );
///
/// assert_eq!(item.category, Category::Restaurant);
/// assert_eq!(item.name, "Business in Monterrey");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BusinessItem {
    /// Unique identifier within a collection.
    pub id: u64,
    /// Geospatial position.
    pub location: Coord<f64>,
    /// Kind of business, used to pick out competitors.
    pub category: Category,
    /// Display name.
    pub name: String,
    /// Display description.
    pub description: String,
}

impl BusinessItem {
    /// Construct a `BusinessItem` with display metadata.
    #[must_use]
    pub fn new(
        id: u64,
        location: Coord<f64>,
        category: Category,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            location,
            category,
            name: name.into(),
            description: description.into(),
        }
    }

    /// Construct a `BusinessItem` without display metadata.
    ///
    /// # Examples
    /// ```
    /// use geo::Coord;
    /// use sitescout_core::{BusinessItem, Category};
    ///
    /// let item = BusinessItem::unnamed(7, Coord { x: 0.0, y: 0.0 }, Category::Retail);
    /// assert!(item.name.is_empty());
    /// ```
    #[must_use]
    pub const fn unnamed(id: u64, location: Coord<f64>, category: Category) -> Self {
        Self {
            id,
            location,
            category,
            name: String::new(),
            description: String::new(),
        }
    }
}
