//! Business categories and the heatmap category filter.
//!
//! Categories form a closed set so scoring never has to guess at free-form
//! labels.
//!
//! # Examples
//! ```
//! use sitescout_core::{Category, CategoryFilter};
//!
//! assert_eq!(Category::Restaurant.as_str(), "restaurant");
//! assert_eq!("retail".parse::<Category>(), Ok(Category::Retail));
//! assert_eq!("all".parse::<CategoryFilter>(), Ok(CategoryFilter::All));
//! ```

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The kind of business an item represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Category {
    /// Restaurants, cafés and other food service.
    Restaurant,
    /// Shops and stores.
    Retail,
    /// Personal and professional services.
    Service,
    /// Cinemas, venues and nightlife.
    Entertainment,
}

/// Error returned when parsing an unrecognised category key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown business category '{key}'")]
pub struct UnknownCategory {
    /// The rejected key.
    pub key: String,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Self; 4] = [
        Self::Restaurant,
        Self::Retail,
        Self::Service,
        Self::Entertainment,
    ];

    /// Return the category key as a lowercase `&str`.
    ///
    /// # Examples
    /// ```
    /// use sitescout_core::Category;
    ///
    /// assert_eq!(Category::Entertainment.as_str(), "entertainment");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Restaurant => "restaurant",
            Self::Retail => "retail",
            Self::Service => "service",
            Self::Entertainment => "entertainment",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "restaurant" => Ok(Self::Restaurant),
            "retail" => Ok(Self::Retail),
            "service" => Ok(Self::Service),
            "entertainment" => Ok(Self::Entertainment),
            _ => Err(UnknownCategory {
                key: s.to_owned(),
            }),
        }
    }
}

/// Selects which businesses feed the density heatmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    /// Every business regardless of category.
    #[default]
    All,
    /// Only businesses of one category.
    Only(Category),
}

impl CategoryFilter {
    /// Key accepted by [`FromStr`] for [`CategoryFilter::All`].
    pub const ALL_KEY: &'static str = "all";

    /// Report whether `category` passes the filter.
    #[must_use]
    pub fn matches(self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == category,
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        Self::Only(category)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(Self::ALL_KEY),
            Self::Only(category) => category.fmt(f),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case(Self::ALL_KEY) {
            return Ok(Self::All);
        }
        s.parse().map(Self::Only)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn display_matches_as_str() {
        for category in Category::ALL {
            assert_eq!(category.to_string(), category.as_str());
        }
    }

    #[rstest]
    #[case("restaurant", Category::Restaurant)]
    #[case("RETAIL", Category::Retail)]
    #[case(" service ", Category::Service)]
    fn parses_known_keys(#[case] key: &str, #[case] expected: Category) {
        assert_eq!(key.parse::<Category>(), Ok(expected));
    }

    #[rstest]
    fn parsing_rejects_unknown() {
        let err = "bakery".parse::<Category>().expect_err("unknown key");
        assert_eq!(err.key, "bakery");
        assert!(err.to_string().contains("unknown business category"));
    }

    #[rstest]
    #[case(CategoryFilter::All, Category::Retail, true)]
    #[case(CategoryFilter::Only(Category::Retail), Category::Retail, true)]
    #[case(CategoryFilter::Only(Category::Retail), Category::Service, false)]
    fn filter_matches(
        #[case] filter: CategoryFilter,
        #[case] category: Category,
        #[case] expected: bool,
    ) {
        assert_eq!(filter.matches(category), expected);
    }

    #[rstest]
    fn filter_round_trips_through_display() {
        for filter in [CategoryFilter::All, CategoryFilter::Only(Category::Service)] {
            assert_eq!(filter.to_string().parse::<CategoryFilter>(), Ok(filter));
        }
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn serialises_as_lowercase_key() {
        let json = serde_json::to_string(&Category::Entertainment).expect("serialise category");
        assert_eq!(json, "\"entertainment\"");
        let parsed: Category = serde_json::from_str("\"retail\"").expect("deserialise category");
        assert_eq!(parsed, Category::Retail);
    }
}
