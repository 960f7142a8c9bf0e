//! Shared test harness modules for the SiteScout CLI.

use super::*;

mod heatmap_unit;
