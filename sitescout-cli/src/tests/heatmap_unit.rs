//! Configuration and output tests for the `heatmap` command.

use crate::heatmap::{HeatmapArgs, HeatmapConfig, run_heatmap_with};
use rstest::rstest;
use serde_json::Value;
use sitescout_core::{Category, CategoryFilter};

fn run_to_json(config: HeatmapConfig) -> Value {
    let mut buffer = Vec::new();
    run_heatmap_with(config, &mut buffer).expect("heatmap should succeed");
    serde_json::from_slice(&buffer).expect("output should be JSON")
}

#[rstest]
#[case(None, CategoryFilter::All)]
#[case(Some("all"), CategoryFilter::All)]
#[case(Some("retail"), CategoryFilter::Only(Category::Retail))]
fn category_key_resolves_to_filter(#[case] key: Option<&str>, #[case] expected: CategoryFilter) {
    let args = HeatmapArgs {
        category: key.map(String::from),
        seed: None,
    };
    let config = HeatmapConfig::try_from(args).expect("config should build");
    assert_eq!(config.filter, expected);
}

#[rstest]
fn unknown_category_is_rejected() {
    let args = HeatmapArgs {
        category: Some(String::from("museum")),
        seed: None,
    };
    assert!(HeatmapConfig::try_from(args).is_err());
}

#[rstest]
fn all_filter_covers_every_business() {
    let report = run_to_json(HeatmapConfig {
        filter: CategoryFilter::All,
        seed: 3,
    });
    assert_eq!(report["filter"], "all");
    assert_eq!(report["count"], report["total_businesses"]);
    assert_eq!(
        report["points"].as_array().map(Vec::len),
        report["count"].as_u64().and_then(|n| usize::try_from(n).ok())
    );
}

#[rstest]
fn category_filters_partition_the_businesses() {
    let total = run_to_json(HeatmapConfig {
        filter: CategoryFilter::All,
        seed: 3,
    })["count"]
        .as_u64()
        .expect("count");
    let summed: u64 = Category::ALL
        .into_iter()
        .map(|category| {
            run_to_json(HeatmapConfig {
                filter: category.into(),
                seed: 3,
            })["count"]
                .as_u64()
                .expect("count")
        })
        .sum();
    assert_eq!(summed, total);
}
