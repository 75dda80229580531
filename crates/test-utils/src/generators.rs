//! Portfolio generators shaped around a single property under test.

use risk_common::{Asset, FloodCategory};

use crate::fixtures::AssetBuilder;

/// Exposed assets with the given flood depths, all with 1M GIV.
///
/// Identifiers are `EXPO-00001`, `EXPO-00002`, ...
pub fn exposed_portfolio(depths: &[f64]) -> Vec<Asset> {
    depths
        .iter()
        .enumerate()
        .map(|(i, depth)| {
            AssetBuilder::new(&format!("EXPO-{:05}", i + 1))
                .flooded(*depth, FloodCategory::Primary)
                .build()
        })
        .collect()
}

/// `count` unexposed assets with the given GIV and PnL each.
pub fn dry_portfolio(count: usize, giv: f64, pnl: f64) -> Vec<Asset> {
    (0..count)
        .map(|i| {
            AssetBuilder::new(&format!("DRY-{:05}", i + 1))
                .giv(giv)
                .pnl(pnl)
                .build()
        })
        .collect()
}
