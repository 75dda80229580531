//! Portfolio and flood KPI aggregation.
//!
//! Both aggregations are single pass (plus a sort for the median) over any
//! sequence of asset references, so they serve the whole store as well as a
//! user selection. Neither can fail: an empty input produces all zeros.

use serde::{Deserialize, Serialize};

use risk_common::Asset;

use crate::exposure::exposure_factor;

/// Headline portfolio totals.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PortfolioKpis {
    #[serde(rename = "totalGIV")]
    pub total_giv: f64,
    #[serde(rename = "totalPnL")]
    pub total_pnl: f64,
    /// GIV of assets flagged as inside a flood zone.
    #[serde(rename = "impactedGIV")]
    pub impacted_giv: f64,
    #[serde(rename = "impactedPnL")]
    pub impacted_pnl: f64,
    #[serde(rename = "assetCount")]
    pub asset_count: usize,
}

/// Flood exposure summary.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FloodKpis {
    #[serde(rename = "floodedGIV")]
    pub flooded_giv: f64,
    #[serde(rename = "estimatedFloodLoss")]
    pub estimated_flood_loss: f64,
    #[serde(rename = "exposedAssetCount")]
    pub exposed_asset_count: usize,
    #[serde(rename = "medianFloodDepth")]
    pub median_flood_depth: f64,
    #[serde(rename = "totalAssets")]
    pub total_assets: usize,
}

/// Sum GIV and PnL over all assets and over the flood-exposed subset.
pub fn portfolio_kpis<'a, I>(assets: I) -> PortfolioKpis
where
    I: IntoIterator<Item = &'a Asset>,
{
    assets
        .into_iter()
        .fold(PortfolioKpis::default(), |mut kpis, asset| {
            kpis.total_giv += asset.giv;
            kpis.total_pnl += asset.pnl;
            if asset.in_flood_zone {
                kpis.impacted_giv += asset.giv;
                kpis.impacted_pnl += asset.pnl;
            }
            kpis.asset_count += 1;
            kpis
        })
}

/// Flooded GIV, estimated loss and depth statistics for the exposed subset.
pub fn flood_kpis<'a, I>(assets: I) -> FloodKpis
where
    I: IntoIterator<Item = &'a Asset>,
{
    let mut kpis = FloodKpis::default();
    let mut depths = Vec::new();

    for asset in assets {
        kpis.total_assets += 1;
        if !asset.in_flood_zone {
            continue;
        }

        kpis.exposed_asset_count += 1;
        kpis.flooded_giv += asset.giv;
        kpis.estimated_flood_loss +=
            asset.giv * exposure_factor(asset.flood_depth, &asset.construction_type);

        if let Some(depth) = asset.exposed_depth() {
            depths.push(depth);
        }
    }

    kpis.median_flood_depth = upper_median(depths);
    kpis
}

/// Median that takes the element at index `n / 2` after sorting.
///
/// For an even count this is the upper of the two middle values, not their
/// mean: `[1, 2, 3, 4]` yields `3`. Returns `0.0` for an empty input.
pub fn upper_median(mut values: Vec<f64>) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.sort_by(f64::total_cmp);
    values[values.len() / 2]
}
