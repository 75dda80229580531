//! KPI aggregation tests against hand-computed portfolios.

use portfolio::{flood_kpis, generate_assets, portfolio_kpis, AssetStore};
use risk_common::Asset;
use test_utils::{assert_approx_eq, dry_portfolio, exposed_portfolio, sample_portfolio};

// ============================================================================
// Portfolio KPIs
// ============================================================================

#[test]
fn test_portfolio_kpis_sample() {
    let assets = sample_portfolio();
    let kpis = portfolio_kpis(&assets);

    assert_approx_eq!(kpis.total_giv, 43_000_000.0);
    assert_approx_eq!(kpis.total_pnl, 150_000.0);
    assert_approx_eq!(kpis.impacted_giv, 38_000_000.0);
    assert_approx_eq!(kpis.impacted_pnl, 250_000.0);
    assert_eq!(kpis.asset_count, 4);
}

#[test]
fn test_portfolio_kpis_empty() {
    let empty: Vec<Asset> = Vec::new();
    let kpis = portfolio_kpis(&empty);

    assert_eq!(kpis.total_giv, 0.0);
    assert_eq!(kpis.total_pnl, 0.0);
    assert_eq!(kpis.impacted_giv, 0.0);
    assert_eq!(kpis.impacted_pnl, 0.0);
    assert_eq!(kpis.asset_count, 0);
}

#[test]
fn test_portfolio_pnl_may_be_negative() {
    let assets = dry_portfolio(3, 2_000_000.0, -40_000.0);
    let kpis = portfolio_kpis(&assets);

    assert_approx_eq!(kpis.total_pnl, -120_000.0);
    assert_eq!(kpis.impacted_giv, 0.0);
}

#[test]
fn test_total_giv_bounds_impacted_giv() {
    for seed in [1, 7, 42, 1234] {
        let assets = generate_assets(120, seed);
        let kpis = portfolio_kpis(&assets);

        assert!(kpis.total_giv >= kpis.impacted_giv, "seed {}", seed);
        assert!(kpis.impacted_giv >= 0.0, "seed {}", seed);
        assert_eq!(kpis.asset_count, 120);
    }
}

// ============================================================================
// Flood KPIs
// ============================================================================

#[test]
fn test_flood_kpis_sample() {
    let assets = sample_portfolio();
    let kpis = flood_kpis(&assets);

    assert_approx_eq!(kpis.flooded_giv, 38_000_000.0);
    assert_approx_eq!(kpis.estimated_flood_loss, 5_150_000.0, 1e-6);
    assert_eq!(kpis.exposed_asset_count, 3);
    assert_eq!(kpis.median_flood_depth, 2.5);
    assert_eq!(kpis.total_assets, 4);
}

#[test]
fn test_flood_kpis_no_exposure() {
    let assets = dry_portfolio(5, 3_000_000.0, 10_000.0);
    let kpis = flood_kpis(&assets);

    assert_eq!(kpis.flooded_giv, 0.0);
    assert_eq!(kpis.estimated_flood_loss, 0.0);
    assert_eq!(kpis.exposed_asset_count, 0);
    assert_eq!(kpis.median_flood_depth, 0.0);
    assert_eq!(kpis.total_assets, 5);
}

#[test]
fn test_flood_kpis_empty_store() {
    let empty: Vec<Asset> = Vec::new();
    let kpis = flood_kpis(&empty);
    assert_eq!(kpis.total_assets, 0);
    assert_eq!(kpis.median_flood_depth, 0.0);
}

#[test]
fn test_median_uses_index_n_over_two() {
    let kpis = flood_kpis(&exposed_portfolio(&[3.0, 1.0, 2.0]));
    assert_eq!(kpis.median_flood_depth, 2.0);

    // Even count: upper middle element, not the mean of 1.0 and 3.0 / 2.0 and 3.0.
    let kpis = flood_kpis(&exposed_portfolio(&[1.0, 4.0, 2.0, 3.0]));
    assert_eq!(kpis.median_flood_depth, 3.0);
}

#[test]
fn test_median_ignores_zero_depths() {
    // Exposed at depth zero still counts as exposed but not toward the median.
    let kpis = flood_kpis(&exposed_portfolio(&[0.0, 0.0, 1.5]));
    assert_eq!(kpis.exposed_asset_count, 3);
    assert_eq!(kpis.median_flood_depth, 1.5);

    let kpis = flood_kpis(&exposed_portfolio(&[0.0, 0.0]));
    assert_eq!(kpis.exposed_asset_count, 2);
    assert_eq!(kpis.median_flood_depth, 0.0);
}

#[test]
fn test_zero_depth_still_incurs_shallow_loss() {
    // Depth 0 falls in the <1m band, so the loss is base * 0.5.
    let kpis = flood_kpis(&exposed_portfolio(&[0.0]));
    assert_approx_eq!(kpis.estimated_flood_loss, 1_000_000.0 * 0.06 * 0.5);
}

#[test]
fn test_kpis_over_selection() {
    let store = AssetStore::new(sample_portfolio());
    let selection = store.select(&["RETA-00003", "FACT-00002"]);

    let portfolio = portfolio_kpis(selection.iter().copied());
    assert_approx_eq!(portfolio.total_giv, 25_000_000.0);
    assert_approx_eq!(portfolio.impacted_giv, 20_000_000.0);
    assert_eq!(portfolio.asset_count, 2);

    let flood = flood_kpis(selection.iter().copied());
    assert_eq!(flood.exposed_asset_count, 1);
    assert_approx_eq!(flood.estimated_flood_loss, 3_200_000.0, 1e-6);
    assert_eq!(flood.median_flood_depth, 3.5);
    assert_eq!(flood.total_assets, 2);
}
