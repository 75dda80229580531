//! Common test fixtures for risk analytics tests.

use risk_common::{Asset, AssetType, FloodCategory, FloodZone};

/// Builder for assets with sensible defaults.
///
/// Defaults to an unexposed retail asset with 1,000,000 GIV and zero PnL.
#[derive(Debug, Clone)]
pub struct AssetBuilder {
    asset: Asset,
}

impl AssetBuilder {
    pub fn new(asset_id: &str) -> Self {
        Self {
            asset: Asset {
                asset_id: asset_id.to_string(),
                latitude: 37.7749,
                longitude: -122.4194,
                giv: 1_000_000.0,
                pnl: 0.0,
                asset_type: AssetType::Retail,
                construction_type: "Concrete".to_string(),
                year_built: 1990,
                coverage_type: "Standard".to_string(),
                risk_score: 50,
                address: "100 Market St, San Francisco, CA".to_string(),
                in_flood_zone: false,
                flood_depth: 0.0,
                flood_category: None,
            },
        }
    }

    pub fn giv(mut self, giv: f64) -> Self {
        self.asset.giv = giv;
        self
    }

    pub fn pnl(mut self, pnl: f64) -> Self {
        self.asset.pnl = pnl;
        self
    }

    pub fn asset_type(mut self, asset_type: AssetType) -> Self {
        self.asset.asset_type = asset_type;
        self
    }

    pub fn construction(mut self, construction_type: &str) -> Self {
        self.asset.construction_type = construction_type.to_string();
        self
    }

    pub fn address(mut self, address: &str) -> Self {
        self.asset.address = address.to_string();
        self
    }

    pub fn location(mut self, latitude: f64, longitude: f64) -> Self {
        self.asset.latitude = latitude;
        self.asset.longitude = longitude;
        self
    }

    /// Place the asset in a flood zone at `depth` meters.
    pub fn flooded(mut self, depth: f64, category: FloodCategory) -> Self {
        self.asset.in_flood_zone = true;
        self.asset.flood_depth = depth;
        self.asset.flood_category = Some(category);
        self
    }

    pub fn build(self) -> Asset {
        self.asset
    }
}

/// A four-asset portfolio whose KPIs are easy to compute by hand.
///
/// | id | giv | pnl | construction | depth |
/// |----|-----|-----|--------------|-------|
/// | WARE-00001 | 10M | +500k | Wood Frame | 0.5 (exposed) |
/// | FACT-00002 | 20M | -300k | Steel Frame | 3.5 (exposed) |
/// | RETA-00003 | 5M | -100k | Concrete | - |
/// | COMM-00004 | 8M | +50k | Adobe | 2.5 (exposed) |
///
/// Expected: total GIV 43M, total PnL 150k, impacted GIV 38M,
/// impacted PnL 250k, estimated loss 750k + 3.2M + 1.2M = 5.15M,
/// median depth 2.5.
pub fn sample_portfolio() -> Vec<Asset> {
    vec![
        AssetBuilder::new("WARE-00001")
            .asset_type(AssetType::Warehouses)
            .giv(10_000_000.0)
            .pnl(500_000.0)
            .construction("Wood Frame")
            .address("250 King St, San Francisco, CA")
            .location(37.7790, -122.3920)
            .flooded(0.5, FloodCategory::Fringe)
            .build(),
        AssetBuilder::new("FACT-00002")
            .asset_type(AssetType::Factories)
            .giv(20_000_000.0)
            .pnl(-300_000.0)
            .construction("Steel Frame")
            .address("4100 Folsom St, San Francisco, CA")
            .location(37.7480, -122.4130)
            .flooded(3.5, FloodCategory::Primary)
            .build(),
        AssetBuilder::new("RETA-00003")
            .asset_type(AssetType::Retail)
            .giv(5_000_000.0)
            .pnl(-100_000.0)
            .construction("Concrete")
            .address("870 Geary Blvd, San Francisco, CA")
            .location(37.7860, -122.4180)
            .build(),
        AssetBuilder::new("COMM-00004")
            .asset_type(AssetType::Commercial)
            .giv(8_000_000.0)
            .pnl(50_000.0)
            .construction("Adobe")
            .address("1500 Market St, San Francisco, CA")
            .location(37.7750, -122.4190)
            .flooded(2.5, FloodCategory::Secondary)
            .build(),
    ]
}

/// A single minimal flood zone.
pub fn sample_flood_zone(flood_id: &str) -> FloodZone {
    FloodZone {
        flood_id: flood_id.to_string(),
        flood_category: FloodCategory::Secondary,
        flood_depth_m: 1.2,
        return_period_yr: 50,
        probability_pct: 2.0,
        data_source: "FEMA NFHL".to_string(),
        timestamp: "2024-01-15T00:00:00Z".to_string(),
        coordinates: vec![[37.770, -122.410], [37.775, -122.400], [37.780, -122.405]],
    }
}
