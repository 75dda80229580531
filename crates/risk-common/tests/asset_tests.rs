//! Wire-format tests for assets.

use risk_common::{Asset, AssetType, FloodCategory};

fn exposed_asset() -> Asset {
    Asset {
        asset_id: "RETA-00012".to_string(),
        latitude: 37.78,
        longitude: -122.41,
        giv: 12_500_000.0,
        pnl: -250_000.0,
        asset_type: AssetType::Retail,
        construction_type: "Masonry".to_string(),
        year_built: 1987,
        coverage_type: "Premium".to_string(),
        risk_score: 64,
        address: "1200 Market St, San Francisco, CA".to_string(),
        in_flood_zone: true,
        flood_depth: 2.3,
        flood_category: Some(FloodCategory::Secondary),
    }
}

#[test]
fn test_asset_serializes_camel_case() {
    let value = serde_json::to_value(exposed_asset()).unwrap();

    assert_eq!(value["assetId"], "RETA-00012");
    assert_eq!(value["assetType"], "retail");
    assert_eq!(value["constructionType"], "Masonry");
    assert_eq!(value["yearBuilt"], 1987);
    assert_eq!(value["inFloodZone"], true);
    assert_eq!(value["floodCategory"], "secondary");
}

#[test]
fn test_unexposed_asset_emits_null_category() {
    let mut asset = exposed_asset();
    asset.in_flood_zone = false;
    asset.flood_depth = 0.0;
    asset.flood_category = None;

    let value = serde_json::to_value(&asset).unwrap();
    assert!(value["floodCategory"].is_null());
    assert!(asset.flood_fields_consistent());
}

#[test]
fn test_flood_defaults_when_missing() {
    let json = r#"{
        "assetId": "FACT-00001",
        "latitude": 37.7,
        "longitude": -122.4,
        "giv": 1000000,
        "pnl": 0,
        "assetType": "factories",
        "constructionType": "Concrete",
        "yearBuilt": 2001,
        "coverageType": "Basic",
        "riskScore": 10,
        "address": "100 King St, San Francisco, CA"
    }"#;

    let asset: Asset = serde_json::from_str(json).unwrap();
    assert!(!asset.in_flood_zone);
    assert_eq!(asset.flood_depth, 0.0);
    assert_eq!(asset.flood_category, None);
    assert_eq!(asset.exposed_depth(), None);
}

#[test]
fn test_inconsistent_flood_fields_detected() {
    let mut asset = exposed_asset();
    asset.flood_category = None;
    assert!(!asset.flood_fields_consistent());

    let mut asset = exposed_asset();
    asset.in_flood_zone = false;
    asset.flood_category = None;
    assert!(!asset.flood_fields_consistent());
}
