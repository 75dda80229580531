//! Mock portfolio generator tests.

use std::collections::HashSet;

use portfolio::{default_flood_zones, generate_assets, DEFAULT_ASSET_COUNT};

#[test]
fn test_same_seed_same_portfolio() {
    assert_eq!(generate_assets(50, 99), generate_assets(50, 99));
}

#[test]
fn test_different_seeds_differ() {
    assert_ne!(generate_assets(50, 1), generate_assets(50, 2));
}

#[test]
fn test_requested_count() {
    assert_eq!(generate_assets(DEFAULT_ASSET_COUNT, 5).len(), 85);
    assert!(generate_assets(0, 5).is_empty());
}

#[test]
fn test_ids_unique_and_formatted() {
    let assets = generate_assets(200, 3);
    let ids: HashSet<&str> = assets.iter().map(|a| a.asset_id.as_str()).collect();
    assert_eq!(ids.len(), 200);

    for (i, asset) in assets.iter().enumerate() {
        let expected = format!("{}-{:05}", asset.asset_type.id_prefix(), i + 1);
        assert_eq!(asset.asset_id, expected);
    }
}

#[test]
fn test_attribute_ranges() {
    for asset in generate_assets(300, 11) {
        assert!((37.69..=37.86).contains(&asset.latitude));
        assert!((-122.55..=-122.29).contains(&asset.longitude));
        assert!((1_000_000.0..=51_000_000.0).contains(&asset.giv));
        assert!((-600_000.0..=1_400_000.0).contains(&asset.pnl));
        assert!((1960..=2020).contains(&asset.year_built));
        assert!(asset.risk_score <= 100);
        assert!((0.0..=8.0).contains(&asset.flood_depth));
        assert!(asset.address.ends_with(", San Francisco, CA"));
    }
}

#[test]
fn test_flood_fields_consistent() {
    let assets = generate_assets(300, 17);
    assert!(assets.iter().all(|a| a.flood_fields_consistent()));
    // With a 40% exposure share, 300 draws yield both kinds.
    assert!(assets.iter().any(|a| a.in_flood_zone));
    assert!(assets.iter().any(|a| !a.in_flood_zone));
}

#[test]
fn test_default_flood_zones() {
    let zones = default_flood_zones();
    let ids: Vec<&str> = zones.iter().map(|z| z.flood_id.as_str()).collect();
    assert_eq!(ids, vec!["FZ-001", "FZ-002", "FZ-003", "FZ-004"]);
    assert!(zones.iter().all(|z| z.is_valid_polygon()));
    assert!(zones.iter().all(|z| z.data_source == "FEMA NFHL"));
}
