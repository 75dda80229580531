//! Mock portfolio generation.
//!
//! Assets are scattered around San Francisco with randomized attributes.
//! Generation is a pure function of `(count, seed)`, so the same seed always
//! produces the same portfolio.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use risk_common::{Asset, AssetType, FloodCategory, FloodZone};

/// Number of assets generated when no count is configured.
pub const DEFAULT_ASSET_COUNT: usize = 85;

const CENTER_LAT: f64 = 37.7749;
const CENTER_LNG: f64 = -122.4194;
const LAT_SPREAD: f64 = 0.15;
const LNG_SPREAD: f64 = 0.25;

/// Share of assets placed inside a flood zone.
const FLOOD_ZONE_SHARE: f64 = 0.4;
const MAX_FLOOD_DEPTH_M: f64 = 8.0;

const CONSTRUCTION_TYPES: [&str; 5] = ["Wood Frame", "Steel Frame", "Concrete", "Masonry", "Mixed"];
const COVERAGE_TYPES: [&str; 4] = ["Full Coverage", "Basic", "Premium", "Standard"];

const STREET_NAMES: [&str; 15] = [
    "Market St",
    "Mission St",
    "Howard St",
    "Folsom St",
    "Harrison St",
    "Bryant St",
    "Brannan St",
    "Townsend St",
    "King St",
    "Berry St",
    "Van Ness Ave",
    "Geary Blvd",
    "Post St",
    "Sutter St",
    "Bush St",
];

fn pick<'a, T, R: Rng>(rng: &mut R, items: &'a [T]) -> &'a T {
    &items[rng.gen_range(0..items.len())]
}

fn generate_address<R: Rng>(rng: &mut R) -> String {
    let number = rng.gen_range(100..=9000);
    let street = pick(rng, &STREET_NAMES);
    format!("{} {}, San Francisco, CA", number, street)
}

/// Generate `count` assets deterministically from `seed`.
///
/// Identifiers are `<TYPE PREFIX>-<index>` with a 1-based, five-digit index,
/// so they are unique within one generated portfolio.
pub fn generate_assets(count: usize, seed: u64) -> Vec<Asset> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut assets = Vec::with_capacity(count);

    for i in 0..count {
        let asset_type = *pick(&mut rng, &AssetType::ALL);
        let latitude = CENTER_LAT + (rng.gen::<f64>() - 0.5) * LAT_SPREAD;
        let longitude = CENTER_LNG + (rng.gen::<f64>() - 0.5) * LNG_SPREAD;

        let in_flood_zone = rng.gen::<f64>() < FLOOD_ZONE_SHARE;
        let flood_depth = if in_flood_zone {
            (rng.gen::<f64>() * MAX_FLOOD_DEPTH_M * 10.0).round() / 10.0
        } else {
            0.0
        };

        let giv = (rng.gen::<f64>() * 50_000_000.0 + 1_000_000.0).round();
        let pnl = ((rng.gen::<f64>() - 0.3) * 2_000_000.0).round();
        let construction_type = pick(&mut rng, &CONSTRUCTION_TYPES).to_string();
        let year_built = rng.gen_range(1960..=2020);
        let coverage_type = pick(&mut rng, &COVERAGE_TYPES).to_string();
        let risk_score = rng.gen_range(0..=100);
        let address = generate_address(&mut rng);
        let flood_category = in_flood_zone.then(|| *pick(&mut rng, &FloodCategory::ALL));

        assets.push(Asset {
            asset_id: format!("{}-{:05}", asset_type.id_prefix(), i + 1),
            latitude,
            longitude,
            giv,
            pnl,
            asset_type,
            construction_type,
            year_built,
            coverage_type,
            risk_score,
            address,
            in_flood_zone,
            flood_depth,
            flood_category,
        });
    }

    debug!(count, seed, "Generated mock assets");
    assets
}

fn fema_zone(
    flood_id: &str,
    flood_category: FloodCategory,
    flood_depth_m: f64,
    return_period_yr: u32,
    probability_pct: f64,
    coordinates: [[f64; 2]; 5],
) -> FloodZone {
    FloodZone {
        flood_id: flood_id.to_string(),
        flood_category,
        flood_depth_m,
        return_period_yr,
        probability_pct,
        data_source: "FEMA NFHL".to_string(),
        timestamp: "2024-01-15T00:00:00Z".to_string(),
        coordinates: coordinates.to_vec(),
    }
}

/// The four published flood zones covering the San Francisco waterfront.
pub fn default_flood_zones() -> Vec<FloodZone> {
    vec![
        fema_zone(
            "FZ-001",
            FloodCategory::Primary,
            2.5,
            100,
            1.0,
            [
                [37.7850, -122.3900],
                [37.7900, -122.3800],
                [37.7950, -122.3850],
                [37.7920, -122.4000],
                [37.7850, -122.3950],
            ],
        ),
        fema_zone(
            "FZ-002",
            FloodCategory::Secondary,
            1.2,
            50,
            2.0,
            [
                [37.7700, -122.4100],
                [37.7750, -122.4000],
                [37.7800, -122.4050],
                [37.7780, -122.4200],
                [37.7720, -122.4180],
            ],
        ),
        fema_zone(
            "FZ-003",
            FloodCategory::Fringe,
            0.5,
            25,
            4.0,
            [
                [37.7600, -122.4300],
                [37.7650, -122.4200],
                [37.7700, -122.4250],
                [37.7680, -122.4400],
                [37.7620, -122.4380],
            ],
        ),
        fema_zone(
            "FZ-004",
            FloodCategory::Primary,
            3.1,
            100,
            1.0,
            [
                [37.7820, -122.4500],
                [37.7870, -122.4400],
                [37.7920, -122.4450],
                [37.7900, -122.4600],
                [37.7840, -122.4580],
            ],
        ),
    ]
}
