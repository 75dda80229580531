//! Flood damage exposure factors.
//!
//! The loss rate applied to an asset's insured value is a base rate for its
//! construction category scaled by a step function of flood depth.

/// Base loss rates by construction category.
const BASE_RATES: [(&str, f64); 5] = [
    ("Wood Frame", 0.15),
    ("Steel Frame", 0.08),
    ("Concrete", 0.06),
    ("Masonry", 0.10),
    ("Mixed", 0.12),
];

/// Rate used for construction categories not in the table.
pub const DEFAULT_BASE_RATE: f64 = 0.10;

/// Base loss rate for a construction category. Matching is exact.
pub fn base_rate(construction_type: &str) -> f64 {
    BASE_RATES
        .iter()
        .find(|(name, _)| *name == construction_type)
        .map(|(_, rate)| *rate)
        .unwrap_or(DEFAULT_BASE_RATE)
}

/// Depth scaling: <1m halves the rate, 1-2m keeps it, 2-3m is 1.5x, 3m+ doubles it.
pub fn depth_multiplier(depth: f64) -> f64 {
    if depth < 1.0 {
        0.5
    } else if depth < 2.0 {
        1.0
    } else if depth < 3.0 {
        1.5
    } else {
        2.0
    }
}

/// Fraction of insured value expected to be lost at `depth` meters.
pub fn exposure_factor(depth: f64, construction_type: &str) -> f64 {
    base_rate(construction_type) * depth_multiplier(depth)
}
