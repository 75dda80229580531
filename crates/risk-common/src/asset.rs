//! Insured asset records.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::RiskError;
use crate::flood_zone::FloodCategory;

/// Occupancy class of an insured asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetType {
    Factories,
    Retail,
    Warehouses,
    Residential,
    Commercial,
    Industrial,
}

impl AssetType {
    pub const ALL: [AssetType; 6] = [
        AssetType::Factories,
        AssetType::Retail,
        AssetType::Warehouses,
        AssetType::Residential,
        AssetType::Commercial,
        AssetType::Industrial,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AssetType::Factories => "factories",
            AssetType::Retail => "retail",
            AssetType::Warehouses => "warehouses",
            AssetType::Residential => "residential",
            AssetType::Commercial => "commercial",
            AssetType::Industrial => "industrial",
        }
    }

    /// Four-letter upper-case prefix used in asset identifiers (`FACT`, `RETA`, ...).
    pub fn id_prefix(&self) -> String {
        self.as_str()[..4].to_uppercase()
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssetType {
    type Err = RiskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        AssetType::ALL
            .into_iter()
            .find(|t| t.as_str() == needle)
            .ok_or_else(|| RiskError::Validation(format!("Unknown asset type: {}", s)))
    }
}

/// A single insured location in the portfolio.
///
/// Serialized with camelCase keys to match the dashboard's wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub asset_id: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Gross insured value.
    pub giv: f64,
    /// Profit and loss; may be negative.
    pub pnl: f64,
    pub asset_type: AssetType,
    pub construction_type: String,
    pub year_built: i32,
    pub coverage_type: String,
    /// 0..=100
    pub risk_score: u8,
    pub address: String,
    #[serde(default)]
    pub in_flood_zone: bool,
    /// Meters of water at the asset; only meaningful when `in_flood_zone`.
    #[serde(default)]
    pub flood_depth: f64,
    #[serde(default)]
    pub flood_category: Option<FloodCategory>,
}

impl Asset {
    /// Flood depth if the asset is exposed and the depth is positive.
    pub fn exposed_depth(&self) -> Option<f64> {
        (self.in_flood_zone && self.flood_depth > 0.0).then_some(self.flood_depth)
    }

    /// Whether the asset's flood fields agree with each other.
    pub fn flood_fields_consistent(&self) -> bool {
        let category_matches = self.flood_category.is_some() == self.in_flood_zone;
        let depth_matches = self.flood_depth <= 0.0 || self.in_flood_zone;
        category_matches && depth_matches && self.flood_depth >= 0.0
    }
}
