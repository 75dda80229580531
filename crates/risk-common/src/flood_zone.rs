//! Flood zone polygons and flood severity categories.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity category shared by flood zones and exposed assets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FloodCategory {
    Primary,
    Secondary,
    Fringe,
}

impl FloodCategory {
    pub const ALL: [FloodCategory; 3] = [
        FloodCategory::Primary,
        FloodCategory::Secondary,
        FloodCategory::Fringe,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FloodCategory::Primary => "primary",
            FloodCategory::Secondary => "secondary",
            FloodCategory::Fringe => "fringe",
        }
    }
}

impl fmt::Display for FloodCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A flood hazard polygon as published by the data source.
///
/// Field names follow the upstream feed (snake_case), unlike [`crate::Asset`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloodZone {
    pub flood_id: String,
    pub flood_category: FloodCategory,
    /// Expected inundation depth in meters.
    pub flood_depth_m: f64,
    pub return_period_yr: u32,
    /// Annual exceedance probability, in percent.
    pub probability_pct: f64,
    pub data_source: String,
    /// ISO-8601 publication timestamp, kept verbatim.
    pub timestamp: String,
    /// Boundary vertices as `[lat, lng]`. Not necessarily closed.
    pub coordinates: Vec<[f64; 2]>,
}

impl FloodZone {
    /// A usable polygon has at least three vertices.
    pub fn is_valid_polygon(&self) -> bool {
        self.coordinates.len() >= 3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_serializes_lowercase() {
        let json = serde_json::to_string(&FloodCategory::Secondary).unwrap();
        assert_eq!(json, "\"secondary\"");

        let parsed: FloodCategory = serde_json::from_str("\"fringe\"").unwrap();
        assert_eq!(parsed, FloodCategory::Fringe);
    }

    #[test]
    fn test_zone_wire_format() {
        let zone = FloodZone {
            flood_id: "FZ-010".to_string(),
            flood_category: FloodCategory::Primary,
            flood_depth_m: 2.5,
            return_period_yr: 100,
            probability_pct: 1.0,
            data_source: "FEMA NFHL".to_string(),
            timestamp: "2024-01-15T00:00:00Z".to_string(),
            coordinates: vec![[37.785, -122.39], [37.79, -122.38], [37.795, -122.385]],
        };

        let value = serde_json::to_value(&zone).unwrap();
        assert_eq!(value["flood_id"], "FZ-010");
        assert_eq!(value["flood_category"], "primary");
        assert_eq!(value["coordinates"][1][0], 37.79);
        assert!(zone.is_valid_polygon());
    }
}
