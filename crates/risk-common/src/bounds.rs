//! Latitude/longitude rectangles used for area selection.

use serde::{Deserialize, Serialize};

use crate::error::RiskError;

/// A geographic rectangle in degrees. Edges are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoBounds {
    pub min_lat: f64,
    pub min_lng: f64,
    pub max_lat: f64,
    pub max_lng: f64,
}

impl GeoBounds {
    pub fn new(min_lat: f64, min_lng: f64, max_lat: f64, max_lng: f64) -> Self {
        Self {
            min_lat,
            min_lng,
            max_lat,
            max_lng,
        }
    }

    /// Parse a query parameter string: "min_lat,min_lng,max_lat,max_lng"
    pub fn from_query_string(s: &str) -> Result<Self, BoundsParseError> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != 4 {
            return Err(BoundsParseError::InvalidFormat(s.to_string()));
        }

        let mut values = [0.0f64; 4];
        for (slot, part) in values.iter_mut().zip(&parts) {
            *slot = part
                .parse()
                .map_err(|_| BoundsParseError::InvalidNumber(part.to_string()))?;
        }

        let bounds = Self::new(values[0], values[1], values[2], values[3]);
        if bounds.min_lat > bounds.max_lat || bounds.min_lng > bounds.max_lng {
            return Err(BoundsParseError::Inverted(s.to_string()));
        }
        Ok(bounds)
    }

    /// Check if a point is inside the rectangle.
    pub fn contains(&self, lat: f64, lng: f64) -> bool {
        lat >= self.min_lat && lat <= self.max_lat && lng >= self.min_lng && lng <= self.max_lng
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BoundsParseError {
    #[error("Invalid bbox format: {0}. Expected 'min_lat,min_lng,max_lat,max_lng'")]
    InvalidFormat(String),

    #[error("Invalid number in bbox: {0}")]
    InvalidNumber(String),

    #[error("Inverted bbox: {0}")]
    Inverted(String),
}

impl From<BoundsParseError> for RiskError {
    fn from(err: BoundsParseError) -> Self {
        RiskError::Validation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bounds() {
        let b = GeoBounds::from_query_string("37.70,-122.50,37.80,-122.35").unwrap();
        assert_eq!(b.min_lat, 37.70);
        assert_eq!(b.min_lng, -122.50);
        assert_eq!(b.max_lat, 37.80);
        assert_eq!(b.max_lng, -122.35);
    }

    #[test]
    fn test_parse_bounds_rejects_bad_input() {
        assert!(matches!(
            GeoBounds::from_query_string("1,2,3"),
            Err(BoundsParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            GeoBounds::from_query_string("1,two,3,4"),
            Err(BoundsParseError::InvalidNumber(_))
        ));
        assert!(matches!(
            GeoBounds::from_query_string("38,-122,37,-121"),
            Err(BoundsParseError::Inverted(_))
        ));
    }

    #[test]
    fn test_contains_is_inclusive() {
        let b = GeoBounds::new(0.0, 0.0, 1.0, 1.0);
        assert!(b.contains(0.0, 0.0));
        assert!(b.contains(1.0, 1.0));
        assert!(b.contains(0.5, 0.5));
        assert!(!b.contains(1.01, 0.5));
        assert!(!b.contains(0.5, -0.01));
    }
}
