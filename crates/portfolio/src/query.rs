//! Asset filtering criteria.

use std::collections::HashSet;

use risk_common::{Asset, AssetType, GeoBounds, RiskResult};

/// Criteria for narrowing the asset list. An empty filter matches everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssetFilter {
    /// Keep only these asset types. `None` keeps all types.
    pub asset_types: Option<HashSet<AssetType>>,
    /// Keep only assets flagged as inside a flood zone.
    pub exposed_only: bool,
    /// Keep only assets inside this rectangle.
    pub bbox: Option<GeoBounds>,
}

impl AssetFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a filter from raw query-string values.
    ///
    /// `types` is a comma-separated list of asset types and `bbox` is
    /// `min_lat,min_lng,max_lat,max_lng`. Blank values are treated as absent.
    pub fn from_params(
        types: Option<&str>,
        exposed_only: Option<bool>,
        bbox: Option<&str>,
    ) -> RiskResult<Self> {
        let asset_types = match types.map(str::trim).filter(|s| !s.is_empty()) {
            Some(list) => Some(
                list.split(',')
                    .filter(|s| !s.trim().is_empty())
                    .map(str::parse::<AssetType>)
                    .collect::<RiskResult<HashSet<AssetType>>>()?,
            ),
            None => None,
        };

        let bbox = match bbox.map(str::trim).filter(|s| !s.is_empty()) {
            Some(s) => Some(GeoBounds::from_query_string(s)?),
            None => None,
        };

        Ok(Self {
            asset_types,
            exposed_only: exposed_only.unwrap_or(false),
            bbox,
        })
    }

    pub fn with_types(mut self, types: impl IntoIterator<Item = AssetType>) -> Self {
        self.asset_types = Some(types.into_iter().collect());
        self
    }

    pub fn exposed_only(mut self) -> Self {
        self.exposed_only = true;
        self
    }

    pub fn with_bbox(mut self, bbox: GeoBounds) -> Self {
        self.bbox = Some(bbox);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.asset_types.is_none() && !self.exposed_only && self.bbox.is_none()
    }

    /// Check whether an asset passes every criterion.
    pub fn matches(&self, asset: &Asset) -> bool {
        if let Some(types) = &self.asset_types {
            if !types.contains(&asset.asset_type) {
                return false;
            }
        }
        if self.exposed_only && !asset.in_flood_zone {
            return false;
        }
        if let Some(bbox) = &self.bbox {
            if !bbox.contains(asset.latitude, asset.longitude) {
                return false;
            }
        }
        true
    }
}

/// Split a comma-separated identifier list, dropping blanks.
pub fn parse_id_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(String::from)
        .collect()
}
