//! Immutable in-memory stores.
//!
//! Stores are built once at startup and only read afterwards, so lookups
//! are plain linear scans over the backing vector.

use std::collections::HashSet;

use risk_common::{Asset, FloodZone, RiskError, RiskResult};

use crate::query::AssetFilter;

/// Ordered collection of portfolio assets.
#[derive(Debug, Clone, Default)]
pub struct AssetStore {
    assets: Vec<Asset>,
}

impl AssetStore {
    pub fn new(assets: Vec<Asset>) -> Self {
        Self { assets }
    }

    pub fn all(&self) -> &[Asset] {
        &self.assets
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Find an asset by identifier. Returns the first match.
    pub fn get(&self, asset_id: &str) -> RiskResult<&Asset> {
        self.assets
            .iter()
            .find(|a| a.asset_id == asset_id)
            .ok_or_else(|| RiskError::AssetNotFound(asset_id.to_string()))
    }

    /// Case-insensitive substring search over identifier and address.
    ///
    /// An empty query matches every asset.
    pub fn search(&self, query: &str) -> Vec<&Asset> {
        let needle = query.to_lowercase();
        self.assets
            .iter()
            .filter(|a| {
                a.asset_id.to_lowercase().contains(&needle)
                    || a.address.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Assets matching every criterion of `filter`, in store order.
    pub fn filter(&self, filter: &AssetFilter) -> Vec<&Asset> {
        self.assets.iter().filter(|a| filter.matches(a)).collect()
    }

    /// Assets whose identifier appears in `ids`, in store order.
    ///
    /// Unknown identifiers are ignored.
    pub fn select<S: AsRef<str>>(&self, ids: &[S]) -> Vec<&Asset> {
        let wanted: HashSet<&str> = ids.iter().map(|id| id.as_ref()).collect();
        self.assets
            .iter()
            .filter(|a| wanted.contains(a.asset_id.as_str()))
            .collect()
    }
}

/// Ordered collection of flood zone polygons.
#[derive(Debug, Clone, Default)]
pub struct FloodZoneStore {
    zones: Vec<FloodZone>,
}

impl FloodZoneStore {
    pub fn new(zones: Vec<FloodZone>) -> Self {
        Self { zones }
    }

    pub fn all(&self) -> &[FloodZone] {
        &self.zones
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    /// Find a flood zone by identifier. Returns the first match.
    pub fn get(&self, flood_id: &str) -> RiskResult<&FloodZone> {
        self.zones
            .iter()
            .find(|z| z.flood_id == flood_id)
            .ok_or_else(|| RiskError::FloodZoneNotFound(flood_id.to_string()))
    }
}
