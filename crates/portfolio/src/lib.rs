//! Portfolio data and risk analytics.
//!
//! Provides:
//! - Immutable asset and flood-zone stores built once at startup
//! - Lookup, search and filtering over those stores
//! - Portfolio and flood KPI aggregation, including the flood-loss estimate
//! - A seedable generator for mock portfolios

pub mod exposure;
pub mod generator;
pub mod kpi;
pub mod query;
pub mod store;

pub use exposure::{base_rate, depth_multiplier, exposure_factor};
pub use generator::{default_flood_zones, generate_assets, DEFAULT_ASSET_COUNT};
pub use kpi::{flood_kpis, portfolio_kpis, upper_median, FloodKpis, PortfolioKpis};
pub use query::{parse_id_list, AssetFilter};
pub use store::{AssetStore, FloodZoneStore};
