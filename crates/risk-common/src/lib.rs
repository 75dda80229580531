//! Common types shared across the INSpace risk services.

pub mod asset;
pub mod bounds;
pub mod error;
pub mod flood_zone;
pub mod status;

pub use asset::{Asset, AssetType};
pub use bounds::{BoundsParseError, GeoBounds};
pub use error::{RiskError, RiskResult};
pub use flood_zone::{FloodCategory, FloodZone};
pub use status::{StatusCheck, StatusCheckCreate};
