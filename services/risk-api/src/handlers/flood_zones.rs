//! Flood zone handlers.

use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    Json,
};

use risk_common::FloodZone;

use super::record_request;
use crate::error::ApiResult;
use crate::state::AppState;

/// GET /api/flood-zones - All flood zones
pub async fn list_flood_zones_handler(
    Extension(state): Extension<Arc<AppState>>,
) -> Json<Vec<FloodZone>> {
    record_request("flood_zones");
    Json(state.flood_zones.all().to_vec())
}

/// GET /api/flood-zones/:zone_id - A single flood zone
pub async fn get_flood_zone_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path(zone_id): Path<String>,
) -> ApiResult<Json<FloodZone>> {
    record_request("flood_zone");
    let zone = state.flood_zones.get(&zone_id)?;
    Ok(Json(zone.clone()))
}
