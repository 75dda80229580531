//! Asset list, lookup and search handlers.

use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Extension, Path, Query},
    Json,
};
use serde::Deserialize;
use tracing::debug;

use portfolio::AssetFilter;
use risk_common::Asset;

use super::record_request;
use crate::error::ApiResult;
use crate::state::AppState;

/// Optional filters for the asset list.
#[derive(Debug, Default, Deserialize)]
pub struct AssetListParams {
    /// Comma-separated asset types, e.g. `retail,factories`.
    pub types: Option<String>,
    pub exposed_only: Option<bool>,
    /// `min_lat,min_lng,max_lat,max_lng`
    pub bbox: Option<String>,
}

/// GET /api/assets - All assets, optionally filtered
pub async fn list_assets_handler(
    Extension(state): Extension<Arc<AppState>>,
    params: Result<Query<AssetListParams>, QueryRejection>,
) -> ApiResult<Json<Vec<Asset>>> {
    record_request("assets");
    let Query(params) = params?;

    let filter = AssetFilter::from_params(
        params.types.as_deref(),
        params.exposed_only,
        params.bbox.as_deref(),
    )?;

    if filter.is_empty() {
        return Ok(Json(state.assets.all().to_vec()));
    }

    let assets: Vec<Asset> = state.assets.filter(&filter).into_iter().cloned().collect();
    debug!(matched = assets.len(), "Filtered assets");
    Ok(Json(assets))
}

/// GET /api/assets/:asset_id - A single asset
pub async fn get_asset_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path(asset_id): Path<String>,
) -> ApiResult<Json<Asset>> {
    record_request("asset");
    let asset = state.assets.get(&asset_id)?;
    Ok(Json(asset.clone()))
}

/// GET /api/assets/search/:query - Search by identifier or address
pub async fn search_assets_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path(query): Path<String>,
) -> Json<Vec<Asset>> {
    record_request("asset_search");
    let results: Vec<Asset> = state.assets.search(&query).into_iter().cloned().collect();
    debug!(query = %query, matched = results.len(), "Asset search");
    Json(results)
}
