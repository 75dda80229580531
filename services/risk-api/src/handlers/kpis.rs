//! KPI handlers.
//!
//! Both endpoints aggregate over the whole portfolio unless `ids` narrows
//! the input to a selection of assets.

use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Extension, Query},
    Json,
};
use serde::Deserialize;

use portfolio::{flood_kpis, parse_id_list, portfolio_kpis, FloodKpis, PortfolioKpis};
use risk_common::Asset;

use super::record_request;
use crate::error::ApiResult;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct KpiParams {
    /// Comma-separated asset identifiers to aggregate over.
    pub ids: Option<String>,
}

fn selection<'a>(state: &'a AppState, params: &KpiParams) -> Option<Vec<&'a Asset>> {
    params
        .ids
        .as_deref()
        .map(|ids| state.assets.select(&parse_id_list(ids)))
}

/// GET /api/kpis/portfolio - Portfolio totals
pub async fn portfolio_kpis_handler(
    Extension(state): Extension<Arc<AppState>>,
    params: Result<Query<KpiParams>, QueryRejection>,
) -> ApiResult<Json<PortfolioKpis>> {
    record_request("kpis_portfolio");
    let Query(params) = params?;

    let kpis = match selection(&state, &params) {
        Some(selected) => portfolio_kpis(selected),
        None => portfolio_kpis(state.assets.all()),
    };
    Ok(Json(kpis))
}

/// GET /api/kpis/flood - Flood exposure and loss estimate
pub async fn flood_kpis_handler(
    Extension(state): Extension<Arc<AppState>>,
    params: Result<Query<KpiParams>, QueryRejection>,
) -> ApiResult<Json<FloodKpis>> {
    record_request("kpis_flood");
    let Query(params) = params?;

    let kpis = match selection(&state, &params) {
        Some(selected) => flood_kpis(selected),
        None => flood_kpis(state.assets.all()),
    };
    Ok(Json(kpis))
}
