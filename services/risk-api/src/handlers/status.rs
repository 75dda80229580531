//! Status check handlers.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension},
    Json,
};
use tracing::info;

use risk_common::{StatusCheck, StatusCheckCreate};

use super::record_request;
use crate::error::ApiResult;
use crate::state::AppState;

/// POST /api/status - Record a status check
pub async fn create_status_check_handler(
    Extension(state): Extension<Arc<AppState>>,
    body: Result<Json<StatusCheckCreate>, JsonRejection>,
) -> ApiResult<Json<StatusCheck>> {
    record_request("status_create");
    let Json(input) = body?;

    let check = state.status_log.append(&input.client_name).await?;
    ::metrics::counter!("status_checks_created_total").increment(1);
    info!(id = %check.id, client = %check.client_name, "Status check recorded");

    Ok(Json(check))
}

/// GET /api/status - All recorded status checks
pub async fn list_status_checks_handler(
    Extension(state): Extension<Arc<AppState>>,
) -> ApiResult<Json<Vec<StatusCheck>>> {
    record_request("status_list");
    let checks = state.status_log.list().await?;
    Ok(Json(checks))
}
