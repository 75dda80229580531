//! Service identity and health handlers.

use axum::Json;
use chrono::Utc;
use serde::Serialize;

use super::record_request;

pub const SERVICE_NAME: &str = "INSpace Insurance Risk Analytics API";
pub const SERVICE_VERSION: &str = "1.0.0";

#[derive(Serialize)]
pub struct RootResponse {
    pub message: &'static str,
    pub version: &'static str,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

/// GET /api/ - Service identity
pub async fn root_handler() -> Json<RootResponse> {
    record_request("root");
    Json(RootResponse {
        message: SERVICE_NAME,
        version: SERVICE_VERSION,
    })
}

/// GET /api/health - Liveness check
pub async fn health_handler() -> Json<HealthResponse> {
    record_request("health");
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now().to_rfc3339(),
    })
}
