//! Router construction.

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::handlers;
use crate::state::AppState;

/// Build the full application router.
pub fn build_router(state: Arc<AppState>, cors: CorsLayer) -> Router {
    Router::new()
        // Service identity and liveness
        .route("/api", get(handlers::root::root_handler))
        .route("/api/", get(handlers::root::root_handler))
        .route("/api/health", get(handlers::root::health_handler))
        // Assets
        .route("/api/assets", get(handlers::assets::list_assets_handler))
        .route(
            "/api/assets/:asset_id",
            get(handlers::assets::get_asset_handler),
        )
        .route(
            "/api/assets/search/:query",
            get(handlers::assets::search_assets_handler),
        )
        // Flood zones
        .route(
            "/api/flood-zones",
            get(handlers::flood_zones::list_flood_zones_handler),
        )
        .route(
            "/api/flood-zones/:zone_id",
            get(handlers::flood_zones::get_flood_zone_handler),
        )
        // KPIs
        .route(
            "/api/kpis/portfolio",
            get(handlers::kpis::portfolio_kpis_handler),
        )
        .route("/api/kpis/flood", get(handlers::kpis::flood_kpis_handler))
        // Status log
        .route(
            "/api/status",
            get(handlers::status::list_status_checks_handler)
                .post(handlers::status::create_status_check_handler),
        )
        // Metrics
        .route("/metrics", get(handlers::metrics::metrics_handler))
        // Middleware
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
}
