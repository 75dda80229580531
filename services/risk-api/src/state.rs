//! Application state for the risk API.

use anyhow::Result;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;
use tracing::info;

use portfolio::{default_flood_zones, generate_assets, AssetStore, FloodZoneStore};
use storage::{MemoryStatusLog, PgStatusLog, StatusLog};

use crate::config::{ServiceConfig, StatusBackend};

/// Shared application state.
///
/// The stores are built once and never mutated; only the status log touches
/// external state.
pub struct AppState {
    pub assets: AssetStore,
    pub flood_zones: FloodZoneStore,
    pub status_log: Arc<dyn StatusLog>,
    /// Present when a Prometheus recorder is installed.
    pub prometheus: Option<PrometheusHandle>,
}

impl AppState {
    pub fn new(
        assets: AssetStore,
        flood_zones: FloodZoneStore,
        status_log: Arc<dyn StatusLog>,
    ) -> Self {
        Self {
            assets,
            flood_zones,
            status_log,
            prometheus: None,
        }
    }

    pub fn with_prometheus(mut self, handle: PrometheusHandle) -> Self {
        self.prometheus = Some(handle);
        self
    }

    /// Generate the mock portfolio and connect the configured status log.
    pub async fn from_config(config: &ServiceConfig) -> Result<Self> {
        let assets = AssetStore::new(generate_assets(config.asset_count, config.seed));
        let flood_zones = FloodZoneStore::new(default_flood_zones());
        info!(
            assets = assets.len(),
            flood_zones = flood_zones.len(),
            seed = config.seed,
            "Portfolio generated"
        );

        let status_log: Arc<dyn StatusLog> = match &config.status_backend {
            StatusBackend::Postgres {
                database_url,
                db_name,
            } => {
                let log = PgStatusLog::connect(database_url, db_name.as_deref()).await?;
                log.migrate().await?;
                Arc::new(log)
            }
            StatusBackend::Memory => {
                info!("Using in-memory status log");
                Arc::new(MemoryStatusLog::new())
            }
        };

        Ok(Self::new(assets, flood_zones, status_log))
    }
}
