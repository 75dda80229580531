//! Service configuration.

use anyhow::{bail, Context, Result};
use axum::http::{HeaderValue, Method};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, Any, CorsLayer};
use tracing::info;

/// Where status checks are persisted.
#[derive(Debug, Clone, PartialEq)]
pub enum StatusBackend {
    Postgres {
        database_url: String,
        db_name: Option<String>,
    },
    Memory,
}

/// Allowed cross-origin request sources.
#[derive(Debug, Clone, PartialEq)]
pub enum CorsOrigins {
    Any,
    List(Vec<String>),
}

impl CorsOrigins {
    /// Parse a comma-separated origin list. `*` (alone or in the list) allows all.
    pub fn parse(raw: &str) -> Result<Self> {
        let origins: Vec<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();

        if origins.is_empty() || origins.iter().any(|o| o == "*") {
            return Ok(CorsOrigins::Any);
        }

        for origin in &origins {
            HeaderValue::from_str(origin)
                .with_context(|| format!("Invalid CORS origin: {}", origin))?;
        }
        Ok(CorsOrigins::List(origins))
    }

    /// Build the CORS layer.
    ///
    /// An explicit list allows credentials and mirrors the requested method
    /// and headers; the wildcard form cannot carry credentials.
    pub fn layer(&self) -> CorsLayer {
        match self {
            CorsOrigins::Any => {
                info!("CORS allowing any origin");
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any)
            }
            CorsOrigins::List(origins) => {
                info!(origins = ?origins, "CORS configured with allowed origins");
                let values: Vec<HeaderValue> = origins
                    .iter()
                    .filter_map(|o| HeaderValue::from_str(o).ok())
                    .collect();
                CorsLayer::new()
                    .allow_origin(AllowOrigin::list(values))
                    .allow_methods(AllowMethods::list([Method::GET, Method::POST, Method::OPTIONS]))
                    .allow_headers(AllowHeaders::mirror_request())
                    .allow_credentials(true)
            }
        }
    }
}

/// Runtime configuration assembled from CLI flags and environment.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub status_backend: StatusBackend,
    pub cors_origins: CorsOrigins,
    pub asset_count: usize,
    pub seed: u64,
}

impl ServiceConfig {
    /// Validate raw settings into a config.
    ///
    /// A database URL is required unless the in-memory status log is selected.
    pub fn new(
        database_url: Option<String>,
        db_name: Option<String>,
        in_memory: bool,
        cors_origins: &str,
        asset_count: usize,
        seed: u64,
    ) -> Result<Self> {
        let status_backend = if in_memory {
            StatusBackend::Memory
        } else {
            match database_url.filter(|u| !u.trim().is_empty()) {
                Some(database_url) => StatusBackend::Postgres {
                    database_url,
                    db_name: db_name.filter(|n| !n.trim().is_empty()),
                },
                None => bail!("DATABASE_URL is required unless --in-memory is set"),
            }
        };

        Ok(Self {
            status_backend,
            cors_origins: CorsOrigins::parse(cors_origins)?,
            asset_count,
            seed,
        })
    }
}
