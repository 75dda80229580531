//! HTTP request handlers for the risk API.

pub mod assets;
pub mod flood_zones;
pub mod kpis;
pub mod metrics;
pub mod root;
pub mod status;

/// Count a request against an endpoint label.
pub(crate) fn record_request(endpoint: &'static str) {
    ::metrics::counter!("risk_api_requests_total", "endpoint" => endpoint).increment(1);
}
