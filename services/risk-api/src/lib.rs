//! INSpace Risk API Service Library
//!
//! HTTP surface over the in-memory portfolio stores, the KPI aggregator
//! and the status log.

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;
