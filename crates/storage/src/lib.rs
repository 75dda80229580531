//! Storage abstractions for the INSpace risk services.
//!
//! Provides the append-only status log with:
//! - PostgreSQL persistence for deployed services
//! - An in-memory implementation for tests and database-less runs

pub mod memory;
pub mod status_log;

pub use memory::MemoryStatusLog;
pub use status_log::{PgStatusLog, StatusLog, MAX_STATUS_CHECKS};
