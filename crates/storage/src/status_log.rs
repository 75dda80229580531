//! Status check log backed by PostgreSQL.

use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{
    postgres::{PgConnectOptions, PgPoolOptions},
    FromRow, PgPool,
};
use tracing::{debug, info};

use risk_common::{RiskError, RiskResult, StatusCheck};

/// Upper bound on records returned by a single `list` call.
pub const MAX_STATUS_CHECKS: usize = 1000;

/// Append-only log of client status pings.
#[async_trait]
pub trait StatusLog: Send + Sync {
    /// Record a ping from `client_name` and return the stored check.
    async fn append(&self, client_name: &str) -> RiskResult<StatusCheck>;

    /// All recorded checks in insertion order, capped at [`MAX_STATUS_CHECKS`].
    async fn list(&self) -> RiskResult<Vec<StatusCheck>>;

    /// Release backend resources on shutdown.
    async fn close(&self) {}
}

/// Parse a persisted RFC 3339 timestamp back into UTC.
pub(crate) fn parse_timestamp(raw: &str) -> RiskResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RiskError::Storage(format!("Invalid stored timestamp '{}': {}", raw, e)))
}

fn map_sqlx_error(context: &str, err: sqlx::Error) -> RiskError {
    match err {
        sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed => {
            RiskError::StorageUnavailable(format!("{}: {}", context, err))
        }
        other => RiskError::Storage(format!("{}: {}", context, other)),
    }
}

#[derive(FromRow)]
struct StatusCheckRow {
    id: String,
    client_name: String,
    recorded_at: String,
}

impl TryFrom<StatusCheckRow> for StatusCheck {
    type Error = RiskError;

    fn try_from(row: StatusCheckRow) -> RiskResult<Self> {
        Ok(StatusCheck {
            id: row.id,
            client_name: row.client_name,
            timestamp: parse_timestamp(&row.recorded_at)?,
        })
    }
}

/// PostgreSQL-backed status log.
pub struct PgStatusLog {
    pool: PgPool,
}

impl PgStatusLog {
    /// Connect using a database URL, optionally overriding the database name.
    pub async fn connect(database_url: &str, db_name: Option<&str>) -> RiskResult<Self> {
        let mut options = PgConnectOptions::from_str(database_url)
            .map_err(|e| RiskError::StorageUnavailable(format!("Invalid database URL: {}", e)))?;
        if let Some(name) = db_name {
            options = options.database(name);
        }

        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect_with(options)
            .await
            .map_err(|e| map_sqlx_error("Connection failed", e))?;

        info!(database = ?db_name, "Connected to status log database");
        Ok(Self { pool })
    }

    /// Create the status table if it does not exist.
    pub async fn migrate(&self) -> RiskResult<()> {
        for statement in SCHEMA_SQL.split(';') {
            let trimmed = statement.trim();
            if !trimmed.is_empty() {
                sqlx::query(trimmed)
                    .execute(&self.pool)
                    .await
                    .map_err(|e| map_sqlx_error("Migration failed", e))?;
            }
        }

        Ok(())
    }
}

#[async_trait]
impl StatusLog for PgStatusLog {
    async fn append(&self, client_name: &str) -> RiskResult<StatusCheck> {
        let check = StatusCheck::new(client_name);

        sqlx::query("INSERT INTO status_checks (id, client_name, recorded_at) VALUES ($1, $2, $3)")
            .bind(&check.id)
            .bind(&check.client_name)
            .bind(check.timestamp.to_rfc3339())
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("Insert failed", e))?;

        debug!(id = %check.id, client = %check.client_name, "Recorded status check");
        Ok(check)
    }

    async fn list(&self) -> RiskResult<Vec<StatusCheck>> {
        let rows = sqlx::query_as::<_, StatusCheckRow>(
            "SELECT id, client_name, recorded_at FROM status_checks ORDER BY seq LIMIT $1",
        )
        .bind(MAX_STATUS_CHECKS as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("Query failed", e))?;

        rows.into_iter().map(StatusCheck::try_from).collect()
    }

    async fn close(&self) {
        self.pool.close().await;
        info!("Status log connection pool closed");
    }
}

const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS status_checks (
    seq BIGSERIAL,
    id TEXT PRIMARY KEY,
    client_name TEXT NOT NULL,
    recorded_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_status_checks_seq ON status_checks(seq)
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_timestamp_roundtrip() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 15, 12, 30, 0).unwrap();
        assert_eq!(parse_timestamp(&ts.to_rfc3339()).unwrap(), ts);
    }

    #[test]
    fn test_parse_timestamp_normalizes_offset() {
        let parsed = parse_timestamp("2024-01-15T14:30:00+02:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 1, 15, 12, 30, 0).unwrap());
    }

    #[test]
    fn test_parse_timestamp_rejects_garbage() {
        assert!(matches!(
            parse_timestamp("yesterday"),
            Err(RiskError::Storage(_))
        ));
    }

    #[test]
    fn test_row_conversion() {
        let row = StatusCheckRow {
            id: "0b6c5a8e-5f0b-4c4f-9d55-2f1f0b3a9e11".to_string(),
            client_name: "acme".to_string(),
            recorded_at: "2024-03-01T08:00:00+00:00".to_string(),
        };
        let check = StatusCheck::try_from(row).unwrap();
        assert_eq!(check.client_name, "acme");
        assert_eq!(check.timestamp, Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap());
    }

    #[test]
    fn test_connection_errors_are_unavailable() {
        assert!(matches!(
            map_sqlx_error("Query failed", sqlx::Error::PoolTimedOut),
            RiskError::StorageUnavailable(_)
        ));
        assert!(matches!(
            map_sqlx_error("Query failed", sqlx::Error::RowNotFound),
            RiskError::Storage(_)
        ));
    }
}
