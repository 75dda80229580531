//! In-memory status log.

use async_trait::async_trait;
use tokio::sync::RwLock;

use risk_common::{RiskResult, StatusCheck};

use crate::status_log::{parse_timestamp, StatusLog, MAX_STATUS_CHECKS};

/// Status log kept in process memory.
///
/// Timestamps are held as RFC 3339 strings, the same form the database
/// stores, so reads go through the same parsing path.
#[derive(Default)]
pub struct MemoryStatusLog {
    records: RwLock<Vec<(String, String, String)>>,
}

impl MemoryStatusLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl StatusLog for MemoryStatusLog {
    async fn append(&self, client_name: &str) -> RiskResult<StatusCheck> {
        let check = StatusCheck::new(client_name);
        self.records.write().await.push((
            check.id.clone(),
            check.client_name.clone(),
            check.timestamp.to_rfc3339(),
        ));
        Ok(check)
    }

    async fn list(&self) -> RiskResult<Vec<StatusCheck>> {
        let records = self.records.read().await;
        records
            .iter()
            .take(MAX_STATUS_CHECKS)
            .map(|(id, client_name, recorded_at)| {
                Ok(StatusCheck {
                    id: id.clone(),
                    client_name: client_name.clone(),
                    timestamp: parse_timestamp(recorded_at)?,
                })
            })
            .collect()
    }
}
