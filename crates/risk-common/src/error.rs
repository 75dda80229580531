//! Error types for the risk services.

use thiserror::Error;

/// Result type alias using RiskError.
pub type RiskResult<T> = Result<T, RiskError>;

/// Primary error type for risk analytics operations.
#[derive(Debug, Error)]
pub enum RiskError {
    // === Lookup Errors ===
    #[error("Asset not found: {0}")]
    AssetNotFound(String),

    #[error("Flood zone not found: {0}")]
    FloodZoneNotFound(String),

    // === Request Errors ===
    #[error("Invalid request: {0}")]
    Validation(String),

    // === Storage Errors ===
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl RiskError {
    /// Get the HTTP status code for this error.
    pub fn http_status_code(&self) -> u16 {
        match self {
            RiskError::AssetNotFound(_) | RiskError::FloodZoneNotFound(_) => 404,
            RiskError::Validation(_) => 400,
            RiskError::StorageUnavailable(_) => 503,
            RiskError::Storage(_) => 500,
        }
    }

    /// Whether the caller is at fault (4xx) rather than the service.
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.http_status_code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(RiskError::AssetNotFound("A".to_string()).http_status_code(), 404);
        assert_eq!(RiskError::FloodZoneNotFound("FZ".to_string()).http_status_code(), 404);
        assert_eq!(RiskError::Validation("bad".to_string()).http_status_code(), 400);
        assert_eq!(RiskError::StorageUnavailable("down".to_string()).http_status_code(), 503);
        assert_eq!(RiskError::Storage("corrupt".to_string()).http_status_code(), 500);
    }

    #[test]
    fn test_client_error_classification() {
        assert!(RiskError::AssetNotFound("x".to_string()).is_client_error());
        assert!(RiskError::Validation("x".to_string()).is_client_error());
        assert!(!RiskError::StorageUnavailable("x".to_string()).is_client_error());
    }

    #[test]
    fn test_error_display() {
        let err = RiskError::FloodZoneNotFound("FZ-999".to_string());
        let display = format!("{}", err);
        assert!(display.contains("Flood zone not found"));
        assert!(display.contains("FZ-999"));
    }
}
