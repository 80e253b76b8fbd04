//! Error types for Bolide.
//!
//! The fetch path is the only fallible surface in the system: request
//! handlers always answer 200 with best-effort data, so errors here are
//! logged at the call site rather than surfaced to clients.

use thiserror::Error;

/// Result type alias using `BolideError`.
pub type Result<T> = std::result::Result<T, BolideError>;

/// Main error type for all Bolide operations.
#[derive(Debug, Error)]
pub enum BolideError {
    /// Dataset request failed (unreachable source or non-success status).
    #[error("Dataset fetch failed: {0}")]
    FetchFailed(String),

    /// Dataset body could not be decoded as a record array.
    #[error("Dataset decode failed: {0}")]
    DecodeFailed(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// File I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_includes_context() {
        let err = BolideError::FetchFailed("connection refused".into());
        assert_eq!(err.to_string(), "Dataset fetch failed: connection refused");
    }

    #[test]
    fn test_json_error_converts() {
        let json_err = serde_json::from_str::<Vec<u8>>("not json").unwrap_err();
        let err: BolideError = json_err.into();
        assert!(matches!(err, BolideError::JsonError(_)));
    }
}
