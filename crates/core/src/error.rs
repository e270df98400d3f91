//! Catalog error model.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Client-facing message for any upstream document failure.
pub const UPSTREAM_ERROR_MESSAGE: &str = "Error when getting products data";

/// Result type used across the catalog layers.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog-level error.
///
/// Attribute lookups that miss are not errors; they simply contribute nothing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// One of the upstream documents could not be fetched or parsed.
    #[error("upstream {document} unavailable: {reason}")]
    UpstreamUnavailable {
        document: &'static str,
        reason: String,
    },

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl CatalogError {
    pub fn upstream(document: &'static str, reason: impl Into<String>) -> Self {
        Self::UpstreamUnavailable {
            document,
            reason: reason.into(),
        }
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    /// HTTP-style status code carried in [`ErrorResult::code`].
    pub fn status_code(&self) -> u16 {
        match self {
            CatalogError::UpstreamUnavailable { .. } => 500,
            CatalogError::InvalidId(_) => 400,
        }
    }
}

/// Error envelope returned to callers: `{ "error": ..., "code": ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResult {
    pub error: String,
    pub code: u16,
}

impl ErrorResult {
    pub fn new(error: impl Into<String>, code: u16) -> Self {
        Self {
            error: error.into(),
            code,
        }
    }
}

impl From<&CatalogError> for ErrorResult {
    fn from(err: &CatalogError) -> Self {
        match err {
            // Upstream details stay in the logs.
            CatalogError::UpstreamUnavailable { .. } => {
                ErrorResult::new(UPSTREAM_ERROR_MESSAGE, err.status_code())
            }
            CatalogError::InvalidId(_) => ErrorResult::new("Invalid product id", err.status_code()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_failure_maps_to_generic_500_envelope() {
        let err = CatalogError::upstream("products", "connection refused");
        let result = ErrorResult::from(&err);

        assert_eq!(result.code, 500);
        assert_eq!(result.error, UPSTREAM_ERROR_MESSAGE);
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn error_result_serializes_to_error_and_code() {
        let json = serde_json::to_value(ErrorResult::new("nope", 404)).unwrap();
        assert_eq!(json, serde_json::json!({ "error": "nope", "code": 404 }));
    }
}
