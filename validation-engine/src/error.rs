//! The stable error taxonomy crossing the API boundary

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Result type for request validation
pub type Result<T> = std::result::Result<T, ValidationError>;

/// Closed set of external error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Request rejected by validation
    BadRequestError,
}

impl ErrorCode {
    /// Wire-facing code string
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::BadRequestError => "BAD_REQUEST_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error payload returned to API callers on validation failure
///
/// This is the only artifact crossing the API boundary when a request is
/// rejected. Merchants integrate against the exact `code` and `description`
/// strings, so both are drawn from fixed tables rather than raw engine text.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[error("{code}: {description}")]
pub struct ValidationError {
    /// Stable error code
    pub code: ErrorCode,
    /// Stable human-readable description
    pub description: String,
}

impl ValidationError {
    /// Build a `BAD_REQUEST_ERROR` payload
    pub fn bad_request(description: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::BadRequestError,
            description: description.into(),
        }
    }

    /// HTTP status this payload is served with
    pub fn http_status(&self) -> u16 {
        match self.code {
            ErrorCode::BadRequestError => 400,
        }
    }
}
