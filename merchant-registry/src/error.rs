//! Error types for the merchant registry

use thiserror::Error;

/// Result type for registry operations
pub type Result<T> = std::result::Result<T, Error>;

/// Merchant registry errors
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// A merchant with this email already exists
    #[error("Merchant already exists for email: {0}")]
    DuplicateEmail(String),

    /// Candidate identity fails the identity invariants
    #[error("Invalid merchant identity: {0}")]
    InvalidIdentity(String),

    /// Storage layer failure
    #[error("Storage error: {0}")]
    Storage(String),
}
