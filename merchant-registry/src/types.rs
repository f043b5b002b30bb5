//! Merchant identity types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque merchant identifier, assigned by the store on creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MerchantId(Uuid);

impl MerchantId {
    /// Generate a fresh id (store-side only)
    pub(crate) fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for MerchantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A merchant's credential and contact identity
///
/// Immutable after creation: created once via provisioning, read
/// thereafter. Credentials are opaque strings generated out-of-band and
/// are never rotated here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Merchant {
    /// Store-assigned identifier
    pub id: MerchantId,

    /// Display name
    pub name: String,

    /// Contact email, unique across all merchants
    pub email: String,

    /// API key the merchant authenticates with
    pub api_key: String,

    /// API secret paired with the key
    pub api_secret: String,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// Candidate identity for provisioning, before an id is assigned
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMerchant {
    /// Display name (non-empty)
    pub name: String,

    /// Contact email (non-empty, natural key for provisioning)
    pub email: String,

    /// API key
    pub api_key: String,

    /// API secret
    pub api_secret: String,
}

impl NewMerchant {
    /// Candidate identity from its fields
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            api_key: api_key.into(),
            api_secret: api_secret.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merchant_id_display_is_uuid() {
        let id = MerchantId::generate();
        assert_eq!(id.to_string(), id.as_uuid().to_string());
    }

    #[test]
    fn test_ids_are_unique() {
        assert_ne!(MerchantId::generate(), MerchantId::generate());
    }

    #[test]
    fn test_new_merchant_fields() {
        let candidate = NewMerchant::new(
            "Test Merchant",
            "test@example.com",
            "key_test_abc123",
            "secret_test_xyz789",
        );

        assert_eq!(candidate.name, "Test Merchant");
        assert_eq!(candidate.email, "test@example.com");
    }
}
