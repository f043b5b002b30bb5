//! Merchant storage seam
//!
//! The registry core only needs three operations from its storage
//! collaborator: insert with id assignment, exact-email lookup, and a full
//! listing. `InMemoryStore` backs tests and bootstrap; a persistent engine
//! plugs in behind the same trait.

use crate::error::{Error, Result};
use crate::types::{Merchant, MerchantId, NewMerchant};
use chrono::Utc;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

/// Storage interface for merchant identities
pub trait MerchantStore: Send + Sync {
    /// Insert a new merchant, assigning its id.
    ///
    /// Fails with [`Error::DuplicateEmail`] if a merchant with the same
    /// email already exists; the check and the insert are atomic.
    fn insert(&self, candidate: NewMerchant) -> Result<Merchant>;

    /// Find a merchant by exact (case-sensitive) email match
    fn find_by_email(&self, email: &str) -> Result<Option<Merchant>>;

    /// All known merchants
    fn list_all(&self) -> Result<Vec<Merchant>>;

    /// Number of stored merchants
    fn count(&self) -> Result<usize>;
}

/// In-memory merchant store
///
/// Keyed by email so the uniqueness invariant is enforced atomically per
/// key; concurrent inserts for the same email cannot both succeed.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    by_email: DashMap<String, Merchant>,
}

impl InMemoryStore {
    /// Empty store
    pub fn new() -> Self {
        Self {
            by_email: DashMap::new(),
        }
    }
}

impl MerchantStore for InMemoryStore {
    fn insert(&self, candidate: NewMerchant) -> Result<Merchant> {
        match self.by_email.entry(candidate.email.clone()) {
            Entry::Occupied(_) => Err(Error::DuplicateEmail(candidate.email)),
            Entry::Vacant(slot) => {
                let merchant = Merchant {
                    id: MerchantId::generate(),
                    name: candidate.name,
                    email: candidate.email,
                    api_key: candidate.api_key,
                    api_secret: candidate.api_secret,
                    created_at: Utc::now(),
                };
                slot.insert(merchant.clone());
                Ok(merchant)
            }
        }
    }

    fn find_by_email(&self, email: &str) -> Result<Option<Merchant>> {
        Ok(self.by_email.get(email).map(|entry| entry.value().clone()))
    }

    fn list_all(&self) -> Result<Vec<Merchant>> {
        Ok(self
            .by_email
            .iter()
            .map(|entry| entry.value().clone())
            .collect())
    }

    fn count(&self) -> Result<usize> {
        Ok(self.by_email.len())
    }
}
