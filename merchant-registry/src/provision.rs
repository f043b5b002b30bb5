//! Idempotent merchant provisioning
//!
//! `ensure_merchant` is safe to call on every process start and from
//! concurrent callers: the end state is at most one record per email, and
//! duplicate insert attempts are swallowed rather than surfaced.

use crate::error::{Error, Result};
use crate::store::MerchantStore;
use crate::types::{Merchant, NewMerchant};
use tracing::{debug, info, warn};

/// Outcome of an `ensure_merchant` call
///
/// The lost-race / rejected-insert path is an explicit variant so callers
/// and tests can observe it, even though it is never an error.
#[derive(Debug, Clone, PartialEq)]
pub enum ProvisionOutcome {
    /// No merchant existed for the email; one was created
    Created(Merchant),
    /// A merchant already existed for the email; nothing was changed
    AlreadyExists(Merchant),
    /// The insert was rejected (concurrent creation or storage refusal);
    /// the failure was swallowed and at most logged
    ConflictIgnored,
}

/// Idempotent upsert of a merchant identity, keyed by email.
///
/// Looks up the candidate's email first and creates the record only when
/// absent. Insert failures are treated as "already exists": provisioning
/// is non-critical bootstrap behavior, so the failure is logged and
/// swallowed, never propagated. The only error path is a candidate that
/// violates the identity invariants.
pub fn ensure_merchant(
    store: &dyn MerchantStore,
    candidate: NewMerchant,
) -> Result<ProvisionOutcome> {
    if candidate.email.is_empty() {
        return Err(Error::InvalidIdentity("email must be non-empty".to_string()));
    }
    if candidate.name.is_empty() {
        return Err(Error::InvalidIdentity("name must be non-empty".to_string()));
    }

    if let Some(existing) = store.find_by_email(&candidate.email)? {
        debug!(email = %existing.email, merchant_id = %existing.id, "merchant already provisioned");
        return Ok(ProvisionOutcome::AlreadyExists(existing));
    }

    match store.insert(candidate) {
        Ok(merchant) => {
            info!(email = %merchant.email, merchant_id = %merchant.id, "merchant created");
            Ok(ProvisionOutcome::Created(merchant))
        }
        Err(Error::DuplicateEmail(email)) => {
            warn!(email = %email, "concurrent merchant creation detected, ignoring");
            Ok(ProvisionOutcome::ConflictIgnored)
        }
        Err(err) => {
            warn!(error = %err, "merchant insert rejected by store, ignoring");
            Ok(ProvisionOutcome::ConflictIgnored)
        }
    }
}
