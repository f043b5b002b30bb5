//! Startup seeding of the bootstrap merchant
//!
//! Runs the idempotent provisioning upsert on every process start, so a
//! fresh deployment and a restart behave identically.

use crate::config::SeedConfig;
use crate::error::Result;
use crate::metrics::Metrics;
use merchant_registry::{ensure_merchant, MerchantStore, NewMerchant, ProvisionOutcome};
use tracing::{info, warn};

/// Ensure the configured merchant exists.
///
/// The three provisioning outcomes are reported distinctly even though all
/// are non-fatal; only a candidate violating the identity invariants
/// propagates an error. Returns `None` when seeding is disabled.
pub fn seed_merchant(
    store: &dyn MerchantStore,
    seed: &SeedConfig,
    metrics: &Metrics,
) -> Result<Option<ProvisionOutcome>> {
    if !seed.enabled {
        info!("merchant seeding disabled, skipping");
        return Ok(None);
    }

    let candidate = NewMerchant::new(
        seed.name.clone(),
        seed.email.clone(),
        seed.api_key.clone(),
        seed.api_secret.clone(),
    );
    let outcome = ensure_merchant(store, candidate)?;

    match &outcome {
        ProvisionOutcome::Created(merchant) => {
            metrics.record_merchant_provisioned();
            info!(merchant_id = %merchant.id, email = %merchant.email, "seed merchant created");
        }
        ProvisionOutcome::AlreadyExists(merchant) => {
            info!(
                merchant_id = %merchant.id,
                email = %merchant.email,
                "seed merchant already exists, skipping insertion"
            );
        }
        ProvisionOutcome::ConflictIgnored => {
            metrics.record_provision_conflict();
            warn!(email = %seed.email, "seed merchant insert conflicted, ignoring");
        }
    }

    Ok(Some(outcome))
}
