//! Metrics collection for observability
//!
//! # Metrics
//!
//! - `gateway_requests_validated_total` - Requests run through validation
//! - `gateway_validation_failures_total` - Requests rejected by validation
//! - `gateway_merchants_provisioned_total` - Merchants created by provisioning
//! - `gateway_provision_conflicts_total` - Provisioning conflicts swallowed

use prometheus::{IntCounter, Registry};
use std::sync::Arc;

/// Metrics collector
#[derive(Clone)]
pub struct Metrics {
    /// Requests run through validation
    pub requests_validated: IntCounter,

    /// Requests rejected by validation
    pub validation_failures: IntCounter,

    /// Merchants created by provisioning
    pub merchants_provisioned: IntCounter,

    /// Provisioning conflicts swallowed
    pub provision_conflicts: IntCounter,

    /// Prometheus registry
    pub registry: Arc<Registry>,
}

impl Metrics {
    /// Create new metrics collector
    pub fn new() -> prometheus::Result<Self> {
        let registry = Arc::new(Registry::new());

        let requests_validated = IntCounter::new(
            "gateway_requests_validated_total",
            "Requests run through validation",
        )?;
        registry.register(Box::new(requests_validated.clone()))?;

        let validation_failures = IntCounter::new(
            "gateway_validation_failures_total",
            "Requests rejected by validation",
        )?;
        registry.register(Box::new(validation_failures.clone()))?;

        let merchants_provisioned = IntCounter::new(
            "gateway_merchants_provisioned_total",
            "Merchants created by provisioning",
        )?;
        registry.register(Box::new(merchants_provisioned.clone()))?;

        let provision_conflicts = IntCounter::new(
            "gateway_provision_conflicts_total",
            "Provisioning conflicts swallowed",
        )?;
        registry.register(Box::new(provision_conflicts.clone()))?;

        Ok(Self {
            requests_validated,
            validation_failures,
            merchants_provisioned,
            provision_conflicts,
            registry,
        })
    }

    /// Record a validation call
    pub fn record_request_validated(&self) {
        self.requests_validated.inc();
    }

    /// Record a validation rejection
    pub fn record_validation_failure(&self) {
        self.validation_failures.inc();
    }

    /// Record a merchant created by provisioning
    pub fn record_merchant_provisioned(&self) {
        self.merchants_provisioned.inc();
    }

    /// Record a swallowed provisioning conflict
    pub fn record_provision_conflict(&self) {
        self.provision_conflicts.inc();
    }

    /// Get metrics registry
    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_creation() {
        let metrics = Metrics::new().unwrap();
        assert_eq!(metrics.requests_validated.get(), 0);
        assert_eq!(metrics.validation_failures.get(), 0);
    }

    #[test]
    fn test_record_validation() {
        let metrics = Metrics::new().unwrap();
        metrics.record_request_validated();
        metrics.record_request_validated();
        metrics.record_validation_failure();

        assert_eq!(metrics.requests_validated.get(), 2);
        assert_eq!(metrics.validation_failures.get(), 1);
    }

    #[test]
    fn test_record_provisioning() {
        let metrics = Metrics::new().unwrap();
        metrics.record_merchant_provisioned();
        metrics.record_provision_conflict();

        assert_eq!(metrics.merchants_provisioned.get(), 1);
        assert_eq!(metrics.provision_conflicts.get(), 1);
    }

    #[test]
    fn test_registry_gathers_all_counters() {
        let metrics = Metrics::new().unwrap();
        assert_eq!(metrics.registry().gather().len(), 4);
    }
}
