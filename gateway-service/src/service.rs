//! Gateway request-handling facade
//!
//! Composes the merchant registry and the request validator behind the
//! surface the transport layer calls into, recording metrics per call.

use crate::metrics::Metrics;
use merchant_registry::{Merchant, MerchantStore};
use std::sync::Arc;
use validation_engine::{RequestValidator, TransactionRequest, ValidationError};

/// Request-handling facade over the registry and the validator
///
/// Holds no mutable state of its own; every method is safe to call from
/// many request-handling tasks concurrently.
pub struct Gateway {
    store: Arc<dyn MerchantStore>,
    validator: RequestValidator,
    metrics: Metrics,
}

impl Gateway {
    /// Wire a gateway from its collaborators
    pub fn new(store: Arc<dyn MerchantStore>, validator: RequestValidator, metrics: Metrics) -> Self {
        Self {
            store,
            validator,
            metrics,
        }
    }

    /// Validate an inbound transaction request.
    ///
    /// The error payload is exactly what the transport layer serializes
    /// back to the caller with a 400-class status.
    pub fn validate_request(&self, request: &TransactionRequest) -> Result<(), ValidationError> {
        self.metrics.record_request_validated();

        match self.validator.validate(request) {
            Ok(()) => Ok(()),
            Err(error) => {
                self.metrics.record_validation_failure();
                Err(error)
            }
        }
    }

    /// Look up a merchant by exact email (consumed by the auth layer)
    pub fn find_merchant(&self, email: &str) -> merchant_registry::Result<Option<Merchant>> {
        self.store.find_by_email(email)
    }

    /// Number of provisioned merchants
    pub fn merchant_count(&self) -> merchant_registry::Result<usize> {
        self.store.count()
    }

    /// Metrics collector (for the scrape endpoint)
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use merchant_registry::InMemoryStore;
    use rust_decimal::Decimal;

    fn gateway() -> Gateway {
        Gateway::new(
            Arc::new(InMemoryStore::new()),
            RequestValidator::default(),
            Metrics::new().unwrap(),
        )
    }

    #[test]
    fn test_valid_request_counted() {
        let gateway = gateway();
        let request = TransactionRequest::with_amount(Decimal::from(500));

        assert!(gateway.validate_request(&request).is_ok());
        assert_eq!(gateway.metrics().requests_validated.get(), 1);
        assert_eq!(gateway.metrics().validation_failures.get(), 0);
    }

    #[test]
    fn test_rejected_request_counted() {
        let gateway = gateway();
        let request = TransactionRequest::with_amount(Decimal::from(99));

        let error = gateway.validate_request(&request).unwrap_err();
        assert_eq!(error.description, "amount must be at least 100");
        assert_eq!(gateway.metrics().requests_validated.get(), 1);
        assert_eq!(gateway.metrics().validation_failures.get(), 1);
    }

    #[test]
    fn test_find_merchant_on_empty_registry() {
        let gateway = gateway();
        assert!(gateway.find_merchant("test@example.com").unwrap().is_none());
        assert_eq!(gateway.merchant_count().unwrap(), 0);
    }
}
