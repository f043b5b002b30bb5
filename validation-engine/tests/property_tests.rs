//! Property-based tests for request validation invariants
//!
//! These tests use proptest to verify:
//! - Amounts at or above the minimum always pass
//! - Amounts below the minimum always yield the fixed description
//! - Validation is deterministic across repeated calls
//! - The outbound payload shape is stable

use proptest::prelude::*;
use rust_decimal::Decimal;
use validation_engine::{RequestValidator, TransactionRequest};

/// Strategy for amounts at or above the 100 minor-unit minimum
fn valid_amount_strategy() -> impl Strategy<Value = Decimal> {
    (100u64..1_000_000_00u64).prop_map(Decimal::from)
}

/// Strategy for amounts below the minimum, including fractional values
fn below_minimum_strategy() -> impl Strategy<Value = Decimal> {
    prop_oneof![
        (0u64..100u64).prop_map(Decimal::from),
        // 0.00 .. 99.99
        (0u64..10_000u64).prop_map(|cents| Decimal::new(cents as i64, 2)),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Property: amounts >= 100 are always accepted
    #[test]
    fn prop_amounts_at_or_above_minimum_pass(amount in valid_amount_strategy()) {
        let validator = RequestValidator::default();
        let request = TransactionRequest::with_amount(amount);

        prop_assert!(validator.validate(&request).is_ok());
    }

    /// Property: amounts < 100 always yield the fixed description
    #[test]
    fn prop_amounts_below_minimum_rejected(amount in below_minimum_strategy()) {
        let validator = RequestValidator::default();
        let request = TransactionRequest::with_amount(amount);

        let error = validator.validate(&request).unwrap_err();
        prop_assert_eq!(error.code.as_str(), "BAD_REQUEST_ERROR");
        prop_assert_eq!(error.description, "amount must be at least 100");
    }

    /// Property: a missing amount always yields the fixed description,
    /// regardless of what else the request carries
    #[test]
    fn prop_missing_amount_rejected(currency in proptest::option::of("[A-Z]{3}")) {
        let validator = RequestValidator::default();
        let request = TransactionRequest {
            amount: None,
            currency,
        };

        let error = validator.validate(&request).unwrap_err();
        prop_assert_eq!(error.description, "amount is required");
    }

    /// Property: identical input yields identical output on every call
    #[test]
    fn prop_validation_deterministic(amount in proptest::option::of(0u64..200u64)) {
        let validator = RequestValidator::default();
        let request = TransactionRequest {
            amount: amount.map(Decimal::from),
            currency: None,
        };

        let first = validator.validate(&request);
        for _ in 0..10 {
            prop_assert_eq!(&validator.validate(&request), &first);
        }
    }

    /// Property: every rejection serializes to the stable wire shape
    #[test]
    fn prop_rejection_wire_shape(amount in proptest::option::of(0u64..100u64)) {
        let validator = RequestValidator::default();
        let request = TransactionRequest {
            amount: amount.map(Decimal::from),
            currency: None,
        };

        let error = validator.validate(&request).unwrap_err();
        let json = serde_json::to_value(&error).unwrap();

        prop_assert_eq!(json["code"].as_str(), Some("BAD_REQUEST_ERROR"));
        prop_assert!(json["description"].is_string());
        prop_assert_eq!(json.as_object().unwrap().len(), 2);
    }
}
