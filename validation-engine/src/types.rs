//! Core types for request validation

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Inbound transaction request (untrusted)
///
/// Fields arrive from the request-binding layer as submitted by the
/// merchant; absent or null fields deserialize to `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionRequest {
    /// Charge amount in minor currency units
    #[serde(default)]
    pub amount: Option<Decimal>,

    /// ISO 4217 currency code
    #[serde(default)]
    pub currency: Option<String>,
}

impl TransactionRequest {
    /// Request carrying only an amount
    pub fn with_amount(amount: Decimal) -> Self {
        Self {
            amount: Some(amount),
            currency: None,
        }
    }
}

/// Request fields known to the validation taxonomy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequestField {
    /// Charge amount
    Amount,
    /// Currency code
    Currency,
}

impl RequestField {
    /// Wire-facing field name
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestField::Amount => "amount",
            RequestField::Currency => "currency",
        }
    }
}

impl fmt::Display for RequestField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Kind of rule failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViolationKind {
    /// Required field absent or null
    RequiredField,
    /// Numeric value below the declared minimum
    BelowMinimum,
}

/// A single rule failure: one field against one rule
///
/// `message` is the raw engine text; it is discarded once the normalizer's
/// table matches on `(field, kind)` and only surfaces for unmapped pairs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    /// Field that failed
    pub field: RequestField,
    /// Failure kind
    pub kind: ViolationKind,
    /// Raw message produced by the validation engine
    pub message: String,
}

impl Violation {
    /// Create a violation
    pub fn new(field: RequestField, kind: ViolationKind, message: impl Into<String>) -> Self {
        Self {
            field,
            kind,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names() {
        assert_eq!(RequestField::Amount.as_str(), "amount");
        assert_eq!(RequestField::Currency.to_string(), "currency");
    }

    #[test]
    fn test_request_missing_amount_deserializes_to_none() {
        let request: TransactionRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.amount, None);
        assert_eq!(request.currency, None);
    }

    #[test]
    fn test_request_null_amount_deserializes_to_none() {
        let request: TransactionRequest =
            serde_json::from_str(r#"{"amount": null, "currency": "USD"}"#).unwrap();
        assert_eq!(request.amount, None);
        assert_eq!(request.currency.as_deref(), Some("USD"));
    }

    #[test]
    fn test_request_numeric_amount() {
        let request: TransactionRequest = serde_json::from_str(r#"{"amount": 250}"#).unwrap();
        assert_eq!(request.amount, Some(Decimal::from(250)));
    }
}
