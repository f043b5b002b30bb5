//! Declarative validation rules for transaction requests
//!
//! Rules are data, not imperative checks: new fields or bounds are added by
//! declaring them here, without touching the normalizer.

use crate::types::{RequestField, TransactionRequest, Violation, ViolationKind};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single declarative rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Rule {
    /// Field must be present and non-null
    Required,
    /// Numeric field must be at or above the bound (inclusive)
    Minimum(Decimal),
}

impl Rule {
    /// Evaluate this rule for one field of a request
    fn check(&self, field: RequestField, request: &TransactionRequest) -> Option<Violation> {
        match self {
            Rule::Required => {
                if field_present(field, request) {
                    None
                } else {
                    Some(Violation::new(
                        field,
                        ViolationKind::RequiredField,
                        format!("{} is a required field", field),
                    ))
                }
            }
            Rule::Minimum(min) => match numeric_value(field, request) {
                Some(value) if value < *min => Some(Violation::new(
                    field,
                    ViolationKind::BelowMinimum,
                    format!("{} must satisfy minimum value {}", field, min),
                )),
                _ => None,
            },
        }
    }
}

/// Whether the field was submitted at all
fn field_present(field: RequestField, request: &TransactionRequest) -> bool {
    match field {
        RequestField::Amount => request.amount.is_some(),
        RequestField::Currency => request.currency.is_some(),
    }
}

/// Raw numeric value of the field, if it has one
fn numeric_value(field: RequestField, request: &TransactionRequest) -> Option<Decimal> {
    match field {
        RequestField::Amount => request.amount,
        RequestField::Currency => None,
    }
}

/// Rules declared for one field, in evaluation order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldRules {
    /// Field the rules bind to
    pub field: RequestField,
    /// Rules evaluated in order
    pub rules: Vec<Rule>,
}

/// Ordered rule declarations for a request shape
///
/// Declaration order is the evaluation order, and it is stable across
/// calls: only the first violation is ever surfaced, so the ordering is
/// part of the external contract.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleSet {
    fields: Vec<FieldRules>,
}

impl RuleSet {
    /// Empty rule set
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Declare rules for a field (appended in evaluation order)
    pub fn field(mut self, field: RequestField, rules: Vec<Rule>) -> Self {
        self.fields.push(FieldRules { field, rules });
        self
    }

    /// Default rules for inbound transaction requests
    ///
    /// `amount` is required and must be at least 100 minor units; the
    /// boundary value itself is valid.
    pub fn transaction_defaults() -> Self {
        Self::new().field(
            RequestField::Amount,
            vec![Rule::Required, Rule::Minimum(Decimal::ONE_HUNDRED)],
        )
    }

    /// First violation in declaration order, if any
    pub fn first_violation(&self, request: &TransactionRequest) -> Option<Violation> {
        for field_rules in &self.fields {
            for rule in &field_rules.rules {
                if let Some(violation) = rule.check(field_rules.field, request) {
                    return Some(violation);
                }
            }
        }
        None
    }
}
