//! Violation normalization
//!
//! Maps internal rule violations to the fixed `(code, description)` pairs of
//! the external contract, decoupling the validation engine's message text
//! from what API consumers parse.

use crate::error::ValidationError;
use crate::types::{RequestField, Violation, ViolationKind};

/// Fixed `(field, kind)` → description table.
///
/// Keep entries in sync with the rule set: callers integrate against these
/// exact strings.
const DESCRIPTIONS: &[(RequestField, ViolationKind, &str)] = &[
    (
        RequestField::Amount,
        ViolationKind::BelowMinimum,
        "amount must be at least 100",
    ),
    (
        RequestField::Amount,
        ViolationKind::RequiredField,
        "amount is required",
    ),
];

/// Map one violation to the external error payload.
///
/// Matching is on the structured `(field, kind)` pair, never on message
/// substrings. A pair absent from the table passes the raw violation
/// message through verbatim so no information is dropped.
pub fn normalize(violation: &Violation) -> ValidationError {
    let description = DESCRIPTIONS
        .iter()
        .find(|(field, kind, _)| *field == violation.field && *kind == violation.kind)
        .map(|(_, _, description)| (*description).to_string())
        .unwrap_or_else(|| violation.message.clone());

    ValidationError::bad_request(description)
}
