//! Request validation orchestration

use crate::error::ValidationError;
use crate::normalize::normalize;
use crate::rules::RuleSet;
use crate::types::TransactionRequest;
use tracing::debug;

/// Validates inbound transaction requests against a declared rule set
///
/// Stateless and side-effect free: identical input always yields an
/// identical result, and `&self` methods are safe to call from many
/// request-handling tasks concurrently.
#[derive(Debug, Clone)]
pub struct RequestValidator {
    rules: RuleSet,
}

impl RequestValidator {
    /// Validator over an explicit rule set
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    /// Validate a request
    ///
    /// Rules run in declaration order; on the first violation, evaluation
    /// stops and the violation is normalized into the caller-facing error.
    /// Violations are never aggregated.
    pub fn validate(&self, request: &TransactionRequest) -> Result<(), ValidationError> {
        match self.rules.first_violation(request) {
            Some(violation) => {
                debug!(
                    field = %violation.field,
                    kind = ?violation.kind,
                    "request validation failed"
                );
                Err(normalize(&violation))
            }
            None => Ok(()),
        }
    }
}

impl Default for RequestValidator {
    fn default() -> Self {
        Self::new(RuleSet::transaction_defaults())
    }
}
