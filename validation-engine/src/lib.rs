//! Meridian Validation Engine
//!
//! Declarative business-rule validation for inbound transaction requests,
//! and normalization of rule violations into the stable error taxonomy
//! merchants integrate against.
//!
//! # Contract
//!
//! - A request is either fully valid or rejected with exactly one error
//! - Rules run in declaration order; the first violation wins
//! - Rejections carry a fixed `(code, description)` pair, never raw
//!   validator text, unless the violation is unknown to the mapping table

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]

pub mod error;
pub mod normalize;
pub mod rules;
pub mod types;
pub mod validator;

// Re-exports
pub use error::{ErrorCode, ValidationError};
pub use normalize::normalize;
pub use rules::{FieldRules, Rule, RuleSet};
pub use types::{RequestField, TransactionRequest, Violation, ViolationKind};
pub use validator::RequestValidator;
