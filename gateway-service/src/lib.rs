//! Meridian Gateway Service
//!
//! Startup wiring for the merchant credential and request validation core:
//! configuration, metrics, bootstrap seeding, and the request-handling
//! facade the transport layer mounts against.

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]

pub mod bootstrap;
pub mod config;
pub mod error;
pub mod metrics;
pub mod service;

// Re-exports
pub use bootstrap::seed_merchant;
pub use config::{GatewayConfig, SeedConfig};
pub use error::{Error, Result};
pub use metrics::Metrics;
pub use service::Gateway;
