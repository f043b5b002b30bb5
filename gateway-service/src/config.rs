//! Configuration for the gateway service

use serde::{Deserialize, Serialize};

/// Gateway configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Service name
    pub service_name: String,

    /// Service version
    pub service_version: String,

    /// Metrics listen address
    pub metrics_listen_addr: String,

    /// Startup seeding configuration
    pub seed: SeedConfig,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            service_name: "gateway-service".to_string(),
            service_version: env!("CARGO_PKG_VERSION").to_string(),
            metrics_listen_addr: "0.0.0.0:9090".to_string(),
            seed: SeedConfig::default(),
        }
    }
}

/// Startup seeding configuration
///
/// Defaults to the integration-test merchant; production deployments
/// disable seeding or point it at their own bootstrap identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Run seeding on process start
    pub enabled: bool,

    /// Merchant display name
    pub name: String,

    /// Merchant email (natural key for provisioning)
    pub email: String,

    /// API key
    pub api_key: String,

    /// API secret
    pub api_secret: String,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            name: "Test Merchant".to_string(),
            email: "test@example.com".to_string(),
            api_key: "key_test_abc123".to_string(),
            api_secret: "secret_test_xyz789".to_string(),
        }
    }
}

impl GatewayConfig {
    /// Load from file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: GatewayConfig = toml::from_str(&content)
            .map_err(|e| crate::Error::Config(format!("Failed to parse config: {}", e)))?;
        Ok(config)
    }

    /// Load from environment variables
    pub fn from_env() -> crate::Result<Self> {
        let mut config = GatewayConfig::default();

        if let Ok(addr) = std::env::var("GATEWAY_METRICS_ADDR") {
            config.metrics_listen_addr = addr;
        }

        if let Ok(enabled) = std::env::var("GATEWAY_SEED_ENABLED") {
            config.seed.enabled = matches!(enabled.as_str(), "1" | "true");
        }

        if let Ok(email) = std::env::var("GATEWAY_SEED_EMAIL") {
            config.seed.email = email;
        }

        Ok(config)
    }
}
