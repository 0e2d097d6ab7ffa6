//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.
//! Every section is optional; an empty file yields the stock advisor.

use serde::{Deserialize, Serialize};

use crate::advisor::method::{canonical_methods, ControlMethod, MethodTable};
use crate::advisor::tier::TierThresholds;
use crate::advisor::Advisor;

/// Root configuration for the advisor service.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AdvisorConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Tier boundaries for the total volume.
    pub thresholds: TierThresholds,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Efficiency table, scanned in order.
    pub methods: Vec<ControlMethod>,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            listener: ListenerConfig::default(),
            timeouts: TimeoutConfig::default(),
            thresholds: TierThresholds::default(),
            observability: ObservabilityConfig::default(),
            methods: canonical_methods(),
        }
    }
}

impl AdvisorConfig {
    /// Build the advisor described by the `thresholds` and `methods` sections.
    pub fn advisor(&self) -> Advisor {
        Advisor::new(MethodTable::new(self.methods.clone()), self.thresholds)
    }
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8888").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8888".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` wins if set.
    pub log_level: String,

    /// Enable the Prometheus scrape endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
