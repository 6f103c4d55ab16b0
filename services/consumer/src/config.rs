//! consumer 服务配置

use mall_config::{ConfigError, ServerConfig, SupplierConfig, TelemetryConfig};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ConsumerServiceConfig {
    pub server: ServerConfig,
    pub supplier: SupplierConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl ConsumerServiceConfig {
    pub fn load() -> Result<Self, ConfigError> {
        mall_config::load("config", "CONSUMER_")
    }
}
