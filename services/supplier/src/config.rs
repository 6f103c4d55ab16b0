//! supplier 服务配置

use mall_config::{ConfigError, DatabaseConfig, ServerConfig, TelemetryConfig};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct SupplierServiceConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl SupplierServiceConfig {
    pub fn load() -> Result<Self, ConfigError> {
        mall_config::load("config", "SUPPLIER_")
    }
}
