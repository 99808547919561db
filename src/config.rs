//! Configuration types for poly-amm

use crate::pricing::{Pool, PricingError, PricingStrategy};
use crate::telemetry::LogFormat;
use rust_decimal::Decimal;
use serde::Deserialize;

/// Root configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub pool: PoolConfig,
    #[serde(default)]
    pub pricing: PricingConfig,
    #[serde(default)]
    pub market: MarketConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Initial pool seed
#[derive(Debug, Clone, Deserialize)]
pub struct PoolConfig {
    /// Initial A tokens
    #[serde(default = "default_seed")]
    pub a: Decimal,

    /// Initial B tokens
    #[serde(default = "default_seed")]
    pub b: Decimal,

    /// Initial collateral
    #[serde(default = "default_seed")]
    pub usdc: Decimal,
}

fn default_seed() -> Decimal {
    Decimal::new(1000, 0)
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            a: default_seed(),
            b: default_seed(),
            usdc: default_seed(),
        }
    }
}

impl PoolConfig {
    /// Build a validated pool from the seed
    pub fn to_pool(&self) -> Result<Pool, PricingError> {
        Pool::new(self.a, self.b, self.usdc)
    }
}

/// Pricing configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PricingConfig {
    /// Buy formula used when none is given on the command line
    #[serde(default)]
    pub strategy: PricingStrategy,
}

/// Cumulative market configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MarketConfig {
    /// Sell pressure seeded on A for new markets
    #[serde(default)]
    pub sell_pressure_a: Decimal,

    /// Sell pressure seeded on B for new markets
    #[serde(default)]
    pub sell_pressure_b: Decimal,
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: LogFormat::Pretty,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Built-in configuration shipped with the crate
    pub fn example() -> anyhow::Result<Self> {
        Ok(toml::from_str(include_str!("../config.toml.example"))?)
    }
}
