//! Scenario simulation module
//!
//! Replays a scripted sequence of pool trades and market investments

mod analytics;
mod simulator;

pub use analytics::{SimulationResult, SimulationSummary};
pub use simulator::Simulator;

use crate::config::PoolConfig;
use crate::pricing::{Outcome, PricingStrategy};
use rust_decimal::Decimal;
use serde::Deserialize;

/// A scripted simulation run
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    /// Pool seed the trades start from
    #[serde(default)]
    pub pool: PoolConfig,
    /// Buy formula, overriding the configured default
    #[serde(default)]
    pub strategy: Option<PricingStrategy>,
    /// Pool buys, applied in order
    #[serde(default)]
    pub trades: Vec<ScenarioStep>,
    /// Market investments, applied in order
    #[serde(default)]
    pub investments: Vec<ScenarioStep>,
}

/// One buy or investment
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ScenarioStep {
    pub outcome: Outcome,
    pub amount: Decimal,
}

impl Scenario {
    /// Load a scenario from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let scenario: Scenario = toml::from_str(&content)?;
        Ok(scenario)
    }
}
