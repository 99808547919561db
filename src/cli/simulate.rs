//! Simulate command implementation

use super::OutputFormat;
use crate::config::Config;
use crate::pricing::PricingStrategy;
use crate::simulation::{Scenario, Simulator};
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct SimulateArgs {
    /// Scenario file (TOML)
    #[arg(long)]
    pub scenario: PathBuf,

    /// Buy formula when the scenario names none (defaults to config)
    #[arg(long)]
    pub strategy: Option<PricingStrategy>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

impl SimulateArgs {
    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        tracing::info!("Running scenario {:?}...", self.scenario);
        let scenario = Scenario::load(&self.scenario)?;

        let strategy = self.strategy.unwrap_or(config.pricing.strategy);
        let result = Simulator::new(strategy)
            .with_sell_pressure(config.market.sell_pressure_a, config.market.sell_pressure_b)
            .run(&scenario)?;

        match self.format {
            OutputFormat::Table => println!("{}", result.format_table()),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        }
        Ok(())
    }
}
