//! Buy command implementation

use super::{OutputFormat, PricesArgs};
use crate::config::Config;
use crate::pricing::{Outcome, PricingStrategy, TradeResult};
use clap::Args;
use rust_decimal::Decimal;

#[derive(Args, Debug)]
pub struct BuyArgs {
    /// Outcome to buy: a or b
    #[arg(long)]
    pub outcome: Outcome,

    /// Tokens (scaled) or collateral (exact) to buy with
    #[arg(long)]
    pub amount: Decimal,

    /// Buy formula: scaled or exact (defaults to config)
    #[arg(long)]
    pub strategy: Option<PricingStrategy>,

    #[command(flatten)]
    pub pool: PricesArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

impl BuyArgs {
    pub fn trade(&self, config: &Config) -> anyhow::Result<TradeResult> {
        let pool = self.pool.pool(config)?;
        let strategy = self.strategy.unwrap_or(config.pricing.strategy);
        Ok(strategy.buy(&pool, self.outcome, self.amount)?)
    }

    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let trade = self.trade(config)?;
        match self.format {
            OutputFormat::Table => println!("{}", trade.format_table()?),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&trade)?),
        }
        Ok(())
    }
}
