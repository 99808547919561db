//! Scenario simulator engine

use super::{Scenario, SimulationResult, SimulationSummary};
use crate::market::Market;
use crate::pricing::{calculate_token_prices, Outcome, PricingStrategy, TradeResult};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Runs scenarios through one buy strategy and a fresh market
pub struct Simulator {
    strategy: PricingStrategy,
    seed_sell_pressure: (Decimal, Decimal),
}

impl Simulator {
    /// Create a new simulator
    pub fn new(strategy: PricingStrategy) -> Self {
        Self {
            strategy,
            seed_sell_pressure: (Decimal::ZERO, Decimal::ZERO),
        }
    }

    /// Seed sell pressure on every market this simulator creates
    pub fn with_sell_pressure(mut self, a: Decimal, b: Decimal) -> Self {
        self.seed_sell_pressure = (a, b);
        self
    }

    /// Run the scenario, timestamping investments now
    pub fn run(&self, scenario: &Scenario) -> anyhow::Result<SimulationResult> {
        self.run_at(scenario, Utc::now())
    }

    /// Run the scenario with every investment stamped at `timestamp`
    pub fn run_at(
        &self,
        scenario: &Scenario,
        timestamp: DateTime<Utc>,
    ) -> anyhow::Result<SimulationResult> {
        let strategy = scenario.strategy.unwrap_or(self.strategy);
        let initial = scenario.pool.to_pool()?;

        let mut pool = initial;
        let mut trades = Vec::with_capacity(scenario.trades.len());
        for (index, step) in scenario.trades.iter().enumerate() {
            let trade = strategy.buy(&pool, step.outcome, step.amount).map_err(|e| {
                anyhow::anyhow!("trade {} ({} {}): {}", index + 1, step.outcome, step.amount, e)
            })?;
            pool = trade.after;
            trades.push(trade);
        }

        let mut market = Market::new();
        let (seed_a, seed_b) = self.seed_sell_pressure;
        market.seed_sell_pressure(Outcome::A, seed_a)?;
        market.seed_sell_pressure(Outcome::B, seed_b)?;
        for (index, step) in scenario.investments.iter().enumerate() {
            market
                .invest_at(step.outcome, step.amount, timestamp)
                .map_err(|e| anyhow::anyhow!("investment {}: {}", index + 1, e))?;
        }

        let summary = SimulationSummary {
            strategy,
            trade_count: trades.len(),
            investment_count: market.history().len(),
            total_tokens_bought: total_tokens_bought(&trades)?,
            total_usdc_delta: pool.usdc() - initial.usdc(),
            initial_prices: calculate_token_prices(&initial)?,
            final_prices: calculate_token_prices(&pool)?,
            market_prices: market.prices(),
        };

        tracing::info!(
            %strategy,
            trades = summary.trade_count,
            investments = summary.investment_count,
            "Simulation complete"
        );

        Ok(SimulationResult {
            summary,
            initial,
            final_pool: pool,
            trades,
            market,
        })
    }
}

fn total_tokens_bought(trades: &[TradeResult]) -> anyhow::Result<Decimal> {
    trades
        .iter()
        .try_fold(Decimal::ZERO, |total, trade| {
            total.checked_add(trade.tokens_bought)
        })
        .ok_or_else(|| anyhow::anyhow!("total tokens bought overflowed"))
}
