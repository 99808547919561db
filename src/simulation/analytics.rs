//! Simulation analytics and reporting

use crate::market::Market;
use crate::pricing::{Pool, PricePair, PricingStrategy, TradeResult};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

/// Summary statistics from a simulation
#[derive(Debug, Clone, Serialize)]
pub struct SimulationSummary {
    /// Buy formula used
    pub strategy: PricingStrategy,
    /// Number of pool trades applied
    pub trade_count: usize,
    /// Number of market investments applied
    pub investment_count: usize,
    /// Tokens bought across all trades
    pub total_tokens_bought: Decimal,
    /// Net change in pool collateral
    pub total_usdc_delta: Decimal,
    /// Pool prices before the first trade
    pub initial_prices: PricePair,
    /// Pool prices after the last trade
    pub final_prices: PricePair,
    /// Market share prices after the last investment
    pub market_prices: PricePair,
}

/// Complete simulation results
#[derive(Debug, Clone, Serialize)]
pub struct SimulationResult {
    /// Summary statistics
    pub summary: SimulationSummary,
    /// Pool seed
    pub initial: Pool,
    /// Pool after all trades
    pub final_pool: Pool,
    /// Per-trade ledger
    pub trades: Vec<TradeResult>,
    /// Market after all investments
    pub market: Market,
}

impl SimulationSummary {
    /// Format as table for CLI output
    pub fn format_table(&self) -> String {
        format!(
            r#"
══════════════════════════════════════════════════════
               SIMULATION RESULTS ({})
══════════════════════════════════════════════════════

POOL
───────────────────────────────────────────────────────
Trades:           {}
Tokens Bought:    {:.2}
USDC Change:      {:+.2}
Price A:          {} -> {}
Price B:          {} -> {}

MARKET
───────────────────────────────────────────────────────
Investments:      {}
Share A:          {}
Share B:          {}
══════════════════════════════════════════════════════
"#,
            self.strategy,
            self.trade_count,
            self.total_tokens_bought,
            self.total_usdc_delta,
            percent(self.initial_prices.price_a),
            percent(self.final_prices.price_a),
            percent(self.initial_prices.price_b),
            percent(self.final_prices.price_b),
            self.investment_count,
            percent(self.market_prices.price_a),
            percent(self.market_prices.price_b),
        )
    }
}

/// Price as a percentage, or the raw price when scaling would overflow
fn percent(price: Decimal) -> String {
    match price.checked_mul(dec!(100)) {
        Some(pct) => format!("{:.2}%", pct),
        None => format!("{:.4}", price),
    }
}

impl SimulationResult {
    /// Format the trade ledger and summary for CLI output
    pub fn format_table(&self) -> String {
        let mut out = String::from("\n #  Side  Amount        Bought        A            B            USDC\n");
        for (index, trade) in self.trades.iter().enumerate() {
            out.push_str(&format!(
                "{:>2}  {:<4}  {:>12.2}  {:>12.2}  {:>11.2}  {:>11.2}  {:>11.2}\n",
                index + 1,
                trade.outcome,
                trade.amount,
                trade.tokens_bought,
                trade.after.a(),
                trade.after.b(),
                trade.after.usdc(),
            ));
        }
        out.push_str(&self.summary.format_table());
        out
    }
}
