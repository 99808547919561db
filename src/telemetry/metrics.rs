//! Trade and market metrics
//!
//! Emitted through the `metrics` facade; without an installed recorder
//! every call is a no-op.

use crate::market::OutcomeAmounts;
use crate::pricing::{calculate_token_prices, Outcome, Pool, PricingStrategy};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Gauge metric types
#[derive(Debug, Clone, Copy)]
pub enum GaugeMetric {
    /// Pool price of outcome A
    PoolPriceA,
    /// Pool price of outcome B
    PoolPriceB,
    /// Collateral held by the pool
    PoolUsdc,
    /// Market share of outcome A
    ShareA,
    /// Market share of outcome B
    ShareB,
}

impl GaugeMetric {
    fn name(self) -> &'static str {
        match self {
            GaugeMetric::PoolPriceA => "polyamm_pool_price_a",
            GaugeMetric::PoolPriceB => "polyamm_pool_price_b",
            GaugeMetric::PoolUsdc => "polyamm_pool_usdc",
            GaugeMetric::ShareA => "polyamm_market_share_a",
            GaugeMetric::ShareB => "polyamm_market_share_b",
        }
    }
}

/// Set a gauge value
pub fn set_gauge(metric: GaugeMetric, value: Decimal) {
    let value = value.to_f64().unwrap_or(f64::NAN);
    ::metrics::gauge!(metric.name()).set(value);
}

/// Count a trade and publish the resulting pool state
pub fn record_trade(strategy: PricingStrategy, pool: &Pool) {
    ::metrics::counter!("polyamm_trades_total", "strategy" => strategy.as_str()).increment(1);

    set_gauge(GaugeMetric::PoolUsdc, pool.usdc());
    if let Ok(prices) = calculate_token_prices(pool) {
        set_gauge(GaugeMetric::PoolPriceA, prices.price_a);
        set_gauge(GaugeMetric::PoolPriceB, prices.price_b);
    }
}

/// Count an investment and publish the resulting shares
pub fn record_investment(outcome: Outcome, shares: &OutcomeAmounts) {
    let label = match outcome {
        Outcome::A => "a",
        Outcome::B => "b",
    };
    ::metrics::counter!("polyamm_investments_total", "outcome" => label).increment(1);

    set_gauge(GaugeMetric::ShareA, shares.a);
    set_gauge(GaugeMetric::ShareB, shares.b);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_gauge_names_prefixed() {
        for metric in [
            GaugeMetric::PoolPriceA,
            GaugeMetric::PoolPriceB,
            GaugeMetric::PoolUsdc,
            GaugeMetric::ShareA,
            GaugeMetric::ShareB,
        ] {
            assert!(metric.name().starts_with("polyamm_"));
        }
    }

    #[test]
    fn test_record_without_recorder() {
        let pool = Pool::new(dec!(10), dec!(10), dec!(10)).unwrap();
        record_trade(PricingStrategy::ScaledHeuristic, &pool);
        record_investment(Outcome::B, &OutcomeAmounts::new(dec!(0.4), dec!(0.6)));
    }
}
