//! Named buy strategies
//!
//! The two buy formulas are not interchangeable:
//! - `ScaledHeuristic` sizes the trade in tokens and *lowers* collateral as
//!   the token product grows. It does not preserve `a * b`.
//! - `ExactConstantProduct` sizes the trade in collateral, preserves `a * b`
//!   and raises collateral by the spend.
//!
//! Both are kept as-is and selected explicitly.

use super::{buy_token, buy_token_with_usdc, calculate_token_prices};
use super::{Outcome, Pool, PricePair, PricingError};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Buy formula selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PricingStrategy {
    /// Token-sized buy with collateral rescaled by product growth
    #[serde(rename = "scaled")]
    ScaledHeuristic,
    /// Collateral-sized buy solving the constant-product invariant
    #[default]
    #[serde(rename = "exact")]
    ExactConstantProduct,
}

impl PricingStrategy {
    /// Short name used in config, CLI and metric labels
    pub fn as_str(&self) -> &'static str {
        match self {
            PricingStrategy::ScaledHeuristic => "scaled",
            PricingStrategy::ExactConstantProduct => "exact",
        }
    }

    /// Execute a buy against `pool`
    ///
    /// `amount` is a token quantity for `ScaledHeuristic` and a collateral
    /// spend for `ExactConstantProduct`.
    pub fn buy(
        &self,
        pool: &Pool,
        outcome: Outcome,
        amount: Decimal,
    ) -> Result<TradeResult, PricingError> {
        let (after, tokens_bought) = match self {
            PricingStrategy::ScaledHeuristic => (buy_token(pool, amount, outcome)?, amount),
            PricingStrategy::ExactConstantProduct => buy_token_with_usdc(pool, amount, outcome)?,
        };

        crate::telemetry::record_trade(*self, &after);

        Ok(TradeResult {
            outcome,
            strategy: *self,
            amount,
            before: *pool,
            after,
            tokens_bought,
            usdc_delta: after.usdc() - pool.usdc(),
        })
    }
}

impl fmt::Display for PricingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for PricingStrategy {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "scaled" => Ok(PricingStrategy::ScaledHeuristic),
            "exact" => Ok(PricingStrategy::ExactConstantProduct),
            other => Err(PricingError::InvalidInput(format!(
                "unknown strategy '{other}', expected 'scaled' or 'exact'"
            ))),
        }
    }
}

/// Outcome of a single buy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeResult {
    /// Outcome bought
    pub outcome: Outcome,
    /// Formula used
    pub strategy: PricingStrategy,
    /// Requested amount (tokens or collateral, per strategy)
    pub amount: Decimal,
    /// Pool before the trade
    pub before: Pool,
    /// Pool after the trade
    pub after: Pool,
    /// Tokens added to the bought side
    pub tokens_bought: Decimal,
    /// Change in pool collateral
    pub usdc_delta: Decimal,
}

impl TradeResult {
    /// Prices before the trade
    pub fn prices_before(&self) -> Result<PricePair, PricingError> {
        calculate_token_prices(&self.before)
    }

    /// Prices after the trade
    pub fn prices_after(&self) -> Result<PricePair, PricingError> {
        calculate_token_prices(&self.after)
    }

    /// Format as table for CLI output
    pub fn format_table(&self) -> Result<String, PricingError> {
        let initial = self.prices_before()?;
        let new = self.prices_after()?;
        Ok(format!(
            r#"
══════════════════════════════════════════════════════
        BUY {} ({}) amount {}
══════════════════════════════════════════════════════

POOL                 After          Change
───────────────────────────────────────────────────────
A Tokens:     {:>12.2}    {:>+12.2}
B Tokens:     {:>12.2}    {:>+12.2}
USDC in LP:   {:>12.2}    {:>+12.2}
Tokens Bought:{:>12.2}

PRICES             Initial             New
───────────────────────────────────────────────────────
A:            {:>12.4}    {:>12.4}
B:            {:>12.4}    {:>12.4}
══════════════════════════════════════════════════════
"#,
            self.outcome,
            self.strategy,
            self.amount,
            self.after.a(),
            self.after.a() - self.before.a(),
            self.after.b(),
            self.after.b() - self.before.b(),
            self.after.usdc(),
            self.usdc_delta,
            self.tokens_bought,
            initial.price_a,
            new.price_a,
            initial.price_b,
            new.price_b,
        ))
    }
}
