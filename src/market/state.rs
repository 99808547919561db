//! Cumulative-investment market model

use super::{MarketError, OutcomeAmounts, PriceSnapshot};
use crate::pricing::{Outcome, PricePair};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Share-based market state
///
/// Shares are the fraction of all collateral invested in each outcome.
/// Every investment appends one history entry; nothing is ever rolled back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Market {
    total_invested: Decimal,
    investments: OutcomeAmounts,
    shares: OutcomeAmounts,
    buy_pressure: OutcomeAmounts,
    sell_pressure: OutcomeAmounts,
    history: Vec<PriceSnapshot>,
}

impl Market {
    /// Create an empty market at 50/50
    pub fn new() -> Self {
        Self {
            total_invested: dec!(0),
            investments: OutcomeAmounts::default(),
            shares: OutcomeAmounts::new(dec!(0.5), dec!(0.5)),
            buy_pressure: OutcomeAmounts::default(),
            sell_pressure: OutcomeAmounts::default(),
            history: vec![],
        }
    }

    /// Invest collateral in an outcome, timestamped now
    pub fn invest(
        &mut self,
        outcome: Outcome,
        amount: Decimal,
    ) -> Result<PriceSnapshot, MarketError> {
        self.invest_at(outcome, amount, Utc::now())
    }

    /// Invest collateral in an outcome at a given time
    pub fn invest_at(
        &mut self,
        outcome: Outcome,
        amount: Decimal,
        timestamp: DateTime<Utc>,
    ) -> Result<PriceSnapshot, MarketError> {
        ensure_non_negative(amount)?;

        let invested = self.investments[outcome]
            .checked_add(amount)
            .ok_or(MarketError::Overflow("investments + amount"))?;
        let total_invested = self
            .total_invested
            .checked_add(amount)
            .ok_or(MarketError::Overflow("total_invested + amount"))?;
        let buy_pressure = self.buy_pressure[outcome]
            .checked_add(amount)
            .ok_or(MarketError::Overflow("buy_pressure + amount"))?;

        self.investments[outcome] = invested;
        self.total_invested = total_invested;
        self.recompute_shares();

        let snapshot = PriceSnapshot {
            timestamp,
            share_a: self.shares.a,
            share_b: self.shares.b,
        };
        self.history.push(snapshot);

        self.buy_pressure[outcome] = buy_pressure;
        // Same-side investment only decays sell pressure, floored at zero
        let sell_pressure = self.sell_pressure[outcome];
        self.sell_pressure[outcome] = if amount >= sell_pressure {
            dec!(0)
        } else {
            sell_pressure - amount
        };

        tracing::debug!(
            %outcome,
            %amount,
            total_invested = %self.total_invested,
            share_a = %snapshot.share_a,
            share_b = %snapshot.share_b,
            "Investment recorded"
        );
        crate::telemetry::record_investment(outcome, &self.shares);

        Ok(snapshot)
    }

    /// Add externally observed sell pressure to an outcome
    pub fn seed_sell_pressure(
        &mut self,
        outcome: Outcome,
        amount: Decimal,
    ) -> Result<(), MarketError> {
        ensure_non_negative(amount)?;
        self.sell_pressure[outcome] = self.sell_pressure[outcome]
            .checked_add(amount)
            .ok_or(MarketError::Overflow("sell_pressure + amount"))?;
        Ok(())
    }

    /// Current share price of an outcome
    pub fn get_price(&self, outcome: Outcome) -> Decimal {
        self.shares[outcome]
    }

    /// Current share prices as a pair
    pub fn prices(&self) -> PricePair {
        PricePair {
            price_a: self.shares.a,
            price_b: self.shares.b,
        }
    }

    pub fn total_invested(&self) -> Decimal {
        self.total_invested
    }

    pub fn investments(&self) -> &OutcomeAmounts {
        &self.investments
    }

    pub fn shares(&self) -> &OutcomeAmounts {
        &self.shares
    }

    pub fn buy_pressure(&self) -> &OutcomeAmounts {
        &self.buy_pressure
    }

    pub fn sell_pressure(&self) -> &OutcomeAmounts {
        &self.sell_pressure
    }

    /// One snapshot per investment, oldest first
    pub fn history(&self) -> &[PriceSnapshot] {
        &self.history
    }

    fn recompute_shares(&mut self) {
        if self.total_invested > dec!(0) {
            let share_a = self.investments.a / self.total_invested;
            self.shares = OutcomeAmounts::new(share_a, Decimal::ONE - share_a);
        } else {
            self.shares = OutcomeAmounts::new(dec!(0.5), dec!(0.5));
        }
    }
}

impl Default for Market {
    fn default() -> Self {
        Self::new()
    }
}

fn ensure_non_negative(amount: Decimal) -> Result<(), MarketError> {
    if amount < dec!(0) {
        return Err(MarketError::InvalidInput(format!(
            "investment amount must not be negative, got {amount}"
        )));
    }
    Ok(())
}
