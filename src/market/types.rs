//! Market model types

use crate::pricing::Outcome;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};
use thiserror::Error;
use uuid::Uuid;

/// Session identifier
pub type SessionId = Uuid;

/// Market model errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarketError {
    /// Negative or otherwise unusable amount
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// Decimal arithmetic overflowed
    #[error("Arithmetic overflow: {0}")]
    Overflow(&'static str),
    /// No market is registered under this session
    #[error("Unknown session: {0}")]
    UnknownSession(SessionId),
}

/// A decimal value per outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OutcomeAmounts {
    /// Value for outcome A
    pub a: Decimal,
    /// Value for outcome B
    pub b: Decimal,
}

impl OutcomeAmounts {
    /// Create from both values
    pub fn new(a: Decimal, b: Decimal) -> Self {
        Self { a, b }
    }

    /// Sum over both outcomes
    pub fn total(&self) -> Decimal {
        self.a + self.b
    }
}

impl Index<Outcome> for OutcomeAmounts {
    type Output = Decimal;

    fn index(&self, outcome: Outcome) -> &Decimal {
        match outcome {
            Outcome::A => &self.a,
            Outcome::B => &self.b,
        }
    }
}

impl IndexMut<Outcome> for OutcomeAmounts {
    fn index_mut(&mut self, outcome: Outcome) -> &mut Decimal {
        match outcome {
            Outcome::A => &mut self.a,
            Outcome::B => &mut self.b,
        }
    }
}

/// Share prices recorded after an investment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceSnapshot {
    /// Time of the investment
    pub timestamp: DateTime<Utc>,
    /// Share of outcome A
    pub share_a: Decimal,
    /// Share of outcome B
    pub share_b: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_outcome_amounts_index() {
        let mut amounts = OutcomeAmounts::default();
        amounts[Outcome::A] += dec!(3);
        amounts[Outcome::B] += dec!(4.5);

        assert_eq!(amounts[Outcome::A], dec!(3));
        assert_eq!(amounts.b, dec!(4.5));
        assert_eq!(amounts.total(), dec!(7.5));
    }

    #[test]
    fn test_unknown_session_message() {
        let id = Uuid::nil();
        let err = MarketError::UnknownSession(id);
        assert!(err.to_string().contains("00000000-0000-0000-0000-000000000000"));
    }
}
