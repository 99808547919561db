//! Pricing types

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Pricing engine errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    /// Input rejected before reaching the pricing math
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// Total supply or product reached zero
    #[error("Degenerate pool state: {0}")]
    DegenerateState(&'static str),
    /// Decimal arithmetic overflowed
    #[error("Arithmetic overflow: {0}")]
    Overflow(&'static str),
}

/// One of the two market outcomes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// Outcome token A
    A,
    /// Outcome token B
    B,
}

impl Outcome {
    /// The opposing outcome
    pub fn other(self) -> Self {
        match self {
            Outcome::A => Outcome::B,
            Outcome::B => Outcome::A,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Outcome::A => "A",
            Outcome::B => "B",
        };
        f.pad(name)
    }
}

impl FromStr for Outcome {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "a" => Ok(Outcome::A),
            "b" => Ok(Outcome::B),
            other => Err(PricingError::InvalidInput(format!(
                "unknown outcome '{other}', expected 'a' or 'b'"
            ))),
        }
    }
}

/// Liquidity pool holding both outcome tokens and collateral
///
/// Quantities are `Decimal`, bounded by `Decimal::MAX` (about 7.9e28).
/// Products and sums past that bound surface as `PricingError::Overflow`,
/// so a pool of `a = b = 1e15` already fails on `a * b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PoolParts")]
pub struct Pool {
    a: Decimal,
    b: Decimal,
    usdc: Decimal,
}

/// Unvalidated pool fields, checked through `Pool::new` on deserialize
#[derive(Deserialize)]
struct PoolParts {
    a: Decimal,
    b: Decimal,
    usdc: Decimal,
}

impl TryFrom<PoolParts> for Pool {
    type Error = PricingError;

    fn try_from(parts: PoolParts) -> Result<Self, Self::Error> {
        Pool::new(parts.a, parts.b, parts.usdc)
    }
}

impl Pool {
    /// Create a pool, rejecting non-positive quantities
    pub fn new(a: Decimal, b: Decimal, usdc: Decimal) -> Result<Self, PricingError> {
        for (name, value) in [("a", a), ("b", b), ("usdc", usdc)] {
            if value <= Decimal::ZERO {
                return Err(PricingError::InvalidInput(format!(
                    "pool quantity {name} must be positive, got {value}"
                )));
            }
        }
        Ok(Self { a, b, usdc })
    }

    /// Build a pool from already-computed trade output
    pub(crate) fn from_parts(a: Decimal, b: Decimal, usdc: Decimal) -> Self {
        Self { a, b, usdc }
    }

    /// Quantity of token A
    pub fn a(&self) -> Decimal {
        self.a
    }

    /// Quantity of token B
    pub fn b(&self) -> Decimal {
        self.b
    }

    /// Collateral held by the pool
    pub fn usdc(&self) -> Decimal {
        self.usdc
    }

    /// Token quantity for one outcome
    pub fn reserve(&self, outcome: Outcome) -> Decimal {
        match outcome {
            Outcome::A => self.a,
            Outcome::B => self.b,
        }
    }

    /// Product of both token quantities
    pub fn product(&self) -> Result<Decimal, PricingError> {
        self.a
            .checked_mul(self.b)
            .ok_or(PricingError::Overflow("a * b"))
    }
}

/// Implied prices of both outcomes, always summing to one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricePair {
    /// Price of outcome A
    pub price_a: Decimal,
    /// Price of outcome B
    pub price_b: Decimal,
}

impl PricePair {
    /// Build a pair from the price of A
    pub fn from_price_a(price_a: Decimal) -> Self {
        Self {
            price_a,
            price_b: Decimal::ONE - price_a,
        }
    }

    /// Price of one outcome
    pub fn get(&self, outcome: Outcome) -> Decimal {
        match outcome {
            Outcome::A => self.price_a,
            Outcome::B => self.price_b,
        }
    }
}

pub(crate) fn ensure_non_negative(name: &str, value: Decimal) -> Result<(), PricingError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(PricingError::InvalidInput(format!(
            "{name} must not be negative, got {value}"
        )));
    }
    Ok(())
}
