//! Pool pricing module
//!
//! Two-outcome pool math: linear-share prices, a token-sized heuristic buy
//! and a collateral-sized constant-product buy

mod constant_product;
mod linear;
mod strategy;
mod types;

pub use constant_product::buy_token_with_usdc;
pub use linear::{buy_token, calculate_token_prices};
pub use strategy::{PricingStrategy, TradeResult};
pub use types::{Outcome, Pool, PricePair, PricingError};
