//! Linear-share pricer
//!
//! Price of A is collateral over total token supply. Buying tokens grows one
//! side and rescales collateral by the inverse growth of `a * b`:
//! `new_usdc = usdc * (a * b) / (new_a * new_b)`

use super::types::ensure_non_negative;
use super::{Outcome, Pool, PricePair, PricingError};
use rust_decimal::Decimal;

/// Implied prices for a pool: `price_a = usdc / (a + b)`, `price_b = 1 - price_a`
pub fn calculate_token_prices(pool: &Pool) -> Result<PricePair, PricingError> {
    let supply = pool
        .a()
        .checked_add(pool.b())
        .ok_or(PricingError::Overflow("a + b"))?;
    if supply.is_zero() {
        return Err(PricingError::DegenerateState("total token supply is zero"));
    }

    let price_a = pool
        .usdc()
        .checked_div(supply)
        .ok_or(PricingError::Overflow("usdc / (a + b)"))?;
    Ok(PricePair::from_price_a(price_a))
}

/// Buy `token_amount` of one outcome, re-pricing collateral heuristically
///
/// This does not keep `a * b` constant; only the collateral moves inversely
/// with product growth.
pub fn buy_token(
    pool: &Pool,
    token_amount: Decimal,
    outcome: Outcome,
) -> Result<Pool, PricingError> {
    ensure_non_negative("token amount", token_amount)?;
    if token_amount.is_zero() {
        return Ok(*pool);
    }

    let (new_a, new_b) = match outcome {
        Outcome::A => (
            pool.a()
                .checked_add(token_amount)
                .ok_or(PricingError::Overflow("a + token_amount"))?,
            pool.b(),
        ),
        Outcome::B => (
            pool.a(),
            pool.b()
                .checked_add(token_amount)
                .ok_or(PricingError::Overflow("b + token_amount"))?,
        ),
    };

    let k = pool.product()?;
    let new_product = new_a
        .checked_mul(new_b)
        .ok_or(PricingError::Overflow("new_a * new_b"))?;
    if new_product.is_zero() {
        return Err(PricingError::DegenerateState("post-trade product is zero"));
    }

    let new_usdc = k
        .checked_div(new_product)
        .and_then(|ratio| ratio.checked_mul(pool.usdc()))
        .ok_or(PricingError::Overflow("k / new_product * usdc"))?;

    tracing::debug!(
        %outcome,
        %token_amount,
        %new_a,
        %new_b,
        %new_usdc,
        "Scaled buy"
    );
    Ok(Pool::from_parts(new_a, new_b, new_usdc))
}
