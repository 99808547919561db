//! Constant-product collateral pricer
//!
//! A trade spends collateral. The opposing reserve shrinks by the collateral
//! ratio `usdc / (usdc + spend)` and the bought side is re-solved so that
//! `a * b = k` holds exactly (up to decimal rounding).

use super::types::ensure_non_negative;
use super::{Outcome, Pool, PricingError};
use rust_decimal::Decimal;

/// Spend `usdc_amount` of collateral buying one outcome
///
/// Returns the new pool and the number of tokens bought.
pub fn buy_token_with_usdc(
    pool: &Pool,
    usdc_amount: Decimal,
    outcome: Outcome,
) -> Result<(Pool, Decimal), PricingError> {
    ensure_non_negative("usdc amount", usdc_amount)?;
    if usdc_amount.is_zero() {
        return Ok((*pool, Decimal::ZERO));
    }

    let k = pool.product()?;
    let new_usdc = pool
        .usdc()
        .checked_add(usdc_amount)
        .ok_or(PricingError::Overflow("usdc + usdc_amount"))?;

    let bought_reserve = pool.reserve(outcome);
    let new_other = pool
        .reserve(outcome.other())
        .checked_mul(pool.usdc())
        .and_then(|scaled| scaled.checked_div(new_usdc))
        .ok_or(PricingError::Overflow("other * usdc / new_usdc"))?;
    if new_other.is_zero() {
        return Err(PricingError::DegenerateState("opposing reserve drained"));
    }

    let new_bought = k
        .checked_div(new_other)
        .ok_or(PricingError::Overflow("k / new_other"))?;
    let tokens_bought = new_bought - bought_reserve;

    let new_pool = match outcome {
        Outcome::A => Pool::from_parts(new_bought, new_other, new_usdc),
        Outcome::B => Pool::from_parts(new_other, new_bought, new_usdc),
    };

    tracing::debug!(
        %outcome,
        %usdc_amount,
        %tokens_bought,
        new_a = %new_pool.a(),
        new_b = %new_pool.b(),
        "Constant-product buy"
    );
    Ok((new_pool, tokens_bought))
}
