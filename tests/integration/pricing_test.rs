//! Integration tests for pool pricing

use poly_amm::pricing::{
    buy_token, buy_token_with_usdc, calculate_token_prices, Outcome, Pool, PricingStrategy,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[test]
fn test_balanced_pool_prices() {
    let pool = Pool::new(dec!(1000), dec!(1000), dec!(1000)).unwrap();
    let prices = calculate_token_prices(&pool).unwrap();
    assert_eq!(prices.price_a, dec!(0.5));
    assert_eq!(prices.price_b, dec!(0.5));
}

#[test]
fn test_collateral_buy_scenario() {
    let pool = Pool::new(dec!(1000), dec!(1000), dec!(1000)).unwrap();
    let (after, bought) = buy_token_with_usdc(&pool, dec!(100), Outcome::A).unwrap();

    assert!((after.b() - dec!(909.09)).abs() < dec!(0.01));
    assert!((bought - dec!(100)).abs() < dec!(0.01));
    assert!((after.a() - dec!(1100)).abs() < dec!(0.01));
    assert_eq!(after.usdc(), dec!(1100));

    let k = pool.product().unwrap();
    let drift = ((after.product().unwrap() - k) / k).abs();
    assert!(drift < dec!(0.000000001));
}

#[test]
fn test_zero_amounts_are_noops() {
    let pool = Pool::new(dec!(321), dec!(123), dec!(50)).unwrap();

    assert_eq!(buy_token(&pool, dec!(0), Outcome::B).unwrap(), pool);

    let (after, bought) = buy_token_with_usdc(&pool, dec!(0), Outcome::B).unwrap();
    assert_eq!(after, pool);
    assert_eq!(bought, Decimal::ZERO);
}

#[test]
fn test_repeated_exact_buys_keep_invariant() {
    let seed = Pool::new(dec!(1000), dec!(1000), dec!(1000)).unwrap();
    let k = seed.product().unwrap();

    let mut pool = seed;
    for (outcome, spend) in [
        (Outcome::A, dec!(50)),
        (Outcome::B, dec!(300)),
        (Outcome::A, dec!(7.25)),
        (Outcome::B, dec!(1)),
    ] {
        pool = PricingStrategy::ExactConstantProduct
            .buy(&pool, outcome, spend)
            .unwrap()
            .after;
        let drift = ((pool.product().unwrap() - k) / k).abs();
        assert!(drift < dec!(0.000000001));
    }
    assert_eq!(pool.usdc(), dec!(1358.25));
}

#[test]
fn test_buying_raises_bought_side_price_under_exact() {
    // Collateral grows while total supply barely moves, so price A rises
    let pool = Pool::new(dec!(1000), dec!(1000), dec!(1000)).unwrap();
    let trade = PricingStrategy::ExactConstantProduct
        .buy(&pool, Outcome::A, dec!(100))
        .unwrap();
    let before = trade.prices_before().unwrap();
    let after = trade.prices_after().unwrap();

    assert!(after.price_a > before.price_a);
    assert_eq!(after.price_a + after.price_b, Decimal::ONE);
}
