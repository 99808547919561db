//! Integration tests for the cumulative market model

use poly_amm::market::{Market, MarketError, MarketSessions, SessionStore};
use poly_amm::pricing::Outcome;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[test]
fn test_invest_scenario() {
    let mut market = Market::new();

    market.invest(Outcome::A, dec!(10)).unwrap();
    assert_eq!(market.shares().a, dec!(1));
    assert_eq!(market.shares().b, dec!(0));
    assert_eq!(market.total_invested(), dec!(10));
    assert_eq!(market.history().len(), 1);

    market.invest(Outcome::B, dec!(10)).unwrap();
    assert_eq!(market.shares().a, dec!(0.5));
    assert_eq!(market.shares().b, dec!(0.5));
    assert_eq!(market.total_invested(), dec!(20));
}

#[test]
fn test_invariants_over_long_sequence() {
    let mut market = Market::new();
    market.seed_sell_pressure(Outcome::A, dec!(50)).unwrap();

    let mut calls = 0;
    for i in 0..40u32 {
        let outcome = if i % 3 == 0 { Outcome::B } else { Outcome::A };
        let amount = Decimal::from(i % 7) + dec!(0.5);
        market.invest(outcome, amount).unwrap();
        calls += 1;

        let shares = market.shares();
        assert_eq!(shares.a + shares.b, Decimal::ONE);
        assert!(market.sell_pressure().a >= Decimal::ZERO);
        assert!(market.sell_pressure().b >= Decimal::ZERO);
    }

    assert_eq!(market.history().len(), calls);
    assert_eq!(market.buy_pressure().total(), market.total_invested());
    assert_eq!(market.investments().total(), market.total_invested());
    assert_eq!(market.sell_pressure().a, Decimal::ZERO);
}

#[test]
fn test_rejected_invest_leaves_state() {
    let mut market = Market::new();
    market.invest(Outcome::B, dec!(2)).unwrap();

    let result = market.invest(Outcome::A, dec!(-3));
    assert!(matches!(result, Err(MarketError::InvalidInput(_))));
    assert_eq!(market.history().len(), 1);
    assert_eq!(market.get_price(Outcome::B), dec!(1));
}

#[tokio::test]
async fn test_session_store_isolation() {
    let store = SessionStore::new();
    let alice = store.create().await;
    let bob = store.create().await;

    store.invest(alice, Outcome::B, dec!(9)).await.unwrap();
    store.invest(bob, Outcome::A, dec!(1)).await.unwrap();
    store.invest(bob, Outcome::B, dec!(3)).await.unwrap();

    let alice_market = store.snapshot(alice).await.unwrap();
    let bob_market = store.snapshot(bob).await.unwrap();
    assert_eq!(alice_market.get_price(Outcome::B), dec!(1));
    assert_eq!(bob_market.get_price(Outcome::A), dec!(0.25));
    assert_eq!(alice_market.history().len(), 1);
    assert_eq!(bob_market.history().len(), 2);
}
