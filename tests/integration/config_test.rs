//! Configuration integration tests

use poly_amm::config::Config;
use poly_amm::pricing::{calculate_token_prices, PricingStrategy};
use rust_decimal_macros::dec;

#[test]
fn test_example_config() {
    let config = Config::example().unwrap();
    assert_eq!(config.pricing.strategy, PricingStrategy::ExactConstantProduct);

    let pool = config.pool.to_pool().unwrap();
    let prices = calculate_token_prices(&pool).unwrap();
    assert_eq!(prices.price_a, dec!(0.5));
}

#[test]
fn test_partial_config() {
    let toml = r#"
        [pricing]
        strategy = "scaled"
    "#;

    let config: Config = toml::from_str(toml).unwrap();
    assert_eq!(config.pricing.strategy, PricingStrategy::ScaledHeuristic);
    assert_eq!(config.pool.usdc, dec!(1000));
}
