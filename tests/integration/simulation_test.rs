//! End-to-end scenario replay tests

use poly_amm::pricing::{Outcome, PricingStrategy};
use poly_amm::simulation::{Scenario, Simulator};
use rust_decimal_macros::dec;
use std::io::Write;

const SCENARIO: &str = r#"
    [pool]
    a = 1000
    b = 1000
    usdc = 1000

    [[trades]]
    outcome = "a"
    amount = 100

    [[trades]]
    outcome = "b"
    amount = 40

    [[investments]]
    outcome = "a"
    amount = 10

    [[investments]]
    outcome = "b"
    amount = 10
"#;

#[test]
fn test_scenario_file_replay() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SCENARIO.as_bytes()).unwrap();

    let scenario = Scenario::load(file.path()).unwrap();
    let result = Simulator::new(PricingStrategy::ExactConstantProduct)
        .run(&scenario)
        .unwrap();

    assert_eq!(result.summary.trade_count, 2);
    assert_eq!(result.final_pool.usdc(), dec!(1140));
    assert_eq!(result.market.history().len(), 2);
    assert_eq!(result.market.get_price(Outcome::A), dec!(0.5));
    assert!(result.format_table().contains("SIMULATION RESULTS (exact)"));
}

#[test]
fn test_scaled_replay_lowers_collateral() {
    let scenario: Scenario = toml::from_str(SCENARIO).unwrap();
    let result = Simulator::new(PricingStrategy::ScaledHeuristic)
        .run(&scenario)
        .unwrap();

    assert_eq!(result.final_pool.a(), dec!(1100));
    assert_eq!(result.final_pool.b(), dec!(1040));
    assert!(result.summary.total_usdc_delta < dec!(0));
}

#[test]
fn test_result_serializes_to_json() {
    let scenario: Scenario = toml::from_str(SCENARIO).unwrap();
    let result = Simulator::new(PricingStrategy::ExactConstantProduct)
        .run(&scenario)
        .unwrap();

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["trades"].as_array().unwrap().len(), 2);
    assert_eq!(json["market"]["history"].as_array().unwrap().len(), 2);
}

#[test]
fn test_missing_scenario_file() {
    assert!(Scenario::load("/nonexistent/scenario.toml").is_err());
}
