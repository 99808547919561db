//! Integration tests

mod config_test;
mod market_test;
mod pricing_test;
mod simulation_test;
