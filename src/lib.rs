//! poly-amm: Two-outcome prediction market AMM simulator
//!
//! This library provides the core components for:
//! - Linear-share pool pricing
//! - Token-sized and collateral-sized buys (two distinct formulas)
//! - A cumulative-investment market model with buy/sell pressure
//! - Per-session market isolation
//! - Scenario replay with summary reports
//! - Structured logging and metrics

pub mod cli;
pub mod config;
pub mod market;
pub mod pricing;
pub mod simulation;
pub mod telemetry;
