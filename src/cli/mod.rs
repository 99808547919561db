//! CLI interface for poly-amm
//!
//! Provides subcommands for:
//! - `prices`: Show implied prices for a pool
//! - `buy`: Simulate a single buy
//! - `simulate`: Replay a scenario file
//! - `config`: Show configuration

mod buy;
mod prices;
mod simulate;

pub use buy::BuyArgs;
pub use prices::PricesArgs;
pub use simulate::SimulateArgs;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "poly-amm")]
#[command(about = "Two-outcome prediction market AMM simulator")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show implied token prices for a pool
    Prices(PricesArgs),
    /// Simulate buying one outcome
    Buy(BuyArgs),
    /// Replay a scenario file
    Simulate(SimulateArgs),
    /// Show configuration
    Config,
}

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}
