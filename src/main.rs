use clap::Parser;
use poly_amm::cli::{Cli, Commands};
use poly_amm::config::Config;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = match Config::load(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: Could not load config from {}: {}", cli.config, e);
            eprintln!("Using default configuration");
            Config::example()?
        }
    };

    // Initialize telemetry
    poly_amm::telemetry::init_telemetry(&config.telemetry)?;

    match cli.command {
        Commands::Prices(args) => {
            tracing::debug!("Calculating prices");
            args.execute(&config)?;
        }
        Commands::Buy(args) => {
            tracing::info!(outcome = %args.outcome, amount = %args.amount, "Simulating buy");
            args.execute(&config)?;
        }
        Commands::Simulate(args) => {
            tracing::info!("Starting simulation");
            args.execute(&config)?;
        }
        Commands::Config => {
            println!("Current configuration:");
            println!(
                "  Pool: A={} B={} USDC={}",
                config.pool.a, config.pool.b, config.pool.usdc
            );
            println!("  Strategy: {}", config.pricing.strategy);
            println!(
                "  Seeded sell pressure: A={} B={}",
                config.market.sell_pressure_a, config.market.sell_pressure_b
            );
            println!(
                "  Logging: {} ({:?})",
                config.telemetry.log_level, config.telemetry.log_format
            );
        }
    }

    Ok(())
}
