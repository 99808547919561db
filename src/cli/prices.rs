//! Prices command implementation

use crate::config::Config;
use crate::pricing::{calculate_token_prices, Pool};
use clap::Args;
use rust_decimal::Decimal;

#[derive(Args, Debug)]
pub struct PricesArgs {
    /// A tokens (defaults to configured pool)
    #[arg(long)]
    pub a: Option<Decimal>,

    /// B tokens (defaults to configured pool)
    #[arg(long)]
    pub b: Option<Decimal>,

    /// Collateral (defaults to configured pool)
    #[arg(long)]
    pub usdc: Option<Decimal>,
}

impl PricesArgs {
    /// Pool from the arguments, falling back to the configured seed
    pub fn pool(&self, config: &Config) -> anyhow::Result<Pool> {
        let seed = &config.pool;
        Ok(Pool::new(
            self.a.unwrap_or(seed.a),
            self.b.unwrap_or(seed.b),
            self.usdc.unwrap_or(seed.usdc),
        )?)
    }

    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let pool = self.pool(config)?;
        let prices = calculate_token_prices(&pool)?;

        println!("Pool: A={} B={} USDC={}", pool.a(), pool.b(), pool.usdc());
        println!("  Price A: {:.4}", prices.price_a);
        println!("  Price B: {:.4}", prices.price_b);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_pool_falls_back_to_config() {
        let config = Config::example().unwrap();
        let args = PricesArgs {
            a: Some(dec!(250)),
            b: None,
            usdc: None,
        };
        let pool = args.pool(&config).unwrap();
        assert_eq!(pool.a(), dec!(250));
        assert_eq!(pool.b(), config.pool.b);
    }

    #[test]
    fn test_pool_rejects_zero_override() {
        let config = Config::example().unwrap();
        let args = PricesArgs {
            a: None,
            b: Some(dec!(0)),
            usdc: None,
        };
        assert!(args.pool(&config).is_err());
    }
}
