//! Cumulative-investment market module
//!
//! Tracks invested collateral per outcome, the derived share prices,
//! buy/sell pressure and a price history. Each session owns its own market.

mod session;
mod state;
mod types;

pub use session::SessionStore;
pub use state::Market;
pub use types::{MarketError, OutcomeAmounts, PriceSnapshot, SessionId};

use crate::pricing::Outcome;
use async_trait::async_trait;
use rust_decimal::Decimal;

/// Trait for multi-session market hosts
#[async_trait]
pub trait MarketSessions: Send + Sync {
    /// Open a new session with a fresh market
    async fn create(&self) -> SessionId;
    /// Invest in one session's market
    async fn invest(
        &self,
        id: SessionId,
        outcome: Outcome,
        amount: Decimal,
    ) -> Result<PriceSnapshot, MarketError>;
    /// Copy of one session's market state
    async fn snapshot(&self, id: SessionId) -> Result<Market, MarketError>;
    /// Close a session, returning its final state
    async fn close(&self, id: SessionId) -> Result<Market, MarketError>;
}
