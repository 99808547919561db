//! Per-session market isolation

use super::{Market, MarketError, MarketSessions, PriceSnapshot, SessionId};
use crate::pricing::Outcome;
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

/// Owns one independent market per session
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<SessionId, Arc<Mutex<Market>>>>>,
}

impl SessionStore {
    /// Create an empty session store
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of open sessions
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Whether no sessions are open
    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }

    async fn market(&self, id: SessionId) -> Result<Arc<Mutex<Market>>, MarketError> {
        let sessions = self.sessions.read().await;
        sessions
            .get(&id)
            .cloned()
            .ok_or(MarketError::UnknownSession(id))
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MarketSessions for SessionStore {
    async fn create(&self) -> SessionId {
        let id = Uuid::new_v4();
        let mut sessions = self.sessions.write().await;
        sessions.insert(id, Arc::new(Mutex::new(Market::new())));

        tracing::info!(%id, "Market session opened");
        id
    }

    async fn invest(
        &self,
        id: SessionId,
        outcome: Outcome,
        amount: Decimal,
    ) -> Result<PriceSnapshot, MarketError> {
        let market = self.market(id).await?;
        let mut market = market.lock().await;
        market.invest(outcome, amount)
    }

    async fn snapshot(&self, id: SessionId) -> Result<Market, MarketError> {
        let market = self.market(id).await?;
        let market = market.lock().await;
        Ok(market.clone())
    }

    async fn close(&self, id: SessionId) -> Result<Market, MarketError> {
        let market = {
            let mut sessions = self.sessions.write().await;
            sessions.remove(&id).ok_or(MarketError::UnknownSession(id))?
        };

        tracing::info!(%id, "Market session closed");
        let market = market.lock().await;
        Ok(market.clone())
    }
}
