//! Per client request budget.
//!
//! Each client key may spend [`POINTS`] points per [`WINDOW_MS`] window, one per request.
//! Going over the budget blocks the key for [`BLOCK_MS`]. A client that keeps sending while
//! blocked pushes its counter up, and once it reaches [`ESCALATION_POINTS`] the key is
//! blocked for [`ESCALATION_BLOCK_MS`] with [`PENALTY_POINTS`] added on top.

use std::sync::Arc;

use crate::server::{cache::LimiterStore, error::Error};

/// Points available per window
pub const POINTS: i64 = 600;
pub const WINDOW_MS: i64 = 60 * 1000;
/// Block applied the first time the budget is exceeded within a window
pub const BLOCK_MS: i64 = 5 * 60 * 1000;
pub const ESCALATION_POINTS: i64 = POINTS * 6;
pub const ESCALATION_BLOCK_MS: i64 = 15 * 60 * 1000;
pub const PENALTY_POINTS: i64 = 360;

const KEY_PREFIX: &str = "limiter";

#[derive(Clone)]
pub struct RateLimiter {
    store: Arc<dyn LimiterStore>,
}

impl RateLimiter {
    pub fn new(store: Arc<dyn LimiterStore>) -> Self {
        Self { store }
    }

    /// Store key tracking a client
    pub fn key(client: &str) -> String {
        format!("{}:{}", KEY_PREFIX, client)
    }

    /// Spend one point for `client`
    ///
    /// # Returns
    /// - `Ok(())`: If the request is within budget
    /// - [`Error::RateLimited`]: With the milliseconds until the client may try again
    /// - [`Error`]: If the limiter store cannot be reached
    pub async fn check(&self, client: &str) -> Result<(), Error> {
        let key = Self::key(client);

        let current = self.store.points(&key).await?;
        if current.consumed >= ESCALATION_POINTS {
            tracing::warn!("Escalating block for client {}", client);

            self.store
                .block(&key, POINTS + 1, ESCALATION_BLOCK_MS)
                .await?;
            self.store.penalty(&key, PENALTY_POINTS).await?;
        }

        let state = self.store.consume(&key, 1, WINDOW_MS).await?;
        if state.consumed <= POINTS {
            return Ok(());
        }

        // Only the request that first crosses the budget starts the block
        let ms_before_next = if state.consumed <= POINTS + 1 {
            self.store.block(&key, state.consumed, BLOCK_MS).await?.ms_before_next
        } else {
            state.ms_before_next
        };

        Err(Error::RateLimited { ms_before_next })
    }
}
