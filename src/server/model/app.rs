use std::{sync::Arc, time::Instant};

use sea_orm::DatabaseConnection;

use crate::server::{cache::CacheStore, limiter::RateLimiter, scraper::Scraper};

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub cache: Arc<dyn CacheStore>,
    pub limiter: RateLimiter,
    pub scraper: Scraper,
    pub started_at: Instant,
}
