//! Test context structure and utilities.
//!
//! This module provides the `TestContext` returned by `TestBuilder`. The context holds an
//! in-memory SQLite database, the in-memory cache store, a mock HTTP server for the photo
//! and flightroute sources, and a scraper configured to use it.

use std::{sync::Arc, time::Instant};

use adsbdb::server::{
    cache::CacheStore, limiter::RateLimiter, model::app::AppState, scraper::Scraper,
};
use mockito::{Mock, Server, ServerGuard};
use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::{error::TestError, memory::MemoryStore};

/// Test context structure returned by `TestBuilder`
///
/// ```ignore
/// let mut test = TestBuilder::new().with_lookup_tables().build().await?;
///
/// let service = AircraftService::new(&test.db, test.cache(), &test.scraper);
///
/// test.assert_mocks();
/// ```
pub struct TestContext {
    /// Database connection to in-memory SQLite database
    pub db: DatabaseConnection,
    /// Cache and limiter store shared by every handle built from this context
    pub store: Arc<MemoryStore>,
    /// Scraper configured to use the mock server for both sources
    pub scraper: Scraper,

    /// Mock HTTP server for the photo and flightroute sources
    pub(crate) server: ServerGuard,
    /// Collection of mock HTTP endpoints for assertion
    pub(crate) mocks: Vec<Mock>,
}

impl TestContext {
    /// Create a new test context.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context
    /// - `Err(TestError::DbErr)` - Database connection failed
    /// - `Err(TestError::AdsbdbError)` - Scraper client could not be built
    pub(crate) async fn new(allow_photo: bool, allow_flightroute: bool) -> Result<Self, TestError> {
        let server = Server::new_async().await;
        let scraper = Scraper::new(server.url(), server.url())?
            .allow_photo(allow_photo)
            .allow_flightroute(allow_flightroute);

        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext {
            db,
            store: Arc::new(MemoryStore::new()),
            scraper,
            server,
            mocks: Vec::new(),
        })
    }

    /// Create database tables from schema statements.
    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// The cache store as the lookup services take it
    pub fn cache(&self) -> &dyn CacheStore {
        self.store.as_ref()
    }

    pub fn limiter(&self) -> RateLimiter {
        RateLimiter::new(self.store.clone())
    }

    /// Application state for driving the router
    pub fn app_state(&self) -> AppState {
        AppState {
            db: self.db.clone(),
            cache: self.store.clone(),
            limiter: self.limiter(),
            scraper: self.scraper.clone(),
            started_at: Instant::now(),
        }
    }

    /// Base url of the mock server
    pub fn server_url(&self) -> String {
        self.server.url()
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
