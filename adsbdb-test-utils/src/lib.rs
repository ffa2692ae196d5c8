//! Test harness for adsbdb.
//!
//! [`TestBuilder`] declares the database fixtures and mock HTTP endpoints a test needs,
//! `build()` turns them into a [`TestContext`] backed by an in-memory SQLite database,
//! an in-memory [`MemoryStore`] standing in for Redis, and a scraper pointed at a
//! mockito server.

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod memory;
pub mod redis;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;
pub use memory::MemoryStore;

pub mod prelude {
    pub use crate::{
        constant::*,
        fixtures::factory::{self, AircraftFixture, AirportFixture},
        MemoryStore, TestBuilder, TestContext, TestError,
    };
}
