//! Resolution services combining the cache, the persistent store, and the scraper.
//!
//! Both services follow the same order: a cache entry of any kind answers the lookup,
//! otherwise the database is consulted, and only then an external source. Whatever the
//! outcome, it is cached for seven days so a repeated lookup never reaches further than
//! the cache.

pub mod aircraft;
pub mod flightroute;
