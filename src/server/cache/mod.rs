//! Cache and rate limiter stores.
//!
//! Lookups read through a hash per identifier: the `data` field holds the JSON record,
//! the `unknown` field marks an identifier that could not be resolved. Both are written
//! with a seven day expiry. The rate limiter keeps an integer counter per client key.
//!
//! [`RedisStore`] implements both traits for production, tests supply an in-memory store.

mod lua;
pub mod redis;

pub use redis::RedisStore;

use std::fmt;

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};

use crate::server::{
    error::Error,
    model::identifier::{Callsign, ModeS},
};

/// Lifetime of every cache entry, seven days in seconds
pub const CACHE_TTL_SECONDS: i64 = 604_800;

pub const FIELD_DATA: &str = "data";
pub const FIELD_UNKNOWN: &str = "unknown";

/// Hash based key value store used by the lookup cache
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Whether `key` exists, regardless of which fields it holds
    async fn exists(&self, key: &str) -> Result<bool, Error>;

    /// Value of `field` in the hash at `key`
    ///
    /// # Returns
    /// - `Some(String)`: The stored value
    /// - `None`: If the key or the field is missing
    async fn hget(&self, key: &str, field: &str) -> Result<Option<String>, Error>;

    /// Write `field` in the hash at `key`, creating the key when missing
    ///
    /// Leaves any expiry already set on the key untouched.
    async fn hset(&self, key: &str, field: &str, value: &str) -> Result<(), Error>;

    /// Set the key to expire `seconds` from now, replacing any earlier expiry
    async fn expire(&self, key: &str, seconds: i64) -> Result<(), Error>;

    /// Seconds until the key expires, `None` when the key is missing or has no expiry
    async fn ttl(&self, key: &str) -> Result<Option<i64>, Error>;
}

/// Counter state for a rate limited key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LimiterState {
    /// Points consumed in the current window
    pub consumed: i64,
    /// Milliseconds until the counter resets, zero when the key does not exist
    pub ms_before_next: i64,
}

/// Integer counter store used by the rate limiter
#[async_trait]
pub trait LimiterStore: Send + Sync {
    /// Current counter, zero consumed when the key is absent
    async fn points(&self, key: &str) -> Result<LimiterState, Error>;

    /// Add `points` to the counter, starting a window of `window_ms` if none is running
    async fn consume(&self, key: &str, points: i64, window_ms: i64)
        -> Result<LimiterState, Error>;

    /// Overwrite the counter with `points`, expiring after `duration_ms`
    async fn block(&self, key: &str, points: i64, duration_ms: i64)
        -> Result<LimiterState, Error>;

    /// Add `points` to the counter without touching its expiry
    async fn penalty(&self, key: &str, points: i64) -> Result<LimiterState, Error>;
}

/// Cache key of a lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheKey<'a> {
    ModeS(&'a ModeS),
    Callsign(&'a Callsign),
}

impl CacheKey<'_> {
    /// Marker written to the `unknown` field when the lookup cannot be resolved
    pub fn unknown_marker(&self) -> &'static str {
        match self {
            Self::ModeS(_) => "unknown_aircraft",
            Self::Callsign(_) => "unknown_callsign",
        }
    }
}

impl fmt::Display for CacheKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ModeS(mode_s) => write!(f, "cache::mode_s:{}", mode_s),
            Self::Callsign(callsign) => write!(f, "cache::callsign:{}", callsign),
        }
    }
}

/// Typed access to cached lookups
pub struct LookupCache<'a> {
    store: &'a dyn CacheStore,
}

impl<'a> LookupCache<'a> {
    /// Creates a new instance of [`LookupCache`]
    pub fn new(store: &'a dyn CacheStore) -> Self {
        Self { store }
    }

    /// Whether any entry, positive or negative, exists for `key`
    pub async fn has(&self, key: &CacheKey<'_>) -> Result<bool, Error> {
        self.store.exists(&key.to_string()).await
    }

    /// Cached record for `key`
    ///
    /// A `data` field that no longer parses is logged and read as absent.
    ///
    /// # Arguments
    /// - `key` (&[`CacheKey`]): lookup to read
    ///
    /// # Returns
    /// - `Some(T)`: The cached record
    /// - `None`: For a negative entry, a missing key, or an unreadable record
    /// - [`Error`]: If the store cannot be reached
    pub async fn get<T: DeserializeOwned>(&self, key: &CacheKey<'_>) -> Result<Option<T>, Error> {
        let Some(data) = self.store.hget(&key.to_string(), FIELD_DATA).await? else {
            return Ok(None);
        };

        match serde_json::from_str(&data) {
            Ok(record) => Ok(Some(record)),
            Err(e) => {
                tracing::warn!("Discarding unreadable cache entry {}: {}", key, e);
                Ok(None)
            }
        }
    }

    /// Cache a resolved record under `key` for [`CACHE_TTL_SECONDS`]
    ///
    /// # Arguments
    /// - `key` (&[`CacheKey`]): lookup the record resolves
    /// - `record` (&T): record serialized into the `data` field
    ///
    /// # Returns
    /// - `Ok(())`: If the record was written and the expiry refreshed
    /// - [`Error`]: If the record cannot be serialized or the store cannot be reached
    pub async fn set_data<T: Serialize>(&self, key: &CacheKey<'_>, record: &T) -> Result<(), Error> {
        let key = key.to_string();
        let data = serde_json::to_string(record)?;

        self.store.hset(&key, FIELD_DATA, &data).await?;
        self.store.expire(&key, CACHE_TTL_SECONDS).await
    }

    /// Mark `key` as unresolvable for [`CACHE_TTL_SECONDS`]
    ///
    /// Writes the marker of [`CacheKey::unknown_marker`] into the `unknown` field and
    /// refreshes the expiry.
    pub async fn set_unknown(&self, key: &CacheKey<'_>) -> Result<(), Error> {
        let marker = key.unknown_marker();
        let key = key.to_string();

        self.store.hset(&key, FIELD_UNKNOWN, marker).await?;
        self.store.expire(&key, CACHE_TTL_SECONDS).await
    }
}
