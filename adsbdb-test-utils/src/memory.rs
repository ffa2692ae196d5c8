//! In-memory stand in for Redis.

use std::{
    collections::HashMap,
    sync::{Mutex, MutexGuard},
    time::{Duration, Instant},
};

use adsbdb::server::{
    cache::{CacheStore, LimiterState, LimiterStore},
    error::Error,
};
use async_trait::async_trait;

#[derive(Debug, Clone)]
enum Value {
    Hash(HashMap<String, String>),
    Counter(i64),
}

#[derive(Debug, Clone)]
struct Entry {
    value: Value,
    expires_at: Option<Instant>,
}

impl Entry {
    fn remaining(&self) -> Option<Duration> {
        self.expires_at
            .map(|at| at.saturating_duration_since(Instant::now()))
    }
}

/// Cache and limiter store keeping every key in a map, with expiry honoured on read
///
/// Besides the store traits it offers synchronous accessors so tests can inspect and
/// rearrange state directly.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, Entry>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Entry>> {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        let now = Instant::now();
        entries.retain(|_, entry| entry.expires_at.map_or(true, |at| at > now));
        entries
    }

    /// Whether a live key exists
    pub fn contains(&self, key: &str) -> bool {
        self.lock().contains_key(key)
    }

    /// Value of a hash field
    pub fn field(&self, key: &str, field: &str) -> Option<String> {
        match &self.lock().get(key)?.value {
            Value::Hash(hash) => hash.get(field).cloned(),
            Value::Counter(_) => None,
        }
    }

    /// Write a hash field without touching the expiry
    pub fn set_field(&self, key: &str, field: &str, value: &str) {
        let mut entries = self.lock();
        let entry = entries.entry(key.to_string()).or_insert_with(|| Entry {
            value: Value::Hash(HashMap::new()),
            expires_at: None,
        });

        match &mut entry.value {
            Value::Hash(hash) => {
                hash.insert(field.to_string(), value.to_string());
            }
            existing @ Value::Counter(_) => {
                *existing = Value::Hash(HashMap::from([(field.to_string(), value.to_string())]));
            }
        }
    }

    /// Remaining lifetime of a key
    pub fn remaining(&self, key: &str) -> Option<Duration> {
        self.lock().get(key)?.remaining()
    }

    /// Current counter of a limiter key
    pub fn counter(&self, key: &str) -> Option<i64> {
        match self.lock().get(key)?.value {
            Value::Counter(count) => Some(count),
            Value::Hash(_) => None,
        }
    }

    /// Overwrite a limiter key
    pub fn set_counter(&self, key: &str, count: i64, ttl: Duration) {
        self.lock().insert(
            key.to_string(),
            Entry {
                value: Value::Counter(count),
                expires_at: Some(Instant::now() + ttl),
            },
        );
    }

    pub fn remove(&self, key: &str) {
        self.lock().remove(key);
    }

    /// All live keys, sorted
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.lock().keys().cloned().collect();
        keys.sort();
        keys
    }

    fn state(entry: &Entry) -> LimiterState {
        let consumed = match entry.value {
            Value::Counter(count) => count,
            Value::Hash(_) => 0,
        };

        LimiterState {
            consumed,
            ms_before_next: entry
                .remaining()
                .map_or(0, |remaining| remaining.as_millis() as i64),
        }
    }

    fn add(&self, key: &str, points: i64, window: Option<Duration>) -> LimiterState {
        let mut entries = self.lock();
        let entry = entries.entry(key.to_string()).or_insert_with(|| Entry {
            value: Value::Counter(0),
            expires_at: window.map(|window| Instant::now() + window),
        });

        match &mut entry.value {
            Value::Counter(count) => *count += points,
            existing @ Value::Hash(_) => *existing = Value::Counter(points),
        }

        Self::state(entry)
    }
}

fn millis(ms: i64) -> Duration {
    Duration::from_millis(ms.max(0) as u64)
}

#[async_trait]
impl CacheStore for MemoryStore {
    async fn exists(&self, key: &str) -> Result<bool, Error> {
        Ok(self.contains(key))
    }

    async fn hget(&self, key: &str, field: &str) -> Result<Option<String>, Error> {
        Ok(self.field(key, field))
    }

    async fn hset(&self, key: &str, field: &str, value: &str) -> Result<(), Error> {
        self.set_field(key, field, value);
        Ok(())
    }

    async fn expire(&self, key: &str, seconds: i64) -> Result<(), Error> {
        if let Some(entry) = self.lock().get_mut(key) {
            entry.expires_at = Some(Instant::now() + Duration::from_secs(seconds.max(0) as u64));
        }
        Ok(())
    }

    async fn ttl(&self, key: &str) -> Result<Option<i64>, Error> {
        Ok(self.remaining(key).map(|remaining| remaining.as_secs() as i64))
    }
}

#[async_trait]
impl LimiterStore for MemoryStore {
    async fn points(&self, key: &str) -> Result<LimiterState, Error> {
        Ok(self
            .lock()
            .get(key)
            .map(Self::state)
            .unwrap_or(LimiterState {
                consumed: 0,
                ms_before_next: 0,
            }))
    }

    async fn consume(
        &self,
        key: &str,
        points: i64,
        window_ms: i64,
    ) -> Result<LimiterState, Error> {
        Ok(self.add(key, points, Some(millis(window_ms))))
    }

    async fn block(
        &self,
        key: &str,
        points: i64,
        duration_ms: i64,
    ) -> Result<LimiterState, Error> {
        self.set_counter(key, points, millis(duration_ms));
        Ok(LimiterState {
            consumed: points,
            ms_before_next: duration_ms,
        })
    }

    async fn penalty(&self, key: &str, points: i64) -> Result<LimiterState, Error> {
        Ok(self.add(key, points, None))
    }
}
