//! Redis connection for the store adapter tests.

use std::sync::Mutex;

use adsbdb::server::cache::RedisStore;
use fred::prelude::*;

use crate::TestError;

/// Redis test setup with automatic cleanup
///
/// Every key handed out by [`RedisTest::key`] is namespaced to this instance and deleted
/// when it is dropped.
pub struct RedisTest {
    pub redis_pool: Pool,
    prefix: String,
    keys: Mutex<Vec<String>>,
}

impl RedisTest {
    /// Connect to the local Redis used by the test suite
    pub async fn new() -> Result<Self, TestError> {
        let redis_config = Config::from_url("redis://127.0.0.1:6379")?;
        let redis_pool = Pool::new(redis_config, None, None, None, 2)?;
        redis_pool.init().await?;

        Ok(RedisTest {
            redis_pool,
            prefix: Self::generate_unique_prefix(),
            keys: Mutex::new(Vec::new()),
        })
    }

    pub fn store(&self) -> RedisStore {
        RedisStore::new(self.redis_pool.clone())
    }

    /// A key unique to this test instance
    pub fn key(&self, name: &str) -> String {
        let key = format!("{}:{}", self.prefix, name);
        self.keys
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(key.clone());
        key
    }

    fn generate_unique_prefix() -> String {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};
        use std::time::{SystemTime, UNIX_EPOCH};

        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or_default();

        let mut hasher = DefaultHasher::new();
        timestamp.hash(&mut hasher);
        std::thread::current().id().hash(&mut hasher);

        format!("test:{}:{:x}", timestamp, hasher.finish())
    }
}

impl Drop for RedisTest {
    fn drop(&mut self) {
        let pool = self.redis_pool.clone();
        let keys = std::mem::take(self.keys.get_mut().unwrap_or_else(|e| e.into_inner()));

        if keys.is_empty() {
            return;
        }

        if let Ok(handle) = tokio::runtime::Handle::try_current() {
            handle.spawn(async move {
                let _: Result<(), fred::error::Error> = pool.del(keys).await;
            });
        }
    }
}
