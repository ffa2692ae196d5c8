//! Redis backed stores.

use async_trait::async_trait;
use fred::prelude::*;

use crate::server::{
    cache::{
        lua::{CONSUME_SCRIPT, PENALTY_SCRIPT},
        CacheStore, LimiterState, LimiterStore,
    },
    error::Error,
    util::timed,
};

/// Cache and limiter store over a `fred` connection pool
#[derive(Clone)]
pub struct RedisStore {
    pool: Pool,
}

impl RedisStore {
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }
}

/// PTTL returns -1 without expiry and -2 for a missing key, both reported as zero
fn limiter_state(consumed: i64, pttl: i64) -> LimiterState {
    LimiterState {
        consumed,
        ms_before_next: pttl.max(0),
    }
}

#[async_trait]
impl CacheStore for RedisStore {
    async fn exists(&self, key: &str) -> Result<bool, Error> {
        timed("redis::exists", async {
            let count: i64 = self.pool.exists(key).await?;
            Ok::<_, Error>(count > 0)
        })
        .await
    }

    async fn hget(&self, key: &str, field: &str) -> Result<Option<String>, Error> {
        timed("redis::hget", async {
            let value: Option<String> = self.pool.hget(key, field).await?;
            Ok::<_, Error>(value)
        })
        .await
    }

    async fn hset(&self, key: &str, field: &str, value: &str) -> Result<(), Error> {
        timed("redis::hset", async {
            let _: i64 = self.pool.hset(key, (field, value)).await?;
            Ok::<_, Error>(())
        })
        .await
    }

    async fn expire(&self, key: &str, seconds: i64) -> Result<(), Error> {
        timed("redis::expire", async {
            let _: i64 = self.pool.expire(key, seconds, None).await?;
            Ok::<_, Error>(())
        })
        .await
    }

    async fn ttl(&self, key: &str) -> Result<Option<i64>, Error> {
        timed("redis::ttl", async {
            let ttl: i64 = self.pool.ttl(key).await?;
            Ok::<_, Error>((ttl >= 0).then_some(ttl))
        })
        .await
    }
}

#[async_trait]
impl LimiterStore for RedisStore {
    async fn points(&self, key: &str) -> Result<LimiterState, Error> {
        timed("redis::limiter_points", async {
            let consumed: Option<i64> = self.pool.get(key).await?;
            let pttl: i64 = self.pool.pttl(key).await?;

            Ok::<_, Error>(limiter_state(consumed.unwrap_or(0), pttl))
        })
        .await
    }

    async fn consume(
        &self,
        key: &str,
        points: i64,
        window_ms: i64,
    ) -> Result<LimiterState, Error> {
        timed("redis::limiter_consume", async {
            let (consumed, pttl): (i64, i64) = self
                .pool
                .eval(
                    CONSUME_SCRIPT,
                    vec![key],
                    vec![points.to_string(), window_ms.to_string()],
                )
                .await?;

            Ok::<_, Error>(limiter_state(consumed, pttl))
        })
        .await
    }

    async fn block(
        &self,
        key: &str,
        points: i64,
        duration_ms: i64,
    ) -> Result<LimiterState, Error> {
        timed("redis::limiter_block", async {
            let _: () = self
                .pool
                .set(key, points, Some(Expiration::PX(duration_ms)), None, false)
                .await?;

            Ok::<_, Error>(limiter_state(points, duration_ms))
        })
        .await
    }

    async fn penalty(&self, key: &str, points: i64) -> Result<LimiterState, Error> {
        timed("redis::limiter_penalty", async {
            let (consumed, pttl): (i64, i64) = self
                .pool
                .eval(PENALTY_SCRIPT, vec![key], vec![points.to_string()])
                .await?;

            Ok::<_, Error>(limiter_state(consumed, pttl))
        })
        .await
    }
}
