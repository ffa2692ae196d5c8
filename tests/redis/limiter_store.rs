//! Tests for the LimiterStore implementation of RedisStore.

use adsbdb::server::cache::LimiterStore;
use adsbdb_test_utils::{redis::RedisTest, TestError};

/// Tests consuming points from a new key.
///
/// Expected: Ok with the window started on the first consume and kept afterwards
#[tokio::test]
async fn consume_starts_window() -> Result<(), TestError> {
    let redis = RedisTest::new().await?;
    let store = redis.store();
    let key = redis.key("limiter:203.0.113.7");

    let empty = store.points(&key).await?;
    assert_eq!(empty.consumed, 0);

    let first = store.consume(&key, 1, 60_000).await?;
    let second = store.consume(&key, 1, 120_000).await?;

    assert_eq!(first.consumed, 1);
    assert_eq!(second.consumed, 2);
    assert!(first.ms_before_next > 59_000 && first.ms_before_next <= 60_000);
    assert!(second.ms_before_next <= 60_000);

    Ok(())
}

/// Tests blocking a key and adding a penalty.
///
/// Expected: Ok with the counter overwritten and the penalty keeping the block expiry
#[tokio::test]
async fn block_and_penalty() -> Result<(), TestError> {
    let redis = RedisTest::new().await?;
    let store = redis.store();
    let key = redis.key("limiter:198.51.100.1");

    store.consume(&key, 3600, 60_000).await?;

    let blocked = store.block(&key, 601, 900_000).await?;
    assert_eq!(blocked.consumed, 601);
    assert!(blocked.ms_before_next > 899_000);

    let penalised = store.penalty(&key, 360).await?;
    assert_eq!(penalised.consumed, 961);
    assert!(penalised.ms_before_next > 899_000);

    let current = store.points(&key).await?;
    assert_eq!(current.consumed, 961);

    Ok(())
}
