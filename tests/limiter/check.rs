//! Tests for RateLimiter::check method.
//!
//! Verifies the per window budget, the block applied when it is exceeded, and the longer
//! block for clients that keep sending while blocked.

use std::time::Duration;

use adsbdb::server::{
    error::Error,
    limiter::{RateLimiter, BLOCK_MS, ESCALATION_BLOCK_MS, ESCALATION_POINTS, PENALTY_POINTS, POINTS},
};
use adsbdb_test_utils::prelude::*;

fn ms_before_next(result: Result<(), Error>) -> i64 {
    match result {
        Err(Error::RateLimited { ms_before_next }) => ms_before_next,
        other => panic!("expected rate limited, got {:?}", other),
    }
}

/// Tests requests within the budget.
///
/// Expected: Ok for every request, counter equal to requests sent
#[tokio::test]
async fn allows_requests_within_budget() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let limiter = test.limiter();

    for _ in 0..POINTS {
        limiter.check(TEST_CLIENT).await?;
    }

    assert_eq!(test.store.counter(&RateLimiter::key(TEST_CLIENT)), Some(POINTS));

    Ok(())
}

/// Tests the first request over the budget.
///
/// Expected: Err with RateLimited for the full block duration
#[tokio::test]
async fn blocks_first_request_over_budget() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let limiter = test.limiter();

    for _ in 0..POINTS {
        limiter.check(TEST_CLIENT).await?;
    }

    let ms = ms_before_next(limiter.check(TEST_CLIENT).await);
    assert_eq!(ms, BLOCK_MS);

    let key = RateLimiter::key(TEST_CLIENT);
    assert_eq!(test.store.counter(&key), Some(POINTS + 1));
    assert!(test.store.remaining(&key).unwrap() > Duration::from_secs(290));

    Ok(())
}

/// Tests requests sent while blocked.
///
/// Expected: Err with the remaining block time, block not restarted
#[tokio::test]
async fn reports_remaining_block() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let limiter = test.limiter();
    let key = RateLimiter::key(TEST_CLIENT);

    test.store
        .set_counter(&key, POINTS + 1, Duration::from_secs(120));

    let ms = ms_before_next(limiter.check(TEST_CLIENT).await);
    assert!(ms <= 120_000);
    assert!(ms > 110_000);
    assert_eq!(test.store.counter(&key), Some(POINTS + 2));

    Ok(())
}

/// Tests a client that kept sending well past the budget.
///
/// Expected: Err with the escalated block, penalty added to the counter
#[tokio::test]
async fn escalates_persistent_clients() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let limiter = test.limiter();
    let key = RateLimiter::key(TEST_CLIENT);

    test.store
        .set_counter(&key, ESCALATION_POINTS, Duration::from_secs(60));

    let ms = ms_before_next(limiter.check(TEST_CLIENT).await);
    assert!(ms > ESCALATION_BLOCK_MS - 10_000);
    assert!(ms <= ESCALATION_BLOCK_MS);
    assert_eq!(test.store.counter(&key), Some(POINTS + 1 + PENALTY_POINTS + 1));

    Ok(())
}

/// Tests that clients are tracked independently.
///
/// Expected: Ok for a second client while the first is blocked
#[tokio::test]
async fn tracks_clients_separately() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let limiter = test.limiter();

    test.store.set_counter(
        &RateLimiter::key(TEST_CLIENT),
        POINTS + 1,
        Duration::from_secs(60),
    );

    assert!(limiter.check(TEST_CLIENT).await.is_err());
    limiter.check("198.51.100.1").await?;

    Ok(())
}

/// Tests the budget after the window expires.
///
/// Expected: Ok once the previous counter is gone
#[tokio::test]
async fn resets_after_window() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let limiter = test.limiter();
    let key = RateLimiter::key(TEST_CLIENT);

    test.store
        .set_counter(&key, POINTS, Duration::from_millis(20));
    tokio::time::sleep(Duration::from_millis(40)).await;

    limiter.check(TEST_CLIENT).await?;
    assert_eq!(test.store.counter(&key), Some(1));

    Ok(())
}
