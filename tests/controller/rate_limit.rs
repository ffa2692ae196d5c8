//! Tests for the rate limiting middleware.

use std::time::Duration;

use adsbdb::server::limiter::{RateLimiter, POINTS};
use adsbdb_test_utils::prelude::*;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};

use super::{get, json, send};

/// Tests that each request spends a point of the calling client.
///
/// Expected: Counter of the proxy reported client incremented
#[tokio::test]
async fn counts_requests_per_client() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let request = Request::builder()
        .uri("/v1/online")
        .header("x-real-ip", TEST_CLIENT)
        .body(Body::empty())
        .unwrap();
    let (status, _) = json(send(&test, request).await).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(test.store.counter(&RateLimiter::key(TEST_CLIENT)), Some(1));

    Ok(())
}

/// Tests a request from a blocked client.
///
/// Expected: 429 with a Retry-After header matching the message
#[tokio::test]
async fn rejects_blocked_client() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    test.store.set_counter(
        &RateLimiter::key(TEST_CLIENT),
        POINTS + 1,
        Duration::from_secs(30),
    );

    let request = Request::builder()
        .uri("/v1/online")
        .header("x-real-ip", TEST_CLIENT)
        .body(Body::empty())
        .unwrap();
    let response = send(&test, request).await;

    let retry_after: u64 = response.headers()[header::RETRY_AFTER]
        .to_str()
        .unwrap()
        .parse()
        .unwrap();
    assert!((29..=30).contains(&retry_after));

    let (status, body) = json(response).await;
    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(
        body["response"],
        format!("rate limited for {} seconds", retry_after)
    );

    Ok(())
}

/// Tests that unknown endpoints are rate limited too.
///
/// Expected: 429 for a client without an address
#[tokio::test]
async fn limits_unknown_endpoints() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    test.store.set_counter(
        &RateLimiter::key("UNKNOWN"),
        POINTS + 1,
        Duration::from_secs(30),
    );

    let (status, _) = json(get(&test, "/v1/unknown").await).await;
    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);

    Ok(())
}
