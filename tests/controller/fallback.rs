//! Tests for requests that match no endpoint.

use adsbdb_test_utils::prelude::*;
use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};

use super::{get, json, send};

/// Tests a path outside the API.
///
/// Expected: 404 with the unknown endpoint message
#[tokio::test]
async fn unknown_path() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    for uri in ["/", "/v1/unknown", "/v2/online", "/v1/aircraft"] {
        let (status, body) = json(get(&test, uri).await).await;

        assert_eq!(status, StatusCode::NOT_FOUND, "{}", uri);
        assert_eq!(body["response"], "unknown endpoint");
    }

    Ok(())
}

/// Tests a known path with an unsupported method.
///
/// Expected: 404 with the unknown endpoint message
#[tokio::test]
async fn unsupported_method() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/v1/online")
        .body(Body::empty())
        .unwrap();
    let (status, body) = json(send(&test, request).await).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["response"], "unknown endpoint");

    Ok(())
}
