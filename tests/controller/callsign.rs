//! Tests for the callsign endpoint.

use adsbdb_test_utils::prelude::*;
use axum::http::StatusCode;

use super::{get, json};

/// Tests fetching a stored route with a midpoint by a lowercase callsign.
///
/// Expected: 200 with all three airports
#[tokio::test]
async fn returns_flightroute() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_lookup_tables()
        .with_airport(TEST_ORIGIN_ICAO)
        .with_airport(TEST_MIDPOINT_ICAO)
        .with_airport(TEST_DESTINATION_ICAO)
        .with_flightroute(
            TEST_CALLSIGN,
            TEST_ORIGIN_ICAO,
            Some(TEST_MIDPOINT_ICAO),
            TEST_DESTINATION_ICAO,
        )
        .build()
        .await?;

    let uri = format!("/v1/callsign/{}", TEST_CALLSIGN.to_lowercase());
    let (status, body) = json(get(&test, &uri).await).await;

    assert_eq!(status, StatusCode::OK);
    let flightroute = &body["response"]["flightroute"];
    assert_eq!(flightroute["callsign"], TEST_CALLSIGN);
    assert_eq!(flightroute["origin_airport_icao_code"], TEST_ORIGIN_ICAO);
    assert_eq!(flightroute["midpoint_airport_icao_code"], TEST_MIDPOINT_ICAO);
    assert_eq!(flightroute["destination_airport_icao_code"], TEST_DESTINATION_ICAO);

    Ok(())
}

/// Tests fetching a malformed callsign.
///
/// Expected: 404 with the invalid callsign message
#[tokio::test]
async fn rejects_invalid_callsign() -> Result<(), TestError> {
    let test = TestBuilder::new().with_lookup_tables().build().await?;

    let (status, body) = json(get(&test, "/v1/callsign/AB").await).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["response"], "Invalid callsign");

    Ok(())
}

/// Tests fetching a callsign no source knows.
///
/// Expected: 404 with the unknown callsign message
#[tokio::test]
async fn returns_not_found_for_unknown_callsign() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_lookup_tables()
        .with_route_endpoint_status(TEST_CALLSIGN_UNKNOWN, 404, "", 1)
        .build()
        .await?;

    let uri = format!("/v1/callsign/{}", TEST_CALLSIGN_UNKNOWN);
    let (status, body) = json(get(&test, &uri).await).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["response"], "unknown callsign");

    test.assert_mocks();

    Ok(())
}
