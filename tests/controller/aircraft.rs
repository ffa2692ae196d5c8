//! Tests for the aircraft endpoint.

use adsbdb_test_utils::prelude::*;
use axum::http::StatusCode;

use super::{get, json};

/// Tests fetching a stored aircraft.
///
/// Expected: 200 with the aircraft inside the response envelope
#[tokio::test]
async fn returns_aircraft() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_lookup_tables()
        .with_aircraft(factory::aircraft(TEST_MODE_S).with_photo())
        .build()
        .await?;

    let (status, body) = json(get(&test, &format!("/v1/aircraft/{}", TEST_MODE_S)).await).await;

    assert_eq!(status, StatusCode::OK);
    let aircraft = &body["response"]["aircraft"];
    assert_eq!(aircraft["mode_s"], TEST_MODE_S);
    assert_eq!(aircraft["type"], "737-924ER");
    assert_eq!(aircraft["registered_owner_country_iso_name"], "US");
    assert!(body["response"].get("flightroute").is_none());

    Ok(())
}

/// Tests fetching an aircraft by a lowercase Mode-S code with a lowercase callsign.
///
/// Expected: 200 with the aircraft and its flightroute
#[tokio::test]
async fn returns_aircraft_with_flightroute() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_lookup_tables()
        .with_aircraft(factory::aircraft(TEST_MODE_S).with_photo())
        .with_airport(TEST_ORIGIN_ICAO)
        .with_airport(TEST_DESTINATION_ICAO)
        .with_flightroute(TEST_CALLSIGN, TEST_ORIGIN_ICAO, None, TEST_DESTINATION_ICAO)
        .build()
        .await?;

    let uri = format!(
        "/v1/aircraft/{}?callsign={}",
        TEST_MODE_S.to_lowercase(),
        TEST_CALLSIGN.to_lowercase()
    );
    let (status, body) = json(get(&test, &uri).await).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["response"]["aircraft"]["mode_s"], TEST_MODE_S);
    let flightroute = &body["response"]["flightroute"];
    assert_eq!(flightroute["callsign"], TEST_CALLSIGN);
    assert_eq!(flightroute["destination_airport_iata_code"], "STN");
    assert!(flightroute.get("midpoint_airport_icao_code").is_none());

    Ok(())
}

/// Tests fetching an aircraft with a malformed callsign.
///
/// Expected: 200 with the aircraft and no flightroute
#[tokio::test]
async fn ignores_invalid_callsign() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_lookup_tables()
        .with_aircraft(factory::aircraft(TEST_MODE_S).with_photo())
        .build()
        .await?;

    let uri = format!("/v1/aircraft/{}?callsign=AB", TEST_MODE_S);
    let (status, body) = json(get(&test, &uri).await).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["response"].get("flightroute").is_none());

    Ok(())
}

/// Tests fetching an aircraft by a malformed Mode-S code.
///
/// Expected: 400 with the invalid Mode-S message
#[tokio::test]
async fn rejects_invalid_mode_s() -> Result<(), TestError> {
    let test = TestBuilder::new().with_lookup_tables().build().await?;

    let (status, body) = json(get(&test, "/v1/aircraft/ZZZZZZ").await).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["response"], "Aircraft modeS string invalid");

    Ok(())
}

/// Tests fetching an aircraft that is not stored.
///
/// Expected: 404 with the unknown aircraft message
#[tokio::test]
async fn returns_not_found_for_unknown_aircraft() -> Result<(), TestError> {
    let test = TestBuilder::new().with_lookup_tables().build().await?;

    let uri = format!("/v1/aircraft/{}", TEST_MODE_S_UNKNOWN);
    let (status, body) = json(get(&test, &uri).await).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["response"], "unknown aircraft");

    Ok(())
}

/// Tests fetching an aircraft when the database cannot be queried.
///
/// Expected: 500 with a generic message
#[tokio::test]
async fn hides_internal_errors() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let (status, body) = json(get(&test, &format!("/v1/aircraft/{}", TEST_MODE_S)).await).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["response"], "internal error");

    Ok(())
}

/// Tests fetching an aircraft with the callsign parameter given twice.
///
/// Expected: 200 with the aircraft and no flightroute
#[tokio::test]
async fn ignores_repeated_callsign() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_lookup_tables()
        .with_aircraft(factory::aircraft(TEST_MODE_S).with_photo())
        .with_airport(TEST_ORIGIN_ICAO)
        .with_airport(TEST_DESTINATION_ICAO)
        .with_flightroute(TEST_CALLSIGN, TEST_ORIGIN_ICAO, None, TEST_DESTINATION_ICAO)
        .build()
        .await?;

    let uri = format!(
        "/v1/aircraft/{}?callsign={}&callsign=x",
        TEST_MODE_S, TEST_CALLSIGN
    );
    let (status, body) = json(get(&test, &uri).await).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["response"]["aircraft"]["mode_s"], TEST_MODE_S);
    assert!(body["response"].get("flightroute").is_none());

    Ok(())
}
