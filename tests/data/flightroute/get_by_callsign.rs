//! Tests for FlightrouteRepository::get_by_callsign method.
//!
//! Verifies that a route is read back with the details of each airport, that a midpoint is
//! only reported when one is stored, and that unknown callsigns return nothing.

use adsbdb::server::{data::flightroute::FlightrouteRepository, model::identifier::Callsign};
use adsbdb_test_utils::prelude::*;

/// Tests retrieving a direct route.
///
/// Expected: Ok with origin and destination airports, no midpoint
#[tokio::test]
async fn returns_direct_route() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_lookup_tables()
        .with_airport(TEST_ORIGIN_ICAO)
        .with_airport(TEST_DESTINATION_ICAO)
        .with_flightroute(TEST_CALLSIGN, TEST_ORIGIN_ICAO, None, TEST_DESTINATION_ICAO)
        .build()
        .await?;

    let callsign = Callsign::try_from(TEST_CALLSIGN).unwrap();
    let flightroute = FlightrouteRepository::new(&test.db)
        .get_by_callsign(&callsign)
        .await?
        .expect("flightroute should exist");

    assert_eq!(flightroute.callsign, TEST_CALLSIGN);
    assert_eq!(flightroute.origin_airport_icao_code, TEST_ORIGIN_ICAO);
    assert_eq!(flightroute.origin_airport_name, "Dublin Airport");
    assert_eq!(flightroute.origin_airport_country_iso_name, "IE");
    assert_eq!(flightroute.origin_airport_elevation, 242);
    assert_eq!(flightroute.destination_airport_icao_code, TEST_DESTINATION_ICAO);
    assert_eq!(flightroute.destination_airport_iata_code, "STN");
    assert_eq!(flightroute.destination_airport_country_name, "United Kingdom");
    assert!(flightroute.midpoint_airport_icao_code.is_none());
    assert!(flightroute.midpoint_airport_name.is_none());

    Ok(())
}

/// Tests retrieving a route with a midpoint.
///
/// Expected: Ok with all three airports
#[tokio::test]
async fn returns_route_with_midpoint() -> Result<(), TestError> {
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

    let callsign = Callsign::try_from(TEST_CALLSIGN).unwrap();
    let flightroute = FlightrouteRepository::new(&test.db)
        .get_by_callsign(&callsign)
        .await?
        .expect("flightroute should exist");

    assert_eq!(
        flightroute.midpoint_airport_icao_code.as_deref(),
        Some(TEST_MIDPOINT_ICAO)
    );
    assert_eq!(
        flightroute.midpoint_airport_municipality.as_deref(),
        Some("Lisbon")
    );
    assert_eq!(flightroute.midpoint_airport_elevation, Some(374));

    Ok(())
}

/// Tests a route flown back to its origin airport.
///
/// Expected: Ok with the same airport as origin and destination
#[tokio::test]
async fn returns_round_trip() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_lookup_tables()
        .with_airport(TEST_ORIGIN_ICAO)
        .with_flightroute(TEST_CALLSIGN, TEST_ORIGIN_ICAO, None, TEST_ORIGIN_ICAO)
        .build()
        .await?;

    let callsign = Callsign::try_from(TEST_CALLSIGN).unwrap();
    let flightroute = FlightrouteRepository::new(&test.db)
        .get_by_callsign(&callsign)
        .await?
        .expect("flightroute should exist");

    assert_eq!(flightroute.origin_airport_icao_code, TEST_ORIGIN_ICAO);
    assert_eq!(flightroute.destination_airport_icao_code, TEST_ORIGIN_ICAO);

    Ok(())
}

/// Tests retrieving a callsign that is not stored.
///
/// Expected: Ok with None
#[tokio::test]
async fn returns_none_for_unknown_callsign() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_lookup_tables()
        .with_airport(TEST_ORIGIN_ICAO)
        .with_airport(TEST_DESTINATION_ICAO)
        .with_flightroute(TEST_CALLSIGN, TEST_ORIGIN_ICAO, None, TEST_DESTINATION_ICAO)
        .build()
        .await?;

    let callsign = Callsign::try_from(TEST_CALLSIGN_UNKNOWN).unwrap();
    let flightroute = FlightrouteRepository::new(&test.db)
        .get_by_callsign(&callsign)
        .await?;

    assert!(flightroute.is_none());

    Ok(())
}
