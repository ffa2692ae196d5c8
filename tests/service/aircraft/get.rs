//! Tests for AircraftService::get method.
//!
//! Verifies that the aircraft and its route are resolved together and that a route which
//! cannot be resolved never fails the aircraft lookup.

use adsbdb::server::{
    error::{lookup::LookupError, Error},
    model::identifier::{Callsign, ModeS},
    service::aircraft::AircraftService,
};
use adsbdb_test_utils::prelude::*;

/// Tests resolving an aircraft without a callsign.
///
/// Expected: Ok with no flightroute, no route request
#[tokio::test]
async fn returns_aircraft_only() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_lookup_tables()
        .with_aircraft(factory::aircraft(TEST_MODE_S).with_photo())
        .with_route_endpoint(TEST_CALLSIGN, "", 0)
        .build()
        .await?;

    let mode_s = ModeS::try_from(TEST_MODE_S).unwrap();
    let lookup = AircraftService::new(&test.db, test.cache(), &test.scraper)
        .get(&mode_s, None)
        .await?;

    assert_eq!(lookup.aircraft.mode_s, TEST_MODE_S);
    assert!(lookup.flightroute.is_none());

    test.assert_mocks();

    Ok(())
}

/// Tests resolving an aircraft along with a stored route.
///
/// Expected: Ok with both the aircraft and the flightroute
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

    let mode_s = ModeS::try_from(TEST_MODE_S).unwrap();
    let callsign = Callsign::try_from(TEST_CALLSIGN).unwrap();
    let lookup = AircraftService::new(&test.db, test.cache(), &test.scraper)
        .get(&mode_s, Some(callsign))
        .await?;

    let flightroute = lookup.flightroute.expect("flightroute should be resolved");
    assert_eq!(lookup.aircraft.mode_s, TEST_MODE_S);
    assert_eq!(flightroute.callsign, TEST_CALLSIGN);
    assert_eq!(flightroute.origin_airport_icao_code, TEST_ORIGIN_ICAO);

    Ok(())
}

/// Tests resolving an aircraft with a callsign that cannot be resolved.
///
/// Expected: Ok with the aircraft and no flightroute
#[tokio::test]
async fn ignores_unknown_callsign() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_lookup_tables()
        .with_aircraft(factory::aircraft(TEST_MODE_S).with_photo())
        .with_route_endpoint_status(TEST_CALLSIGN_UNKNOWN, 404, "", 1)
        .build()
        .await?;

    let mode_s = ModeS::try_from(TEST_MODE_S).unwrap();
    let callsign = Callsign::try_from(TEST_CALLSIGN_UNKNOWN).unwrap();
    let lookup = AircraftService::new(&test.db, test.cache(), &test.scraper)
        .get(&mode_s, Some(callsign))
        .await?;

    assert_eq!(lookup.aircraft.mode_s, TEST_MODE_S);
    assert!(lookup.flightroute.is_none());

    test.assert_mocks();

    Ok(())
}

/// Tests resolving an unknown aircraft with a known callsign.
///
/// Expected: Err with UnknownAircraft
#[tokio::test]
async fn fails_for_unknown_aircraft() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_lookup_tables()
        .with_airport(TEST_ORIGIN_ICAO)
        .with_airport(TEST_DESTINATION_ICAO)
        .with_flightroute(TEST_CALLSIGN, TEST_ORIGIN_ICAO, None, TEST_DESTINATION_ICAO)
        .build()
        .await?;

    let mode_s = ModeS::try_from(TEST_MODE_S_UNKNOWN).unwrap();
    let callsign = Callsign::try_from(TEST_CALLSIGN).unwrap();
    let result = AircraftService::new(&test.db, test.cache(), &test.scraper)
        .get(&mode_s, Some(callsign))
        .await;

    assert!(matches!(
        result,
        Err(Error::LookupError(LookupError::UnknownAircraft))
    ));

    Ok(())
}
