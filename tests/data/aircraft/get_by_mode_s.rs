//! Tests for AircraftRepository::get_by_mode_s method.
//!
//! Verifies that an aircraft is read back with its country and photo, that unknown codes
//! return nothing, and that a missing schema surfaces as a database error.

use adsbdb::server::{data::aircraft::AircraftRepository, model::identifier::ModeS};
use adsbdb_test_utils::prelude::*;

/// Tests retrieving an aircraft without a photo.
///
/// Expected: Ok with the aircraft, both photo fields None
#[tokio::test]
async fn returns_aircraft_without_photo() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_lookup_tables()
        .with_aircraft(factory::aircraft(TEST_MODE_S))
        .build()
        .await?;

    let mode_s = ModeS::try_from(TEST_MODE_S).unwrap();
    let aircraft = AircraftRepository::new(&test.db)
        .get_by_mode_s(&mode_s)
        .await?
        .expect("aircraft should exist");

    assert_eq!(aircraft.record.mode_s, TEST_MODE_S);
    assert_eq!(aircraft.record.registered_owner_country_iso_name, "US");
    assert_eq!(aircraft.record.registered_owner_country_name, "United States");
    assert_eq!(aircraft.record.icao_type, "B739");
    assert!(aircraft.record.url_photo.is_none());
    assert!(aircraft.record.url_photo_thumbnail.is_none());

    Ok(())
}

/// Tests retrieving an aircraft with a linked photo.
///
/// Expected: Ok with the aircraft and its photo urls
#[tokio::test]
async fn returns_aircraft_with_photo() -> Result<(), TestError> {
    let fixture = factory::aircraft(TEST_MODE_S_WITH_PHOTO).with_photo();
    let (url_photo, url_photo_thumbnail) = fixture.photo.clone().unwrap();

    let test = TestBuilder::new()
        .with_lookup_tables()
        .with_aircraft(fixture)
        .build()
        .await?;

    let mode_s = ModeS::try_from(TEST_MODE_S_WITH_PHOTO).unwrap();
    let aircraft = AircraftRepository::new(&test.db)
        .get_by_mode_s(&mode_s)
        .await?
        .expect("aircraft should exist");

    assert_eq!(aircraft.record.url_photo, Some(url_photo));
    assert_eq!(aircraft.record.url_photo_thumbnail, Some(url_photo_thumbnail));

    Ok(())
}

/// Tests lookups of a lowercase code match the stored uppercase code.
///
/// Expected: Ok with the aircraft
#[tokio::test]
async fn matches_lowercase_input() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_lookup_tables()
        .with_aircraft(factory::aircraft(TEST_MODE_S))
        .build()
        .await?;

    let mode_s = ModeS::try_from(TEST_MODE_S.to_lowercase().as_str()).unwrap();
    let aircraft = AircraftRepository::new(&test.db).get_by_mode_s(&mode_s).await?;

    assert!(aircraft.is_some());

    Ok(())
}

/// Tests retrieving an aircraft that is not stored.
///
/// Expected: Ok with None
#[tokio::test]
async fn returns_none_for_unknown_aircraft() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_lookup_tables()
        .with_aircraft(factory::aircraft(TEST_MODE_S))
        .build()
        .await?;

    let mode_s = ModeS::try_from(TEST_MODE_S_UNKNOWN).unwrap();
    let aircraft = AircraftRepository::new(&test.db).get_by_mode_s(&mode_s).await?;

    assert!(aircraft.is_none());

    Ok(())
}

/// Tests error handling when database tables are missing.
///
/// Expected: Err
#[tokio::test]
async fn fails_when_tables_are_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let mode_s = ModeS::try_from(TEST_MODE_S).unwrap();
    let result = AircraftRepository::new(&test.db).get_by_mode_s(&mode_s).await;

    assert!(result.is_err());

    Ok(())
}
