//! Database fixture insertion.

use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, EntityTrait, QueryFilter};

use crate::{
    fixtures::{
        factory::{AircraftFixture, AirportFixture},
        Fixtures,
    },
    TestError,
};

impl<'a> Fixtures<'a> {
    /// Get or insert a country by ISO name
    pub async fn insert_country(&self, name: &str, iso_name: &str) -> Result<i32, TestError> {
        let existing = entity::prelude::Country::find()
            .filter(entity::country::Column::CountryIsoName.eq(iso_name))
            .one(&self.setup.db)
            .await?;

        if let Some(country) = existing {
            return Ok(country.country_id);
        }

        let country = entity::country::ActiveModel {
            country_name: ActiveValue::Set(name.to_string()),
            country_iso_name: ActiveValue::Set(iso_name.to_string()),
            ..Default::default()
        }
        .insert(&self.setup.db)
        .await?;

        Ok(country.country_id)
    }

    /// Insert an aircraft, its country, and its photo if it has one
    pub async fn insert_aircraft(
        &self,
        fixture: &AircraftFixture,
    ) -> Result<entity::aircraft::Model, TestError> {
        let country_id = self
            .insert_country(&fixture.country_name, &fixture.country_iso_name)
            .await?;

        let photo_id = match &fixture.photo {
            Some((url_photo, url_photo_thumbnail)) => {
                let photo = entity::aircraft_photo::ActiveModel {
                    url_photo: ActiveValue::Set(url_photo.clone()),
                    url_photo_thumbnail: ActiveValue::Set(url_photo_thumbnail.clone()),
                    photographer: ActiveValue::Set(None),
                    ..Default::default()
                }
                .insert(&self.setup.db)
                .await?;

                Some(photo.aircraft_photo_id)
            }
            None => None,
        };

        let aircraft = entity::aircraft::ActiveModel {
            mode_s: ActiveValue::Set(fixture.mode_s.clone()),
            registered_owner: ActiveValue::Set(fixture.registered_owner.clone()),
            registered_owner_operator_flag_code: ActiveValue::Set(
                fixture.registered_owner_operator_flag_code.clone(),
            ),
            country_id: ActiveValue::Set(country_id),
            manufacturer: ActiveValue::Set(fixture.manufacturer.clone()),
            aircraft_type: ActiveValue::Set(fixture.aircraft_type.clone()),
            icao_type: ActiveValue::Set(fixture.icao_type.clone()),
            aircraft_photo_id: ActiveValue::Set(photo_id),
            ..Default::default()
        }
        .insert(&self.setup.db)
        .await?;

        Ok(aircraft)
    }

    /// Insert an airport and its country
    pub async fn insert_airport(
        &self,
        fixture: &AirportFixture,
    ) -> Result<entity::airport::Model, TestError> {
        let country_id = self
            .insert_country(&fixture.country_name, &fixture.country_iso_name)
            .await?;

        let airport = entity::airport::ActiveModel {
            country_id: ActiveValue::Set(country_id),
            municipality: ActiveValue::Set(fixture.municipality.clone()),
            icao_code: ActiveValue::Set(fixture.icao_code.clone()),
            iata_code: ActiveValue::Set(fixture.iata_code.clone()),
            name: ActiveValue::Set(fixture.name.clone()),
            elevation: ActiveValue::Set(fixture.elevation),
            latitude: ActiveValue::Set(fixture.latitude),
            longitude: ActiveValue::Set(fixture.longitude),
            ..Default::default()
        }
        .insert(&self.setup.db)
        .await?;

        Ok(airport)
    }

    /// Insert a flightroute between airports that were already inserted
    pub async fn insert_flightroute(
        &self,
        callsign: &str,
        origin: &str,
        midpoint: Option<&str>,
        destination: &str,
    ) -> Result<entity::flightroute::Model, TestError> {
        let origin_id = self.airport_id(origin).await?;
        let destination_id = self.airport_id(destination).await?;
        let midpoint_id = match midpoint {
            Some(midpoint) => Some(self.airport_id(midpoint).await?),
            None => None,
        };

        let flightroute_callsign = entity::flightroute_callsign::ActiveModel {
            callsign: ActiveValue::Set(callsign.to_string()),
            ..Default::default()
        }
        .insert(&self.setup.db)
        .await?;

        let flightroute = entity::flightroute::ActiveModel {
            flightroute_callsign_id: ActiveValue::Set(flightroute_callsign.flightroute_callsign_id),
            airport_origin_id: ActiveValue::Set(origin_id),
            airport_midpoint_id: ActiveValue::Set(midpoint_id),
            airport_destination_id: ActiveValue::Set(destination_id),
            ..Default::default()
        }
        .insert(&self.setup.db)
        .await?;

        Ok(flightroute)
    }

    async fn airport_id(&self, icao_code: &str) -> Result<i32, TestError> {
        entity::prelude::Airport::find()
            .filter(entity::airport::Column::IcaoCode.eq(icao_code))
            .one(&self.setup.db)
            .await?
            .map(|airport| airport.airport_id)
            .ok_or_else(|| TestError::FixtureError(format!("airport {} not inserted", icao_code)))
    }
}
