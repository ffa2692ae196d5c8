use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, TransactionTrait,
};

use crate::{
    model::flightroute::{AirportRecord, FlightrouteRecord},
    server::{
        model::identifier::{AirportIcao, Callsign},
        util::timed,
    },
};

pub struct FlightrouteRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FlightrouteRepository<'a> {
    /// Creates a new instance of [`FlightrouteRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Get the route flown under a callsign with the details of each airport
    ///
    /// # Returns
    /// - `Some(`[`FlightrouteRecord`]`)` if a route is stored for the callsign, midpoint fields
    ///   are only populated for routes with a midpoint airport
    /// - `None` if the callsign is unknown
    pub async fn get_by_callsign(
        &self,
        callsign: &Callsign,
    ) -> Result<Option<FlightrouteRecord>, DbErr> {
        timed("db::get_flightroute_by_callsign", async {
            let row = entity::prelude::Flightroute::find()
                .find_also_related(entity::prelude::FlightrouteCallsign)
                .filter(entity::flightroute_callsign::Column::Callsign.eq(callsign.as_str()))
                .one(self.db)
                .await?;

            let Some((flightroute, _)) = row else {
                return Ok(None);
            };

            let mut airport_ids = vec![
                flightroute.airport_origin_id,
                flightroute.airport_destination_id,
            ];
            airport_ids.extend(flightroute.airport_midpoint_id);

            let airports: HashMap<i32, AirportRecord> = entity::prelude::Airport::find()
                .filter(entity::airport::Column::AirportId.is_in(airport_ids))
                .find_also_related(entity::prelude::Country)
                .all(self.db)
                .await?
                .into_iter()
                .map(|(airport, country)| (airport.airport_id, airport_record(airport, country)))
                .collect();

            // Origin and destination may be the same airport
            let lookup = |airport_id: i32| {
                airports.get(&airport_id).cloned().ok_or_else(|| {
                    DbErr::RecordNotFound(format!(
                        "airport {} of flightroute {}",
                        airport_id, flightroute.flightroute_id
                    ))
                })
            };

            let origin = lookup(flightroute.airport_origin_id)?;
            let destination = lookup(flightroute.airport_destination_id)?;
            let midpoint = flightroute.airport_midpoint_id.map(&lookup).transpose()?;

            Ok(Some(FlightrouteRecord::new(
                callsign.to_string(),
                origin,
                midpoint,
                destination,
            )))
        })
        .await
    }

    /// Store a scraped route, the callsign row and route row are written in one transaction
    ///
    /// Returns [`DbErr::RecordNotFound`] and writes nothing if either airport is unknown.
    pub async fn insert(
        &self,
        callsign: &Callsign,
        origin: &AirportIcao,
        destination: &AirportIcao,
    ) -> Result<(), DbErr> {
        timed("db::insert_flightroute", async {
            let txn = self.db.begin().await?;

            let flightroute_callsign = entity::flightroute_callsign::ActiveModel {
                callsign: ActiveValue::Set(callsign.to_string()),
                ..Default::default()
            }
            .insert(&txn)
            .await?;

            let origin_id = find_airport_id(&txn, origin).await?;
            let destination_id = find_airport_id(&txn, destination).await?;

            let (Some(origin_id), Some(destination_id)) = (origin_id, destination_id) else {
                txn.rollback().await?;
                return Err(DbErr::RecordNotFound(format!(
                    "airports {} and {} for callsign {}",
                    origin, destination, callsign
                )));
            };

            entity::flightroute::ActiveModel {
                flightroute_callsign_id: ActiveValue::Set(
                    flightroute_callsign.flightroute_callsign_id,
                ),
                airport_origin_id: ActiveValue::Set(origin_id),
                airport_midpoint_id: ActiveValue::Set(None),
                airport_destination_id: ActiveValue::Set(destination_id),
                ..Default::default()
            }
            .insert(&txn)
            .await?;

            txn.commit().await
        })
        .await
    }
}

async fn find_airport_id<C: ConnectionTrait>(
    conn: &C,
    icao: &AirportIcao,
) -> Result<Option<i32>, DbErr> {
    let airport = entity::prelude::Airport::find()
        .filter(entity::airport::Column::IcaoCode.eq(icao.as_str()))
        .one(conn)
        .await?;

    Ok(airport.map(|a| a.airport_id))
}

fn airport_record(
    airport: entity::airport::Model,
    country: Option<entity::country::Model>,
) -> AirportRecord {
    let country = country.unwrap_or_else(|| entity::country::Model {
        country_id: airport.country_id,
        country_name: String::new(),
        country_iso_name: String::new(),
    });

    AirportRecord {
        country_iso_name: country.country_iso_name,
        country_name: country.country_name,
        elevation: airport.elevation,
        iata_code: airport.iata_code,
        icao_code: airport.icao_code,
        latitude: airport.latitude,
        longitude: airport.longitude,
        municipality: airport.municipality,
        name: airport.name,
    }
}
