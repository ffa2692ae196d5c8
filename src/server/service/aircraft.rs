use sea_orm::DatabaseConnection;

use crate::{
    model::{
        aircraft::{AircraftPhoto, AircraftRecord},
        flightroute::FlightrouteRecord,
    },
    server::{
        cache::{CacheKey, CacheStore, LookupCache},
        data::aircraft::{AircraftRepository, StoredAircraft},
        error::{lookup::LookupError, Error},
        model::identifier::{Callsign, ModeS},
        scraper::Scraper,
        service::flightroute::FlightrouteService,
    },
};

/// Result of an aircraft lookup, with the route if a callsign was supplied and resolved
#[derive(Debug, Clone, PartialEq)]
pub struct AircraftLookup {
    pub aircraft: AircraftRecord,
    pub flightroute: Option<FlightrouteRecord>,
}

pub struct AircraftService<'a> {
    db: &'a DatabaseConnection,
    store: &'a dyn CacheStore,
    cache: LookupCache<'a>,
    scraper: &'a Scraper,
}

impl<'a> AircraftService<'a> {
    /// Creates a new instance of [`AircraftService`]
    pub fn new(db: &'a DatabaseConnection, cache: &'a dyn CacheStore, scraper: &'a Scraper) -> Self {
        Self {
            db,
            store: cache,
            cache: LookupCache::new(cache),
            scraper,
        }
    }

    /// Resolve an aircraft, and the route of `callsign` alongside it
    ///
    /// Both lookups run concurrently. A callsign that cannot be resolved leaves the route
    /// empty instead of failing the lookup.
    ///
    /// # Returns
    /// - [`AircraftLookup`]: The aircraft with its optional route
    /// - [`LookupError::UnknownAircraft`]: If the aircraft is cached as unknown or not stored
    /// - [`Error`]: If the cache or database cannot be reached
    pub async fn get(
        &self,
        mode_s: &ModeS,
        callsign: Option<Callsign>,
    ) -> Result<AircraftLookup, Error> {
        let flightroute = async {
            let Some(callsign) = &callsign else {
                return Ok(None);
            };

            match FlightrouteService::new(self.db, self.store, self.scraper)
                .get(callsign)
                .await
            {
                Ok(flightroute) => Ok(Some(flightroute)),
                Err(Error::LookupError(LookupError::UnknownCallsign)) => Ok(None),
                Err(e) => Err(e),
            }
        };

        let (aircraft, flightroute) = tokio::join!(self.get_aircraft(mode_s), flightroute);

        Ok(AircraftLookup {
            aircraft: aircraft?,
            flightroute: flightroute?,
        })
    }

    /// Resolve an aircraft on its own
    ///
    /// A cached aircraft is returned as is, a photo is only looked for when the aircraft is
    /// read from the database without one.
    pub async fn get_aircraft(&self, mode_s: &ModeS) -> Result<AircraftRecord, Error> {
        let key = CacheKey::ModeS(mode_s);

        if self.cache.has(&key).await? {
            return self
                .cache
                .get::<AircraftRecord>(&key)
                .await?
                .ok_or_else(|| LookupError::UnknownAircraft.into());
        }

        let aircraft_repository = AircraftRepository::new(self.db);

        let Some(StoredAircraft {
            aircraft_id,
            record: mut aircraft,
        }) = aircraft_repository.get_by_mode_s(mode_s).await?
        else {
            self.cache.set_unknown(&key).await?;
            return Err(LookupError::UnknownAircraft.into());
        };

        if !aircraft.has_photo() {
            let photo = match self.scraper.fetch_photo(mode_s).await {
                Some(photo) => self.store_photo(aircraft_id, photo).await,
                None => None,
            };

            aircraft.attach_photo(photo.as_ref());
        }

        self.cache.set_data(&key, &aircraft).await?;

        Ok(aircraft)
    }

    /// Persist a scraped photo and link it to the aircraft
    ///
    /// Returns the photo only once it is stored and linked.
    async fn store_photo(&self, aircraft_id: i32, photo: AircraftPhoto) -> Option<AircraftPhoto> {
        let aircraft_repository = AircraftRepository::new(self.db);

        let stored = async {
            let photo_id = aircraft_repository.insert_photo(&photo).await?;
            aircraft_repository.link_photo(photo_id, aircraft_id).await
        };

        match stored.await {
            Ok(()) => Some(photo),
            Err(e) => {
                tracing::error!("Failed to store photo for aircraft {}: {}", aircraft_id, e);
                None
            }
        }
    }
}
