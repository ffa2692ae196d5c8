use sea_orm::DatabaseConnection;

use crate::{
    model::flightroute::FlightrouteRecord,
    server::{
        cache::{CacheKey, CacheStore, LookupCache},
        data::flightroute::FlightrouteRepository,
        error::{lookup::LookupError, Error},
        model::identifier::Callsign,
        scraper::Scraper,
    },
};

pub struct FlightrouteService<'a> {
    db: &'a DatabaseConnection,
    cache: LookupCache<'a>,
    scraper: &'a Scraper,
}

impl<'a> FlightrouteService<'a> {
    /// Creates a new instance of [`FlightrouteService`]
    pub fn new(db: &'a DatabaseConnection, cache: &'a dyn CacheStore, scraper: &'a Scraper) -> Self {
        Self {
            db,
            cache: LookupCache::new(cache),
            scraper,
        }
    }

    /// Resolve the route flown under a callsign
    ///
    /// # Arguments
    /// - `callsign` (&[`Callsign`]): callsign to resolve
    ///
    /// # Returns
    /// - [`FlightrouteRecord`]: From the cache, the database, or a newly stored scraped route
    /// - [`LookupError::UnknownCallsign`]: If the callsign is cached as unknown or could not be
    ///   resolved, in the latter case it is now cached as unknown
    /// - [`Error`]: If the cache or database cannot be reached
    pub async fn get(&self, callsign: &Callsign) -> Result<FlightrouteRecord, Error> {
        let key = CacheKey::Callsign(callsign);

        if self.cache.has(&key).await? {
            return match self.cache.get::<FlightrouteRecord>(&key).await? {
                Some(flightroute) => Ok(flightroute.strip_empty()),
                None => Err(LookupError::UnknownCallsign.into()),
            };
        }

        let flightroute_repository = FlightrouteRepository::new(self.db);

        let flightroute = match flightroute_repository.get_by_callsign(callsign).await? {
            Some(flightroute) => Some(flightroute),
            None => self.scrape(callsign).await?,
        };

        let Some(flightroute) = flightroute else {
            self.cache.set_unknown(&key).await?;
            return Err(LookupError::UnknownCallsign.into());
        };

        let flightroute = flightroute.strip_empty();
        self.cache.set_data(&key, &flightroute).await?;

        Ok(flightroute)
    }

    /// Scrape and store a route, returning it as read back from the database
    ///
    /// A failed insert still reads back, a concurrent lookup may have stored the callsign first.
    async fn scrape(&self, callsign: &Callsign) -> Result<Option<FlightrouteRecord>, Error> {
        let Some((origin, destination)) = self.scraper.fetch_route(callsign).await.airports() else {
            return Ok(None);
        };

        let flightroute_repository = FlightrouteRepository::new(self.db);

        if let Err(e) = flightroute_repository
            .insert(callsign, &origin, &destination)
            .await
        {
            tracing::warn!(
                "Scraped route {} to {} for callsign {} was not stored, reading back existing route: {}",
                origin,
                destination,
                callsign,
                e
            );
        }

        Ok(flightroute_repository.get_by_callsign(callsign).await?)
    }
}
