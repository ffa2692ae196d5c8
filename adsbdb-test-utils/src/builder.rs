//! Declarative test builder.
//!
//! Configuration methods only queue work, the database fixtures and mock endpoints are
//! created during the final `build()` call.

use mockito::Mock;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{
    error::TestError,
    fixtures::factory::{self, AircraftFixture, AirportFixture},
    TestContext,
};

type MockBuilder = Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>;

/// Builder for declarative test initialization.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_lookup_tables: bool,

    // Database fixtures to insert
    aircraft: Vec<AircraftFixture>,
    airports: Vec<AirportFixture>,
    flightroutes: Vec<(String, String, Option<String>, String)>, // (callsign, origin, midpoint, destination)

    // Mock endpoints to create
    mock_builders: Vec<MockBuilder>,
    photo_endpoints: Vec<(String, serde_json::Value, usize)>, // (mode_s, body, expected_requests)
    route_endpoints: Vec<(String, usize, String, usize)>, // (callsign, status, body, expected_requests)

    // Scraper switches
    allow_photo: bool,
    allow_flightroute: bool,
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables, fixtures, or mock endpoints configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_lookup_tables: false,
            aircraft: Vec::new(),
            airports: Vec::new(),
            flightroutes: Vec::new(),
            mock_builders: Vec::new(),
            photo_endpoints: Vec::new(),
            route_endpoints: Vec::new(),
            allow_photo: true,
            allow_flightroute: true,
        }
    }

    /// Create every table used by aircraft and flightroute lookups
    pub fn with_lookup_tables(mut self) -> Self {
        self.include_lookup_tables = true;
        self
    }

    /// Add a single entity table to the test database.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert an aircraft, creating its country and photo as needed
    pub fn with_aircraft(mut self, fixture: AircraftFixture) -> Self {
        self.aircraft.push(fixture);
        self
    }

    /// Insert an airport built by [`factory::airport`]
    pub fn with_airport(mut self, icao_code: &str) -> Self {
        self.airports.push(factory::airport(icao_code));
        self
    }

    /// Insert a flightroute, its airports must be added with `with_airport`
    pub fn with_flightroute(
        mut self,
        callsign: &str,
        origin: &str,
        midpoint: Option<&str>,
        destination: &str,
    ) -> Self {
        self.flightroutes.push((
            callsign.to_string(),
            origin.to_string(),
            midpoint.map(str::to_string),
            destination.to_string(),
        ));
        self
    }

    /// Create a mock photo source endpoint
    ///
    /// # Arguments
    /// - `mode_s` - Mode-S code the request must query for
    /// - `body` - JSON response, see [`factory::photo_json`]
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn with_photo_endpoint(
        mut self,
        mode_s: &str,
        body: serde_json::Value,
        expected_requests: usize,
    ) -> Self {
        self.photo_endpoints
            .push((mode_s.to_string(), body, expected_requests));
        self
    }

    /// Create a mock flightroute page answering 200 with `body`
    pub fn with_route_endpoint(
        self,
        callsign: &str,
        body: impl Into<String>,
        expected_requests: usize,
    ) -> Self {
        self.with_route_endpoint_status(callsign, 200, body, expected_requests)
    }

    /// Create a mock flightroute page answering with any status
    pub fn with_route_endpoint_status(
        mut self,
        callsign: &str,
        status: usize,
        body: impl Into<String>,
        expected_requests: usize,
    ) -> Self {
        self.route_endpoints
            .push((callsign.to_string(), status, body.into(), expected_requests));
        self
    }

    /// Create a custom mock endpoint on the mock server
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Enable or disable the photo and flightroute sources of the scraper
    pub fn with_scraping(mut self, allow_photo: bool, allow_flightroute: bool) -> Self {
        self.allow_photo = allow_photo;
        self.allow_flightroute = allow_flightroute;
        self
    }

    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new(self.allow_photo, self.allow_flightroute).await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_lookup_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Country),
                schema.create_table_from_entity(entity::prelude::AircraftPhoto),
                schema.create_table_from_entity(entity::prelude::Aircraft),
                schema.create_table_from_entity(entity::prelude::Airport),
                schema.create_table_from_entity(entity::prelude::FlightrouteCallsign),
                schema.create_table_from_entity(entity::prelude::Flightroute),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        for fixture in &self.aircraft {
            setup.fixtures().insert_aircraft(fixture).await?;
        }

        for fixture in &self.airports {
            setup.fixtures().insert_airport(fixture).await?;
        }

        for (callsign, origin, midpoint, destination) in &self.flightroutes {
            setup
                .fixtures()
                .insert_flightroute(callsign, origin, midpoint.as_deref(), destination)
                .await?;
        }

        // 3. Create mock endpoints, custom endpoints first so they match before the shortcuts
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        for (mode_s, body, expected) in self.photo_endpoints {
            mocks.push(
                setup
                    .fixtures()
                    .create_photo_endpoint(&mode_s, body, expected),
            );
        }

        for (callsign, status, body, expected) in self.route_endpoints {
            mocks.push(
                setup
                    .fixtures()
                    .create_route_endpoint(&callsign, status, &body, expected),
            );
        }

        // Store mocks in setup so they live as long as the test
        setup.mocks = mocks;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
