//! Test fixture modules for database rows and mock HTTP endpoints.
//!
//! - `factory` - Default aircraft and airport values
//! - `data` - Inserting fixtures into the test database
//! - `mockito` - Photo and flightroute source endpoints

pub mod data;
pub mod factory;
pub mod mockito;

use crate::TestContext;

impl TestContext {
    pub fn fixtures(&mut self) -> Fixtures<'_> {
        Fixtures { setup: self }
    }
}

pub struct Fixtures<'a> {
    pub setup: &'a mut TestContext,
}
