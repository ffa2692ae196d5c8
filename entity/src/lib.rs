//! sea-orm entities for the aircraft and flightroute persistent store.

pub mod prelude;

pub mod aircraft;
pub mod aircraft_photo;
pub mod airport;
pub mod country;
pub mod flightroute;
pub mod flightroute_callsign;
