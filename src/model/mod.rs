//! Data transfer objects shared by the HTTP handlers, the cache layer, and tests.

pub mod aircraft;
pub mod api;
pub mod flightroute;
