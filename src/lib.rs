//! Aircraft and flightroute lookup service.
//!
//! Resolves Mode-S transponder codes and flight callsigns into descriptive records,
//! reading through a Redis cache into Postgres and falling back to a best-effort
//! scrape of external sources when the persistent store has nothing.

pub mod model;
pub mod server;
