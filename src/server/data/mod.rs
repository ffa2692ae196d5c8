//! Persistent store access.
//!
//! Repositories borrow the shared [`sea_orm::DatabaseConnection`] and translate entity rows
//! into the records handed back to callers. Every query runs through [`crate::server::util::timed`].

pub mod aircraft;
pub mod flightroute;
