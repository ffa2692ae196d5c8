//! HTTP controller endpoints for the adsbdb API.
//!
//! Handlers validate raw path and query values into identifiers, hand them to the
//! resolution services, and wrap the result in the `{"response": ...}` envelope.

pub mod aircraft;
pub mod callsign;
pub mod n_number;
pub mod online;
pub mod rate_limit;

use crate::server::error::{lookup::LookupError, Error};

/// Fallback for any path or method without a handler
pub async fn unknown_endpoint() -> Error {
    LookupError::UnknownEndpoint.into()
}
