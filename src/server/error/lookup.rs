use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Errors a caller can cause, each mapped to a client error status
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("Aircraft modeS string invalid")]
    InvalidModeS,
    #[error("Invalid callsign")]
    InvalidCallsign,
    #[error("Invalid airport icao code")]
    InvalidIcao,
    #[error("Invalid n_number")]
    InvalidNNumber,
    #[error("unknown aircraft")]
    UnknownAircraft,
    #[error("unknown callsign")]
    UnknownCallsign,
    #[error("unknown endpoint")]
    UnknownEndpoint,
}

impl LookupError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidModeS | Self::InvalidIcao | Self::InvalidNNumber => {
                StatusCode::BAD_REQUEST
            }
            // A malformed callsign is answered the same way as one that does not exist
            Self::InvalidCallsign
            | Self::UnknownAircraft
            | Self::UnknownCallsign
            | Self::UnknownEndpoint => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for LookupError {
    fn into_response(self) -> Response {
        tracing::debug!("Lookup error: {}", self);

        (
            self.status(),
            Json(ErrorDto {
                response: self.to_string(),
            }),
        )
            .into_response()
    }
}
