//! Error types for the adsbdb server.
//!
//! Caller mistakes and unknown identifiers are described by [`LookupError`], configuration
//! problems by [`ConfigError`]. Everything else, store and transport failures included,
//! collapses into a generic 500 response that is logged but never shown to the client.

pub mod config;
pub mod lookup;

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, lookup::LookupError},
};

/// Main error type for the adsbdb server.
///
/// Aggregates the domain errors and the external library errors so handlers and services
/// can propagate everything with `?`. The `IntoResponse` implementation decides what the
/// caller gets to see.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Invalid or unknown identifier supplied by the caller.
    #[error(transparent)]
    LookupError(#[from] LookupError),
    /// Client exhausted its request budget.
    #[error("rate limited for {ms_before_next} ms")]
    RateLimited { ms_before_next: i64 },
    /// Internal error indicating a bug in adsbdb's code.
    #[error("Internal error: {0}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Redis error (connection, command or script execution).
    #[error(transparent)]
    RedisError(#[from] fred::error::Error),
    /// HTTP client error while contacting an external source.
    #[error(transparent)]
    ReqwestError(#[from] reqwest::Error),
    /// Cached payload could not be serialized or deserialized.
    #[error(transparent)]
    SerdeError(#[from] serde_json::Error),
}

/// Whole seconds to wait, never less than one
pub fn retry_after_seconds(ms_before_next: i64) -> i64 {
    ((ms_before_next.max(0) + 999) / 1000).max(1)
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::LookupError(err) => err.into_response(),
            Self::RateLimited { ms_before_next } => {
                let seconds = retry_after_seconds(ms_before_next);
                tracing::debug!("Rate limited for {} ms", ms_before_next);

                (
                    StatusCode::TOO_MANY_REQUESTS,
                    [(header::RETRY_AFTER, seconds.to_string())],
                    Json(ErrorDto {
                        response: format!("rate limited for {} seconds", seconds),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// The full error is logged, the client only receives a generic message.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                response: "internal error".to_string(),
            }),
        )
            .into_response()
    }
}
