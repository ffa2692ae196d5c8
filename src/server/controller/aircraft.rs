use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        aircraft::AircraftResponse,
        api::{ErrorDto, ResponseDto},
    },
    server::{
        error::Error,
        model::{
            app::AppState,
            identifier::{Callsign, ModeS},
        },
        service::aircraft::AircraftService,
    },
};

pub static AIRCRAFT_TAG: &str = "aircraft";

#[derive(Debug, Deserialize)]
pub struct AircraftQuery {
    pub callsign: Option<String>,
}

/// Get an aircraft by its Mode-S code, optionally with the route of a callsign
///
/// An invalid or repeated callsign is ignored rather than rejected.
#[utoipa::path(
    get,
    path = "/aircraft/{mode_s}",
    tag = AIRCRAFT_TAG,
    params(
        ("mode_s" = String, Path, description = "Six character hex Mode-S code"),
        ("callsign" = Option<String>, Query, description = "Callsign to resolve alongside the aircraft"),
    ),
    responses(
        (status = 200, description = "Aircraft found", body = ResponseDto<AircraftResponse>),
        (status = 400, description = "Invalid Mode-S code", body = ErrorDto),
        (status = 404, description = "Unknown aircraft", body = ErrorDto),
        (status = 429, description = "Rate limited", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_aircraft(
    State(state): State<AppState>,
    Path(mode_s): Path<String>,
    query: Result<Query<AircraftQuery>, QueryRejection>,
) -> Result<impl IntoResponse, Error> {
    let mode_s = ModeS::try_from(mode_s.as_str())?;
    let callsign = match query {
        Ok(Query(query)) => query.callsign,
        Err(e) => {
            tracing::debug!("Ignoring unreadable aircraft query: {}", e);
            None
        }
    }
    .and_then(|callsign| Callsign::try_from(callsign.to_uppercase().as_str()).ok());

    let aircraft_service = AircraftService::new(&state.db, state.cache.as_ref(), &state.scraper);
    let lookup = aircraft_service.get(&mode_s, callsign).await?;

    let response = AircraftResponse {
        aircraft: lookup.aircraft,
        flightroute: lookup.flightroute,
    };

    Ok((StatusCode::OK, Json(ResponseDto::new(response))))
}
