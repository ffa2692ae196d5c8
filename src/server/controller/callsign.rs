use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, ResponseDto},
        flightroute::CallsignResponse,
    },
    server::{
        error::Error,
        model::{app::AppState, identifier::Callsign},
        service::flightroute::FlightrouteService,
    },
};

pub static CALLSIGN_TAG: &str = "callsign";

/// Get the route flown under a callsign
#[utoipa::path(
    get,
    path = "/callsign/{callsign}",
    tag = CALLSIGN_TAG,
    params(
        ("callsign" = String, Path, description = "Four to eight character callsign, case insensitive"),
    ),
    responses(
        (status = 200, description = "Flightroute found", body = ResponseDto<CallsignResponse>),
        (status = 404, description = "Invalid or unknown callsign", body = ErrorDto),
        (status = 429, description = "Rate limited", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_callsign(
    State(state): State<AppState>,
    Path(callsign): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let callsign = Callsign::try_from(callsign.to_uppercase().as_str())?;

    let flightroute_service =
        FlightrouteService::new(&state.db, state.cache.as_ref(), &state.scraper);
    let flightroute = flightroute_service.get(&callsign).await?;

    Ok((
        StatusCode::OK,
        Json(ResponseDto::new(CallsignResponse { flightroute })),
    ))
}
