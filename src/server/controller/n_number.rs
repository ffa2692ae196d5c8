use axum::{extract::Path, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::api::{ErrorDto, ResponseDto},
    server::{
        error::Error,
        model::identifier::{ModeS, NNumber},
        n_number::{mode_s_to_n_number, n_number_to_mode_s},
    },
};

pub static N_NUMBER_TAG: &str = "n-number";

/// Get the Mode-S code assigned to a US registration
///
/// Answers an empty string when the registration is well formed but cannot be assigned.
#[utoipa::path(
    get,
    path = "/n-number/{n_number}",
    tag = N_NUMBER_TAG,
    params(
        ("n_number" = String, Path, description = "US registration such as N925XJ, case insensitive"),
    ),
    responses(
        (status = 200, description = "Mode-S code, empty when none is assigned", body = ResponseDto<String>),
        (status = 400, description = "Invalid n_number", body = ErrorDto),
        (status = 429, description = "Rate limited", body = ErrorDto)
    ),
)]
pub async fn get_n_number(Path(n_number): Path<String>) -> Result<impl IntoResponse, Error> {
    let n_number = NNumber::try_from(n_number.to_uppercase().as_str())?;
    let mode_s = n_number_to_mode_s(&n_number).unwrap_or_default();

    Ok((StatusCode::OK, Json(ResponseDto::new(mode_s))))
}

/// Get the US registration assigned to a Mode-S code
///
/// Answers an empty string for codes outside the US civil block.
#[utoipa::path(
    get,
    path = "/mode-s/{mode_s}",
    tag = N_NUMBER_TAG,
    params(
        ("mode_s" = String, Path, description = "Six character hex Mode-S code"),
    ),
    responses(
        (status = 200, description = "Registration, empty when none is assigned", body = ResponseDto<String>),
        (status = 400, description = "Invalid Mode-S code", body = ErrorDto),
        (status = 429, description = "Rate limited", body = ErrorDto)
    ),
)]
pub async fn get_mode_s(Path(mode_s): Path<String>) -> Result<impl IntoResponse, Error> {
    let mode_s = ModeS::try_from(mode_s.as_str())?;
    let n_number = mode_s_to_n_number(&mode_s).unwrap_or_default();

    Ok((StatusCode::OK, Json(ResponseDto::new(n_number))))
}
