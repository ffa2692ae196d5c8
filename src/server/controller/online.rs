use axum::{extract::State, Json};

use crate::{
    model::api::{OnlineDto, ResponseDto},
    server::model::app::AppState,
};

pub static ONLINE_TAG: &str = "online";

/// Report the API version and process uptime
#[utoipa::path(
    get,
    path = "/online",
    tag = ONLINE_TAG,
    responses(
        (status = 200, description = "Service is online", body = ResponseDto<OnlineDto>),
        (status = 429, description = "Rate limited", body = crate::model::api::ErrorDto)
    ),
)]
pub async fn get_online(State(state): State<AppState>) -> Json<ResponseDto<OnlineDto>> {
    Json(ResponseDto::new(OnlineDto {
        api_version: env!("CARGO_PKG_VERSION").to_string(),
        uptime: state.started_at.elapsed().as_secs().to_string(),
    }))
}
