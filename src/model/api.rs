use serde::{Deserialize, Serialize};

/// Envelope wrapping every successful API response
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ResponseDto<T> {
    pub response: T,
}

impl<T> ResponseDto<T> {
    pub fn new(response: T) -> Self {
        Self { response }
    }
}

/// The response when an error occurs with an API request
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub response: String,
}

/// Service status returned by the online endpoint
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct OnlineDto {
    pub api_version: String,
    /// Seconds since the process started
    pub uptime: String,
}
