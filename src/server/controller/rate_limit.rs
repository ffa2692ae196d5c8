use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, Request, State},
    middleware::Next,
    response::Response,
};

use crate::server::{error::Error, model::app::AppState};

const REAL_IP_HEADER: &str = "x-real-ip";
const UNKNOWN_CLIENT: &str = "UNKNOWN";

/// Middleware spending one request point for the calling client
pub async fn rate_limit(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, Error> {
    let client = client_key(&request);
    state.limiter.check(&client).await?;

    Ok(next.run(request).await)
}

/// Client address as reported by a reverse proxy, else the socket peer
pub fn client_key(request: &Request) -> String {
    let forwarded = request
        .headers()
        .get(REAL_IP_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty());

    if let Some(forwarded) = forwarded {
        return forwarded.to_string();
    }

    request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| UNKNOWN_CLIENT.to_string())
}
