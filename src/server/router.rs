//! HTTP routing and OpenAPI documentation configuration.
//!
//! All endpoints live under `/v{major}` where `major` is the crate's major version. The
//! generated OpenAPI document is served next to them at `/v{major}/openapi.json`.

use axum::{middleware, routing::get, Json, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use utoipa::{openapi::server::Server, OpenApi};
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::server::{
    controller::{self, rate_limit::rate_limit},
    model::app::AppState,
};

/// Path prefix of every endpoint
pub fn api_prefix() -> String {
    format!("/v{}", env!("CARGO_PKG_VERSION_MAJOR"))
}

/// Builds the versioned API routes and their OpenAPI document
///
/// # Registered Endpoints
/// - `GET /v{major}/aircraft/{mode_s}?callsign=` - Aircraft with an optional flightroute
/// - `GET /v{major}/callsign/{callsign}` - Flightroute of a callsign
/// - `GET /v{major}/n-number/{n_number}` - Mode-S code of a US registration
/// - `GET /v{major}/mode-s/{mode_s}` - US registration of a Mode-S code
/// - `GET /v{major}/online` - API version and uptime
/// - `GET /v{major}/openapi.json` - OpenAPI document
///
/// Anything else answers 404 `unknown endpoint`.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(
        info(title = "adsbdb", description = "Aircraft and flightroute lookup API"),
        tags(
            (name = controller::aircraft::AIRCRAFT_TAG, description = "Aircraft lookups by Mode-S code"),
            (name = controller::callsign::CALLSIGN_TAG, description = "Flightroute lookups by callsign"),
            (name = controller::n_number::N_NUMBER_TAG, description = "US registration and Mode-S conversion"),
            (name = controller::online::ONLINE_TAG, description = "Service status"),
        )
    )]
    struct ApiDoc;

    let (routes, mut api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::aircraft::get_aircraft))
        .routes(routes!(controller::callsign::get_callsign))
        .routes(routes!(controller::n_number::get_n_number))
        .routes(routes!(controller::n_number::get_mode_s))
        .routes(routes!(controller::online::get_online))
        .split_for_parts();

    api.servers = Some(vec![Server::new(api_prefix())]);

    let routes = routes
        .route("/openapi.json", get(move || async move { Json(api) }))
        .method_not_allowed_fallback(controller::unknown_endpoint);

    Router::new()
        .nest(&api_prefix(), routes)
        .fallback(controller::unknown_endpoint)
}

/// Builds the complete application with rate limiting and request tracing applied
pub fn app(state: AppState) -> Router {
    routes()
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn_with_state(state.clone(), rate_limit)),
        )
        .with_state(state)
}
