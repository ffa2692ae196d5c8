use std::{net::SocketAddr, sync::Arc, time::Instant};

use fred::prelude::*;

use adsbdb::server::{
    cache::RedisStore,
    config::Config,
    error::Error,
    limiter::RateLimiter,
    model::app::AppState,
    router,
    scraper::Scraper,
    startup::{connect_to_database, connect_to_redis, init_logging, shutdown_signal},
};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let started_at = Instant::now();

    let config = Config::from_env()?;
    init_logging(&config);

    let db = connect_to_database(&config).await?;
    let pool = connect_to_redis(&config).await?;
    let store = Arc::new(RedisStore::new(pool.clone()));
    let scraper = Scraper::from_config(&config)?;

    let state = AppState {
        db: db.clone(),
        cache: store.clone(),
        limiter: RateLimiter::new(store),
        scraper,
        started_at,
    };

    let addr = format!("{}:{}", config.api_host, config.api_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| Error::InternalError(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("adsbdb v{} listening on {}", env!("CARGO_PKG_VERSION"), addr);

    let served = axum::serve(
        listener,
        router::app(state).into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await;

    if let Err(e) = pool.quit().await {
        tracing::error!("Failed to close Redis connections: {}", e);
    }
    db.close().await?;

    served.map_err(|e| Error::InternalError(format!("Server error: {}", e)))
}
