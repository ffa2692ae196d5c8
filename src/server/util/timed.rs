//! Timing wrapper for store access.

use std::{fmt::Display, future::Future, time::Instant};

/// Await `future`, logging how long it took under `label`
///
/// Successful calls are logged at `debug`, failures at `error` along with the error. The
/// result is passed through untouched.
pub async fn timed<F, T, E>(label: &'static str, future: F) -> Result<T, E>
where
    F: Future<Output = Result<T, E>>,
    E: Display,
{
    let start = Instant::now();
    let result = future.await;
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    match &result {
        Ok(_) => tracing::debug!(operation = label, elapsed_ms, "store call complete"),
        Err(e) => tracing::error!(operation = label, elapsed_ms, "store call failed: {}", e),
    }

    result
}
