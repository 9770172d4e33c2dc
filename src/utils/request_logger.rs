// Start of file: /src/utils/request_logger.rs

use std::time::{Duration, Instant};
use axum::{
    body::Body,
    http::{Method, Request, Response},
    middleware::Next,
};
use tracing::info;

/// Logs method, path, status and latency of every request
pub async fn request_logger(req: Request<Body>, next: Next) -> Response<Body> {
    let start: Instant = Instant::now();
    let method: Method = req.method().clone();
    let path: String = req.uri().path().to_owned();

    let response: Response<Body> = next.run(req).await;

    let elapsed: Duration = start.elapsed();
    info!(
        %method,
        %path,
        status = response.status().as_u16(),
        elapsed_ms = elapsed.as_secs_f64() * 1000.0,
        "Request completed"
    );

    response
}

// End of file: /src/utils/request_logger.rs
