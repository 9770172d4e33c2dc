// Global error handling for HTTP middleware layers

use axum::{
    BoxError,
    http::StatusCode,
    response::IntoResponse,
};
// tower's error type for timeouts
use tower::timeout::error::Elapsed;
use tracing::{error, warn};

/// Maps errors raised by the timeout layer to plain-text HTTP responses.
///
/// Oversized bodies never get here: the `Bytes` extractor answers them with
/// its own 413 rejection.
pub async fn handle_global_error(err: BoxError) -> impl IntoResponse {
    // 408 if the request took too long
    if let Some(e) = err.downcast_ref::<Elapsed>() {
        warn!("Request timed out: {}", e);
        return (
            StatusCode::REQUEST_TIMEOUT,
            format!("Request timeout: {}", e),
        );
    }

    // Otherwise, 500
    error!("Unhandled internal error: {}", err);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        format!("Unhandled internal error: {}", err),
    )
}
