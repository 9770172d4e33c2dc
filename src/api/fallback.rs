// Start of file: src/api/fallback.rs

use axum::{
    http::{StatusCode, Uri},
    response::IntoResponse,
};
use tracing::debug;

/// Router-wide fallback for paths nothing else matched
pub async fn fallback_handler(uri: Uri) -> impl IntoResponse {
    debug!(%uri, "No route matched");
    (StatusCode::NOT_FOUND, "Not Found")
}

// End of file: src/api/fallback.rs
