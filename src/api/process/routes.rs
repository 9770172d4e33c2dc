// Route definitions for the message processing endpoint

use axum::{routing::post, Router};

use crate::config::state::AppState;
use super::handler;

/// POST /process; every other method on the path falls through to a 405
pub fn process_routes() -> Router<AppState> {
    Router::new().route(
        "/process",
        post(handler::process_message_handler)
            .fallback(handler::method_not_allowed_handler),
    )
}
