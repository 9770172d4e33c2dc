// Handlers for the message processing endpoint

use axum::{
    body::Bytes,
    extract::State,
    http::Method,
    Json,
};
use chrono::Local;
use tracing::{debug, instrument, warn};

use crate::config::state::AppState;
use super::decoration::decorate;
use super::error::ProcessError;
use super::models::{InboundMessage, OutboundResult};

/// Decodes `{"message": ...}` and answers with the decorated text
#[instrument(skip(state, body), fields(body_len = body.len()))]
pub async fn process_message_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<OutboundResult>, ProcessError> {
    // A bare `null` body is treated like `{}`
    let inbound: InboundMessage = serde_json::from_slice::<Option<InboundMessage>>(&body)
        .map_err(|err| {
            warn!(error = %err, "Rejecting undecodable request body");
            ProcessError::from(err)
        })?
        .unwrap_or_default();

    let processed_message: String = decorate(
        &state.environment.processed_marker,
        &inbound.message,
        Local::now().naive_local(),
    );
    debug!(%processed_message, "Message processed");

    Ok(Json(OutboundResult { processed_message }))
}

/// Method fallback for /process; the body is never read
pub async fn method_not_allowed_handler(method: Method) -> ProcessError {
    debug!(%method, "Rejecting non-POST request to /process");
    ProcessError::MethodNotAllowed
}
