//! Errors returned by the /process endpoint.

use axum::{
    http::{header::ALLOW, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Every failure is terminal for its request and answered in plain text.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Anything but POST.
    #[error("Invalid request method")]
    MethodNotAllowed,

    /// Body is not JSON, or not shaped like `{"message": string}`.
    #[error("{0}")]
    BadRequest(#[from] serde_json::Error),
}

impl ProcessError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ProcessError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ProcessError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ProcessError {
    fn into_response(self) -> Response {
        let status: StatusCode = self.status_code();
        let body: String = self.to_string();

        match self {
            ProcessError::MethodNotAllowed => (status, [(ALLOW, "POST")], body).into_response(),
            ProcessError::BadRequest(_) => (status, body).into_response(),
        }
    }
}
