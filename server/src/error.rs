//! Request-level errors and their HTTP rendering.
//!
//! Both variants map to a 4xx response carrying an `ErrorBody`. Neither is
//! fatal: the store is untouched when a handler returns one.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::model::ErrorBody;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The body did not decode into a `TodoPayload`.
    #[error("{0}")]
    MalformedRequest(String),

    /// No item carries the requested id.
    #[error("todo with id {0} not found.")]
    NotFound(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MalformedRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ApiError::MalformedRequest(_) => "Bad Request",
            ApiError::NotFound(_) => "Data Not Found",
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::MalformedRequest(format!("Failed to parse the request body as JSON: {err}"))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error_status: self.label().to_string(),
            error_message: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
