use axum::{
    Json,
    response::{IntoResponse, Response},
};
use http::StatusCode;
use serde::Serialize;

/// Trait for domain errors that can be converted to HTTP responses
///
/// Implemented by each feature crate's error type, keeping the mapping
/// from domain failure to status code next to the error definition.
pub trait HttpError: std::error::Error {
    /// HTTP status code for this error
    fn status_code(&self) -> StatusCode;

    /// Machine-readable error type (e.g. `invalid_request_error`)
    fn error_type(&self) -> &str;

    /// Message safe to expose to API consumers
    fn client_message(&self) -> String;
}

/// JSON error body returned by every endpoint
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetails,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetails {
    pub message: String,
    pub r#type: String,
    pub code: u16,
}

/// Render a domain error as `{"error": {"message", "type", "code"}}`
pub fn error_response<E: HttpError + ?Sized>(error: &E) -> Response {
    let status = error.status_code();

    let body = ErrorResponse {
        error: ErrorDetails {
            message: error.client_message(),
            r#type: error.error_type().to_string(),
            code: status.as_u16(),
        },
    };

    (status, Json(body)).into_response()
}
