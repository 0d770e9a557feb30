use airwave_core::HttpError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use catalog::CatalogError;
use speech::SpeechError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, IntroError>;

/// Errors from the track intro endpoints
///
/// Catalog and speech failures keep their own status mapping, so upstream
/// status codes reach the caller unchanged.
#[derive(Debug, Error)]
pub enum IntroError {
    /// Missing or unusable track reference
    #[error("{0}")]
    InvalidRequest(String),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Speech(#[from] SpeechError),
}

impl HttpError for IntroError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::Catalog(e) => e.status_code(),
            Self::Speech(e) => e.status_code(),
        }
    }

    fn error_type(&self) -> &str {
        match self {
            Self::InvalidRequest(_) => "invalid_request_error",
            Self::Catalog(e) => e.error_type(),
            Self::Speech(e) => e.error_type(),
        }
    }

    fn client_message(&self) -> String {
        match self {
            Self::InvalidRequest(message) => message.clone(),
            Self::Catalog(e) => e.client_message(),
            Self::Speech(e) => e.client_message(),
        }
    }
}

impl IntoResponse for IntroError {
    fn into_response(self) -> Response {
        airwave_core::error_response(&self)
    }
}
