use airwave_core::HttpError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SpeechError>;

/// Speech service errors with appropriate HTTP status codes
#[derive(Debug, Error)]
pub enum SpeechError {
    /// Invalid request parameters
    #[error("{0}")]
    InvalidRequest(String),

    /// Required server configuration is missing
    #[error("{0}")]
    ConfigError(String),

    /// Provider API returned an error
    #[error("ElevenLabs error: {message}")]
    ProviderApiError { status: u16, message: String },

    /// Network or connection error
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// The call did not complete within the configured timeout
    #[error("ElevenLabs request timed out: {0}")]
    Timeout(String),

    /// Internal server error
    /// If Some(message), it came from a provider and can be shown
    /// If None, it's an internal error and should not leak details
    #[error("Internal server error")]
    InternalError(Option<String>),
}

impl SpeechError {
    /// Classify a transport failure from `reqwest`
    pub(crate) fn from_transport(context: &str, error: &reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout(format!("{context}: {error}"))
        } else {
            Self::ConnectionError(format!("{context}: {error}"))
        }
    }
}

impl HttpError for SpeechError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::ConfigError(_) | Self::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::ProviderApiError { status, .. } => StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY),
            Self::ConnectionError(_) => StatusCode::BAD_GATEWAY,
            Self::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
        }
    }

    fn error_type(&self) -> &str {
        match self {
            Self::InvalidRequest(_) => "invalid_request_error",
            Self::ConfigError(_) => "configuration_error",
            Self::ProviderApiError { .. } => "upstream_error",
            Self::ConnectionError(_) | Self::Timeout(_) => "api_error",
            Self::InternalError(_) => "internal_error",
        }
    }

    fn client_message(&self) -> String {
        match self {
            Self::InternalError(Some(provider_msg)) => provider_msg.clone(),
            Self::InternalError(None) => "Internal server error".to_string(),
            _ => self.to_string(),
        }
    }
}

impl IntoResponse for SpeechError {
    fn into_response(self) -> Response {
        airwave_core::error_response(&self)
    }
}
