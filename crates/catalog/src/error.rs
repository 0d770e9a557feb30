use airwave_core::HttpError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CatalogError>;

/// Catalog lookup errors
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Client id or secret is not configured
    #[error(
        "Spotify client credentials are missing. Set catalog.client_id and catalog.client_secret (SPOTIFY_CLIENT_ID / SPOTIFY_CLIENT_SECRET)."
    )]
    MissingCredentials,

    /// The token endpoint answered with a non-success status
    #[error("Spotify token error: {message}")]
    TokenRejected { status: u16, message: String },

    /// The tracks endpoint answered with a non-success status
    #[error("Spotify tracks error: {message}")]
    TrackRejected { status: u16, message: String },

    /// The audio-features endpoint answered with a non-success status
    #[error("Spotify audio-features error: {message}")]
    FeaturesRejected { status: u16, message: String },

    /// Network or connection error
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// The call did not complete within the configured timeout
    #[error("Spotify request timed out: {0}")]
    Timeout(String),

    /// A success response whose body could not be decoded
    #[error("Unexpected Spotify response: {0}")]
    InvalidResponse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl CatalogError {
    /// Classify a transport failure from `reqwest`
    pub(crate) fn from_transport(context: &str, error: &reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout(format!("{context}: {error}"))
        } else if error.is_decode() {
            Self::InvalidResponse(format!("{context}: {error}"))
        } else {
            Self::ConnectionError(format!("{context}: {error}"))
        }
    }
}

impl HttpError for CatalogError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingCredentials | Self::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            // Upstream status is passed through as-is
            Self::TokenRejected { status, .. }
            | Self::TrackRejected { status, .. }
            | Self::FeaturesRejected { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            Self::ConnectionError(_) | Self::InvalidResponse(_) => StatusCode::BAD_GATEWAY,
            Self::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
        }
    }

    fn error_type(&self) -> &str {
        match self {
            Self::MissingCredentials | Self::ConfigError(_) => "configuration_error",
            Self::TokenRejected { .. } | Self::TrackRejected { .. } | Self::FeaturesRejected { .. } => "upstream_error",
            Self::ConnectionError(_) | Self::Timeout(_) | Self::InvalidResponse(_) => "api_error",
        }
    }

    fn client_message(&self) -> String {
        self.to_string()
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        airwave_core::error_response(&self)
    }
}
