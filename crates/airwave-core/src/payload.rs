use axum::{
    body::Body,
    extract::FromRequest,
    response::Response,
};
use http::StatusCode;
use serde::de::DeserializeOwned;

use crate::error::{HttpError, error_response};

/// Body limit for JSON requests (1 MiB)
const BODY_LIMIT_BYTES: usize = 1 << 20;

/// Extractor for JSON request bodies
///
/// Unlike `axum::Json`, every rejection is rendered in the same JSON error
/// shape the handlers use, with a 400 for unreadable or malformed bodies.
pub struct JsonPayload<T>(pub T);

#[derive(Debug)]
enum PayloadRejection {
    UnsupportedMediaType,
    TooLarge,
    Unreadable(String),
    Malformed(String),
}

impl std::fmt::Display for PayloadRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedMediaType => {
                f.write_str("Unsupported Content-Type, expected: 'Content-Type: application/json'")
            }
            Self::TooLarge => write!(f, "Request body is too large, limit is {BODY_LIMIT_BYTES} bytes"),
            Self::Unreadable(e) => write!(f, "Failed to read request body: {e}"),
            Self::Malformed(e) => write!(f, "Failed to parse request body: {e}"),
        }
    }
}

impl std::error::Error for PayloadRejection {}

impl HttpError for PayloadRejection {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Self::TooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Unreadable(_) | Self::Malformed(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_type(&self) -> &str {
        "invalid_request_error"
    }

    fn client_message(&self) -> String {
        self.to_string()
    }
}

fn is_json(parts: &http::request::Parts) -> bool {
    parts
        .headers
        .get(http::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case("application/json"))
}

impl<S, T: DeserializeOwned> FromRequest<S> for JsonPayload<T>
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(request: http::Request<Body>, _state: &S) -> Result<Self, Self::Rejection> {
        let (parts, body) = request.into_parts();

        if !is_json(&parts) {
            return Err(error_response(&PayloadRejection::UnsupportedMediaType));
        }

        let bytes = axum::body::to_bytes(body, BODY_LIMIT_BYTES).await.map_err(|err| {
            let rejection = if std::error::Error::source(&err)
                .is_some_and(|source| source.is::<http_body_util::LengthLimitError>())
            {
                PayloadRejection::TooLarge
            } else {
                PayloadRejection::Unreadable(err.to_string())
            };
            error_response(&rejection)
        })?;

        serde_json::from_slice::<T>(&bytes)
            .map(Self)
            .map_err(|e| error_response(&PayloadRejection::Malformed(e.to_string())))
    }
}
