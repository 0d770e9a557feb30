use catalog::{TrackId, TrackMetadata};
use serde::{Deserialize, Serialize};

/// Body of both intro endpoints
#[derive(Debug, Default, Deserialize)]
pub struct TrackUrlRequest {
    /// Spotify track URL or `spotify:track:` URI
    #[serde(default)]
    pub track_url: Option<String>,
}

/// `/api/intro-from-track-text` success body
#[derive(Debug, Serialize)]
pub struct IntroTextResponse {
    pub ok: bool,
    pub track_id: TrackId,
    pub text: String,
    pub meta: TrackMetadata,
}
