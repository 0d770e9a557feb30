use std::{sync::Arc, time::Duration};

use catalog::{Catalog, TrackId, extract_track_id};
use speech::SpeechResponse;

use crate::{
    error::IntroError,
    narration::compose_narration,
    types::{IntroTextResponse, TrackUrlRequest},
};

/// Intro server: track reference in, narration text or audio out
pub struct Server {
    catalog: Arc<Catalog>,
    speech: Arc<speech::Server>,
    language_code: String,
    speech_timeout: Duration,
}

impl Server {
    pub fn new(
        catalog: Arc<Catalog>,
        speech: Arc<speech::Server>,
        config: &airwave_config::IntroConfig,
    ) -> Self {
        Self {
            catalog,
            speech,
            language_code: config.language_code.clone(),
            speech_timeout: config.speech_timeout(),
        }
    }

    /// Fetch metadata and compose the narration text
    pub async fn intro_text(&self, request: TrackUrlRequest) -> crate::error::Result<IntroTextResponse> {
        let track_id = parse_request(request)?;

        let meta = self.catalog.fetch_metadata(&track_id).await?;
        let text = compose_narration(&meta);

        tracing::debug!("Composed intro for track {track_id}: {text}");

        Ok(IntroTextResponse {
            ok: true,
            track_id,
            text,
            meta,
        })
    }

    /// Fetch metadata, compose the narration and speak it
    pub async fn intro_audio(&self, request: TrackUrlRequest) -> crate::error::Result<SpeechResponse> {
        let track_id = parse_request(request)?;

        self.speech.check_narration()?;

        let meta = self.catalog.fetch_metadata(&track_id).await?;
        let text = compose_narration(&meta);

        tracing::debug!("Speaking intro for track {track_id}, text_len={}", text.len());

        let audio = self
            .speech
            .narrate(&text, &self.language_code, self.speech_timeout)
            .await?;

        Ok(audio)
    }
}

fn parse_request(request: TrackUrlRequest) -> crate::error::Result<TrackId> {
    let reference = request.track_url.unwrap_or_default();
    let reference = reference.trim();

    if reference.is_empty() {
        return Err(IntroError::InvalidRequest(
            "Parameter 'track_url' is missing or empty.".to_string(),
        ));
    }

    extract_track_id(reference).ok_or_else(|| {
        IntroError::InvalidRequest("Invalid URL, or not a link to a single Spotify track.".to_string())
    })
}
