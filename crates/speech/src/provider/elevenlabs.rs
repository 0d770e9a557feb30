use std::time::Duration;

use airwave_core::excerpt;
use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use url::Url;

use crate::{
    error::SpeechError,
    types::{ElevenLabsRequest, SpeechResponse, SynthesisRequest},
};

use super::SpeechProvider;

const DEFAULT_ELEVENLABS_API_URL: &str = "https://api.elevenlabs.io/v1";

/// `ElevenLabs` TTS provider
pub struct ElevenLabsProvider {
    client: Client,
    base_url: Url,
    api_key: SecretString,
    voices_timeout: Duration,
}

impl ElevenLabsProvider {
    pub fn new(
        client: Client,
        api_key: SecretString,
        base_url: Option<Url>,
        voices_timeout: Duration,
    ) -> crate::error::Result<Self> {
        let base_url = match base_url {
            Some(url) => url,
            None => Url::parse(DEFAULT_ELEVENLABS_API_URL)
                .map_err(|e| SpeechError::ConfigError(format!("invalid ElevenLabs URL: {e}")))?,
        };

        if base_url.cannot_be_a_base() {
            return Err(SpeechError::ConfigError(format!(
                "ElevenLabs base URL cannot carry a path: {base_url}"
            )));
        }

        Ok(Self {
            client,
            base_url,
            api_key,
            voices_timeout,
        })
    }

    /// `{base}/{segments...}`, with each segment percent-encoded
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

#[async_trait]
impl SpeechProvider for ElevenLabsProvider {
    async fn synthesize(&self, request: SynthesisRequest) -> crate::error::Result<SpeechResponse> {
        let url = self.endpoint(&["text-to-speech", &request.voice_id]);

        tracing::debug!(
            "ElevenLabs TTS request: model={}, voice={}, language={}, input_len={}",
            request.model_id,
            request.voice_id,
            request.language_code,
            request.text.len(),
        );

        let body = ElevenLabsRequest {
            text: &request.text,
            model_id: &request.model_id,
            language_code: &request.language_code,
            voice_settings: &request.voice_settings,
        };

        let response = self
            .client
            .post(url)
            .query(&[("output_format", request.output_format.as_str())])
            .header("xi-api-key", self.api_key.expose_secret())
            .json(&body)
            .timeout(request.timeout)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("ElevenLabs request failed: {e}");
                SpeechError::from_transport("Failed to send request to ElevenLabs", &e)
            })?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());

            tracing::error!("ElevenLabs API error ({status}): {error_text}");

            return Err(SpeechError::ProviderApiError {
                status: status.as_u16(),
                message: excerpt(&error_text, request.error_excerpt_chars).to_string(),
            });
        }

        let content_type = response
            .headers()
            .get(http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("audio/mpeg")
            .to_string();

        let audio = response.bytes().await.map_err(|e| {
            tracing::error!("Failed to read ElevenLabs response body: {e}");
            if e.is_timeout() {
                SpeechError::from_transport("ElevenLabs response body", &e)
            } else {
                SpeechError::InternalError(None)
            }
        })?;

        tracing::debug!("ElevenLabs TTS synthesis complete, {} bytes", audio.len());

        Ok(SpeechResponse {
            audio: audio.to_vec(),
            content_type,
        })
    }

    async fn voices(&self) -> crate::error::Result<serde_json::Value> {
        let url = self.endpoint(&["voices"]);

        let response = self
            .client
            .get(url)
            .header(http::header::ACCEPT, "application/json")
            .header("xi-api-key", self.api_key.expose_secret())
            .timeout(self.voices_timeout)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("ElevenLabs voices request failed: {e}");
                SpeechError::from_transport("Failed to send request to ElevenLabs", &e)
            })?;

        let status = response.status();

        if !status.is_success() {
            // The listing error is relayed in full
            let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            tracing::error!("ElevenLabs voices error ({status}): {error_text}");

            return Err(SpeechError::ProviderApiError {
                status: status.as_u16(),
                message: error_text,
            });
        }

        response.json().await.map_err(|e| {
            tracing::error!("Failed to decode ElevenLabs voices: {e}");
            SpeechError::InternalError(Some(format!("Unexpected ElevenLabs voices response: {e}")))
        })
    }

    fn name(&self) -> &str {
        "elevenlabs"
    }
}
