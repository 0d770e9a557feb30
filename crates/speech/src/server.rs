use std::time::Duration;

use crate::{
    error::SpeechError,
    http_client::http_client,
    provider::{SpeechProvider, elevenlabs::ElevenLabsProvider},
    types::{SpeechResponse, SynthesisRequest, TtsRequest, merge_voice_settings},
};

/// Error excerpt length for `/api/tts` failures
const TTS_ERROR_EXCERPT_CHARS: usize = 500;

/// Error excerpt length for spoken intro failures
const NARRATION_ERROR_EXCERPT_CHARS: usize = 400;

/// Request-independent synthesis settings
#[derive(Debug, Clone)]
pub struct SpeechSettings {
    pub default_voice_id: Option<String>,
    pub model_id: String,
    pub output_format: String,
    pub similarity_boost: f64,
    pub language_code: String,
    pub timeout: Duration,
}

impl From<&airwave_config::SpeechConfig> for SpeechSettings {
    fn from(config: &airwave_config::SpeechConfig) -> Self {
        Self {
            default_voice_id: config.default_voice_id.clone(),
            model_id: config.model_id.clone(),
            output_format: config.output_format.clone(),
            similarity_boost: config.similarity_boost,
            language_code: config.language_code.clone(),
            timeout: config.timeout(),
        }
    }
}

/// Speech server that validates requests and forwards them to the provider
///
/// The provider is absent when no API key is configured; every call then
/// fails with a configuration error instead of preventing startup.
pub struct Server {
    provider: Option<Box<dyn SpeechProvider>>,
    settings: SpeechSettings,
}

impl Server {
    pub fn new(provider: Option<Box<dyn SpeechProvider>>, settings: SpeechSettings) -> Self {
        Self { provider, settings }
    }

    fn provider(&self) -> crate::error::Result<&dyn SpeechProvider> {
        self.provider
            .as_deref()
            .ok_or_else(|| SpeechError::ConfigError("Missing ELEVENLABS_API_KEY".to_string()))
    }

    /// Synthesize an `/api/tts` request
    ///
    /// Missing text or voice is the caller's fault (400); a missing API key
    /// is ours (500).
    pub async fn synthesize(&self, request: TtsRequest) -> crate::error::Result<SpeechResponse> {
        let text = request.text.trim();
        if text.is_empty() {
            return Err(SpeechError::InvalidRequest("Missing text".to_string()));
        }

        let provider = self.provider()?;

        let voice_id = request
            .voice_id
            .filter(|v| !v.trim().is_empty())
            .or_else(|| self.settings.default_voice_id.clone())
            .ok_or_else(|| SpeechError::InvalidRequest("Missing voiceId (and no default voice configured)".to_string()))?;

        let language_code = request
            .language_code
            .filter(|l| !l.trim().is_empty())
            .unwrap_or_else(|| self.settings.language_code.clone());

        let synthesis = SynthesisRequest {
            text: text.to_string(),
            voice_id,
            model_id: self.settings.model_id.clone(),
            language_code,
            voice_settings: merge_voice_settings(request.voice_settings, self.settings.similarity_boost),
            output_format: self.settings.output_format.clone(),
            timeout: self.settings.timeout,
            error_excerpt_chars: TTS_ERROR_EXCERPT_CHARS,
        };

        provider.synthesize(synthesis).await
    }

    /// Speak generated narration with the default voice
    ///
    /// Both the API key and the default voice are server configuration here,
    /// so either one missing is a 500.
    pub async fn narrate(
        &self,
        text: &str,
        language_code: &str,
        timeout: Duration,
    ) -> crate::error::Result<SpeechResponse> {
        let (provider, voice_id) = self.narrator()?;

        let synthesis = SynthesisRequest {
            text: text.to_string(),
            voice_id: voice_id.to_string(),
            model_id: self.settings.model_id.clone(),
            language_code: language_code.to_string(),
            voice_settings: merge_voice_settings(None, self.settings.similarity_boost),
            output_format: self.settings.output_format.clone(),
            timeout,
            error_excerpt_chars: NARRATION_ERROR_EXCERPT_CHARS,
        };

        provider.synthesize(synthesis).await
    }

    /// Voice catalog of the configured account
    pub async fn voices(&self) -> crate::error::Result<serde_json::Value> {
        self.provider()?.voices().await
    }

    /// Fail unless both the API key and the default voice are configured
    pub fn check_narration(&self) -> crate::error::Result<()> {
        self.narrator().map(|_| ())
    }

    fn narrator(&self) -> crate::error::Result<(&dyn SpeechProvider, &str)> {
        match (self.provider.as_deref(), self.settings.default_voice_id.as_deref()) {
            (Some(provider), Some(voice_id)) => Ok((provider, voice_id)),
            _ => Err(SpeechError::ConfigError(
                "ElevenLabs configuration missing (API key or default voice)".to_string(),
            )),
        }
    }
}

/// Builder for constructing the speech server from configuration
pub struct SpeechServerBuilder<'a> {
    config: &'a airwave_config::Config,
}

impl<'a> SpeechServerBuilder<'a> {
    pub const fn new(config: &'a airwave_config::Config) -> Self {
        Self { config }
    }

    pub fn build(self) -> crate::error::Result<Server> {
        let speech = &self.config.speech;

        let provider: Option<Box<dyn SpeechProvider>> = match &speech.api_key {
            Some(api_key) => {
                let client = http_client()
                    .map_err(|e| SpeechError::ConfigError(format!("failed to build HTTP client: {e}")))?;

                let provider = ElevenLabsProvider::new(
                    client,
                    api_key.clone(),
                    speech.base_url.clone(),
                    speech.voices_timeout(),
                )?;

                tracing::debug!("Speech provider initialized: {}", provider.name());
                Some(Box::new(provider))
            }
            None => {
                tracing::warn!("ElevenLabs API key is not configured; speech endpoints will fail");
                None
            }
        };

        Ok(Server::new(provider, SpeechSettings::from(speech)))
    }
}
