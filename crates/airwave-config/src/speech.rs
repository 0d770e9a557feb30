use std::time::Duration;

use secrecy::SecretString;
use serde::Deserialize;
use url::Url;

/// Speech synthesis (`ElevenLabs`) configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpeechConfig {
    /// API key sent as `xi-api-key`
    #[serde(default, deserialize_with = "crate::de::optional_secret")]
    pub api_key: Option<SecretString>,
    /// Voice used when a request names none, and for every track intro
    #[serde(default, deserialize_with = "crate::de::optional_string")]
    pub default_voice_id: Option<String>,
    #[serde(default = "default_model_id")]
    pub model_id: String,
    #[serde(default = "default_output_format")]
    pub output_format: String,
    /// Forced onto every synthesis request, overriding caller-supplied settings
    #[serde(default = "default_similarity_boost")]
    pub similarity_boost: f64,
    /// Language for `/api/tts` requests that do not specify one
    #[serde(default = "default_language_code")]
    pub language_code: String,
    /// Timeout for a synthesis call
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Timeout for the voice listing call
    #[serde(default = "default_voices_timeout_secs")]
    pub voices_timeout_secs: u64,
    /// Base URL override
    #[serde(default)]
    pub base_url: Option<Url>,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            default_voice_id: None,
            model_id: default_model_id(),
            output_format: default_output_format(),
            similarity_boost: default_similarity_boost(),
            language_code: default_language_code(),
            timeout_secs: default_timeout_secs(),
            voices_timeout_secs: default_voices_timeout_secs(),
            base_url: None,
        }
    }
}

impl SpeechConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn voices_timeout(&self) -> Duration {
        Duration::from_secs(self.voices_timeout_secs)
    }
}

fn default_model_id() -> String {
    "eleven_flash_v2_5".to_string()
}

fn default_output_format() -> String {
    "mp3_44100_128".to_string()
}

const fn default_similarity_boost() -> f64 {
    0.34
}

fn default_language_code() -> String {
    "en".to_string()
}

const fn default_timeout_secs() -> u64 {
    120
}

const fn default_voices_timeout_secs() -> u64 {
    30
}
