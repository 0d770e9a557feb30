//! Programmatic configuration builder for integration tests

use std::net::SocketAddr;

use airwave_config::{
    CatalogConfig, Config, CorsConfig, HealthConfig, IntroConfig, ServerConfig, SpeechConfig, TelemetryConfig,
};
use secrecy::SecretString;

use super::mock_upstream::MockUpstream;

pub const TEST_API_KEY: &str = "xi-test-key";
pub const TEST_CLIENT_ID: &str = "client-id";
pub const TEST_CLIENT_SECRET: &str = "client-secret";
pub const TEST_VOICE: &str = "narrator-voice";

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with minimal defaults and no credentials
    pub fn new() -> Self {
        Self {
            config: Config {
                server: ServerConfig {
                    listen_address: Some(SocketAddr::from(([127, 0, 0, 1], 0))),
                    health: HealthConfig::default(),
                    cors: CorsConfig::default(),
                },
                speech: SpeechConfig::default(),
                catalog: CatalogConfig::default(),
                intro: IntroConfig::default(),
                telemetry: TelemetryConfig::default(),
            },
        }
    }

    /// Point both upstreams at the mock, with credentials and a default voice
    pub fn with_upstream(self, mock: &MockUpstream) -> Self {
        self.with_speech(mock).with_catalog(mock).with_default_voice(TEST_VOICE)
    }

    /// Configure the speech provider against the mock
    pub fn with_speech(mut self, mock: &MockUpstream) -> Self {
        self.config.speech.api_key = Some(SecretString::from(TEST_API_KEY));
        self.config.speech.base_url = Some(mock.speech_url().parse().expect("valid URL"));
        self
    }

    /// Configure the catalog provider against the mock
    pub fn with_catalog(mut self, mock: &MockUpstream) -> Self {
        self.config.catalog.client_id = Some(TEST_CLIENT_ID.to_owned());
        self.config.catalog.client_secret = Some(SecretString::from(TEST_CLIENT_SECRET));
        self.config.catalog.token_url = Some(mock.token_url().parse().expect("valid URL"));
        self.config.catalog.api_url = Some(mock.catalog_url().parse().expect("valid URL"));
        self
    }

    /// Point the speech provider at an address nothing listens on
    pub fn with_unreachable_speech(mut self) -> Self {
        self.config.speech.api_key = Some(SecretString::from(TEST_API_KEY));
        self.config.speech.base_url = Some("http://127.0.0.1:9/v1".parse().expect("valid URL"));
        self
    }

    /// Set the default voice
    pub fn with_default_voice(mut self, voice_id: &str) -> Self {
        self.config.speech.default_voice_id = Some(voice_id.to_owned());
        self
    }

    /// Drop the default voice
    pub fn without_default_voice(mut self) -> Self {
        self.config.speech.default_voice_id = None;
        self
    }

    /// Set the catalog call timeout
    pub fn with_catalog_timeout(mut self, secs: u64) -> Self {
        self.config.catalog.timeout_secs = secs;
        self
    }

    /// Set the intro narration language
    pub fn with_intro_language(mut self, language_code: &str) -> Self {
        self.config.intro.language_code = language_code.to_owned();
        self
    }

    /// Set CORS configuration
    pub fn with_cors(mut self, config: CorsConfig) -> Self {
        self.config.server.cors = config;
        self
    }

    /// Move the health endpoint
    pub fn with_health_path(mut self, path: &str) -> Self {
        self.config.server.health.path = path.to_owned();
        self
    }

    /// Disable health endpoint
    pub fn without_health(mut self) -> Self {
        self.config.server.health.enabled = false;
        self
    }

    /// Build the final config
    pub fn build(self) -> Config {
        self.config
    }
}
