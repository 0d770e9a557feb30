pub mod elevenlabs;

use async_trait::async_trait;

use crate::types::{SpeechResponse, SynthesisRequest};

/// Trait for speech provider implementations
#[async_trait]
pub trait SpeechProvider: Send + Sync {
    /// Synthesize text to speech
    async fn synthesize(&self, request: SynthesisRequest) -> crate::error::Result<SpeechResponse>;

    /// List the voices available to the configured account, as returned upstream
    async fn voices(&self) -> crate::error::Result<serde_json::Value>;

    /// Get the provider name
    fn name(&self) -> &str;
}
