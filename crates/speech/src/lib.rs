#![allow(
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::module_name_repetitions
)]

mod error;
mod http_client;
mod provider;
mod server;
mod types;

use std::sync::Arc;

use airwave_core::JsonPayload;
use axum::{
    Json, Router,
    extract::State,
    response::{IntoResponse, Response},
    routing::{get, post},
};

pub use error::{Result, SpeechError};
pub use provider::{SpeechProvider, elevenlabs::ElevenLabsProvider};
pub use server::{Server, SpeechServerBuilder, SpeechSettings};
pub use types::{SpeechResponse, SynthesisRequest, TtsRequest, VoiceSettings};

/// Build the speech server from configuration
pub fn build_server(config: &airwave_config::Config) -> anyhow::Result<Arc<Server>> {
    let server = Arc::new(
        SpeechServerBuilder::new(config)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to initialize speech server: {e}"))?,
    );
    Ok(server)
}

/// Create the endpoint router for speech synthesis and voice listing
pub fn endpoint_router() -> Router<Arc<Server>> {
    Router::new()
        .route("/api/tts", post(synthesize))
        .route("/api/voices", get(voices))
}

/// Handle text-to-speech requests
async fn synthesize(
    State(server): State<Arc<Server>>,
    JsonPayload(request): JsonPayload<TtsRequest>,
) -> Result<Response> {
    tracing::debug!("TTS handler called, text_len={}", request.text.len());

    let response = server.synthesize(request).await?;

    tracing::debug!("Speech synthesis complete");

    Ok(response.into_response())
}

/// Pass through the provider's voice catalog
async fn voices(State(server): State<Arc<Server>>) -> Result<Json<serde_json::Value>> {
    let voices = server.voices().await?;
    Ok(Json(voices))
}
