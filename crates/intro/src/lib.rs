#![allow(
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::module_name_repetitions
)]

//! Spoken track intros: catalog metadata turned into a short radio narration

mod error;
mod narration;
mod server;
mod types;

use std::sync::Arc;

use airwave_core::JsonPayload;
use axum::{
    Json, Router,
    extract::State,
    response::{IntoResponse, Response},
    routing::post,
};

pub use error::{IntroError, Result};
pub use narration::{compose_narration, mood_phrases};
pub use server::Server;
pub use types::{IntroTextResponse, TrackUrlRequest};

/// Build the intro server on top of the shared catalog and speech servers
pub fn build_server(
    config: &airwave_config::Config,
    catalog: Arc<catalog::Catalog>,
    speech: Arc<speech::Server>,
) -> Arc<Server> {
    Arc::new(Server::new(catalog, speech, &config.intro))
}

/// Create the endpoint router for track intros
pub fn endpoint_router() -> Router<Arc<Server>> {
    Router::new()
        .route("/api/intro-from-track-text", post(intro_text))
        .route("/api/intro-from-track", post(intro_audio))
}

/// Narration text and metadata for a track
async fn intro_text(
    State(server): State<Arc<Server>>,
    JsonPayload(request): JsonPayload<TrackUrlRequest>,
) -> Result<Json<IntroTextResponse>> {
    let response = server.intro_text(request).await?;
    Ok(Json(response))
}

/// Spoken narration for a track
async fn intro_audio(
    State(server): State<Arc<Server>>,
    JsonPayload(request): JsonPayload<TrackUrlRequest>,
) -> Result<Response> {
    let audio = server.intro_audio(request).await?;

    tracing::debug!("Track intro synthesized, {} bytes", audio.audio.len());

    Ok(audio.into_response())
}
