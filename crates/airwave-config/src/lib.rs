#![allow(clippy::must_use_candidate)]

pub mod catalog;
pub mod cors;
mod de;
mod env;
pub mod health;
pub mod intro;
mod loader;
pub mod server;
pub mod speech;
pub mod telemetry;

use serde::Deserialize;

pub use catalog::*;
pub use cors::*;
pub use health::*;
pub use intro::*;
pub use server::*;
pub use speech::*;
pub use telemetry::*;

/// Top-level Airwave configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Listener, health endpoint and CORS
    #[serde(default)]
    pub server: ServerConfig,
    /// Speech synthesis provider (`ElevenLabs`)
    #[serde(default)]
    pub speech: SpeechConfig,
    /// Music catalog provider (Spotify)
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// Track intro settings
    #[serde(default)]
    pub intro: IntroConfig,
    /// Logging
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}
