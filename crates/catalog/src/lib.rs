#![allow(
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::module_name_repetitions
)]

//! Spotify catalog access: track reference parsing and metadata lookup

mod catalog;
mod error;
mod http_client;
mod provider;
mod track_id;
mod types;

use std::sync::Arc;

pub use catalog::Catalog;
pub use error::{CatalogError, Result};
pub use provider::{CatalogProvider, spotify::SpotifyProvider};
pub use track_id::{TrackId, extract_track_id};
pub use types::{AccessToken, Album, Artist, AudioFeatures, Track, TrackMetadata};

/// Build the catalog client from configuration
///
/// Missing credentials do not fail here; each lookup reports them instead.
pub fn build_catalog(config: &airwave_config::Config) -> anyhow::Result<Arc<Catalog>> {
    let provider = SpotifyProvider::from_config(&config.catalog)
        .map_err(|e| anyhow::anyhow!("Failed to initialize catalog client: {e}"))?;

    if !provider.has_credentials() {
        tracing::warn!("Spotify client credentials are not configured; track intros will fail");
    }

    Ok(Arc::new(Catalog::new(Box::new(provider))))
}
