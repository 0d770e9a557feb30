pub mod spotify;

use async_trait::async_trait;

use crate::{
    TrackId,
    types::{AccessToken, AudioFeatures, Track},
};

/// Trait for catalog provider implementations
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Obtain a fresh access token
    async fn access_token(&self) -> crate::error::Result<AccessToken>;

    /// Fetch the track record
    async fn track(&self, id: &TrackId, token: &AccessToken) -> crate::error::Result<Track>;

    /// Fetch mood scores for the track
    async fn audio_features(&self, id: &TrackId, token: &AccessToken) -> crate::error::Result<AudioFeatures>;

    /// Get the provider name
    fn name(&self) -> &str;
}
