use crate::{
    TrackId,
    provider::CatalogProvider,
    types::{AudioFeatures, TrackMetadata},
};

/// Metadata lookup over a catalog provider
///
/// Stateless between calls: every lookup obtains its own token.
pub struct Catalog {
    provider: Box<dyn CatalogProvider>,
}

impl Catalog {
    pub fn new(provider: Box<dyn CatalogProvider>) -> Self {
        Self { provider }
    }

    /// Fetch the metadata needed to narrate a track
    ///
    /// Token and track failures are returned unchanged. A failed
    /// audio-features call only degrades the mood scores to neutral
    /// defaults.
    pub async fn fetch_metadata(&self, id: &TrackId) -> crate::error::Result<TrackMetadata> {
        tracing::debug!("Fetching {} metadata for track {id}", self.provider.name());

        let token = self.provider.access_token().await?;
        let track = self.provider.track(id, &token).await?;

        let features = match self.provider.audio_features(id, &token).await {
            Ok(features) => features,
            Err(e) => {
                tracing::warn!("Audio features unavailable for track {id}, using neutral mood: {e}");
                AudioFeatures::default()
            }
        };

        Ok(TrackMetadata::from_parts(track, &features))
    }
}
