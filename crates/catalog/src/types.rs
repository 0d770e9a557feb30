use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Placeholder year when the album has no release date
pub const UNKNOWN_YEAR: &str = "—";

/// Mood score used when audio features are unavailable
pub const NEUTRAL_MOOD: f64 = 0.5;

/// Bearer token from the client-credentials grant
#[derive(Debug)]
pub struct AccessToken(pub SecretString);

/// Token endpoint response
#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    pub access_token: String,
}

/// Subset of the `/tracks/{id}` object the narration needs
#[derive(Debug, Default, Deserialize)]
pub struct Track {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub artists: Option<Vec<Artist>>,
    #[serde(default)]
    pub album: Option<Album>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Artist {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Album {
    #[serde(default)]
    pub name: Option<String>,
    /// `YYYY`, `YYYY-MM` or `YYYY-MM-DD`
    #[serde(default)]
    pub release_date: Option<String>,
}

/// Subset of the `/audio-features/{id}` object
#[derive(Debug, Default, Deserialize)]
pub struct AudioFeatures {
    #[serde(default)]
    pub energy: Option<f64>,
    #[serde(default)]
    pub valence: Option<f64>,
    #[serde(default)]
    pub danceability: Option<f64>,
    #[serde(default)]
    pub tempo: Option<f64>,
}

/// Track facts and mood scores for one narration
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackMetadata {
    pub title: String,
    pub artist: String,
    pub album: String,
    /// Four-digit year, or [`UNKNOWN_YEAR`]
    pub year: String,
    pub energy: f64,
    pub valence: f64,
    pub danceability: f64,
    pub tempo: f64,
}

impl TrackMetadata {
    /// Assemble metadata, defaulting anything the catalog left out
    pub fn from_parts(track: Track, features: &AudioFeatures) -> Self {
        let non_empty = |value: Option<String>| value.filter(|s| !s.is_empty());

        let title = non_empty(track.name).unwrap_or_else(|| "Unknown title".to_string());

        let artist = track
            .artists
            .and_then(|artists| artists.into_iter().next())
            .and_then(|artist| non_empty(artist.name))
            .unwrap_or_else(|| "Unknown artist".to_string());

        let album = track.album.unwrap_or_default();
        let year = non_empty(album.release_date)
            .map_or_else(|| UNKNOWN_YEAR.to_string(), |date| date.chars().take(4).collect());
        let album = non_empty(album.name).unwrap_or_else(|| "Unknown album".to_string());

        Self {
            title,
            artist,
            album,
            year,
            energy: features.energy.unwrap_or(NEUTRAL_MOOD),
            valence: features.valence.unwrap_or(NEUTRAL_MOOD),
            danceability: features.danceability.unwrap_or(NEUTRAL_MOOD),
            tempo: features.tempo.unwrap_or(0.0),
        }
    }
}
