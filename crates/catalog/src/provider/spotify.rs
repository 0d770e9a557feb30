use std::time::Duration;

use airwave_config::CatalogConfig;
use airwave_core::excerpt;
use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};

use crate::{
    TrackId,
    error::CatalogError,
    http_client::http_client,
    types::{AccessToken, AudioFeatures, TokenResponse, Track},
};

use super::CatalogProvider;

const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";

/// Upstream bodies quoted in error messages are cut to this many characters
const ERROR_EXCERPT_CHARS: usize = 300;

struct Credentials {
    client_id: String,
    client_secret: SecretString,
}

/// Spotify Web API provider using the client-credentials flow
pub struct SpotifyProvider {
    client: Client,
    token_url: String,
    api_url: String,
    credentials: Option<Credentials>,
    timeout: Duration,
}

impl SpotifyProvider {
    pub fn from_config(config: &CatalogConfig) -> crate::error::Result<Self> {
        let client =
            http_client().map_err(|e| CatalogError::ConfigError(format!("failed to build HTTP client: {e}")))?;

        let credentials = match (&config.client_id, &config.client_secret) {
            (Some(client_id), Some(client_secret)) => Some(Credentials {
                client_id: client_id.clone(),
                client_secret: client_secret.clone(),
            }),
            _ => None,
        };

        Ok(Self {
            client,
            token_url: config
                .token_url
                .as_ref()
                .map_or_else(|| DEFAULT_TOKEN_URL.to_string(), ToString::to_string),
            api_url: config.api_url.as_ref().map_or_else(
                || DEFAULT_API_URL.to_string(),
                |url| url.as_str().trim_end_matches('/').to_string(),
            ),
            credentials,
            timeout: config.timeout(),
        })
    }

    /// Whether both client id and secret are configured
    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }

    async fn get(&self, path: &str, token: &AccessToken) -> crate::error::Result<reqwest::Response> {
        let url = format!("{}/{path}", self.api_url);

        self.client
            .get(&url)
            .bearer_auth(token.0.expose_secret())
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Spotify request to {path} failed: {e}");
                CatalogError::from_transport("Spotify request failed", &e)
            })
    }
}

/// Read an error body for quoting, tolerating unreadable bodies
async fn error_excerpt(response: reqwest::Response) -> String {
    let text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
    excerpt(&text, ERROR_EXCERPT_CHARS).to_string()
}

#[async_trait]
impl CatalogProvider for SpotifyProvider {
    async fn access_token(&self) -> crate::error::Result<AccessToken> {
        let credentials = self.credentials.as_ref().ok_or(CatalogError::MissingCredentials)?;

        let response = self
            .client
            .post(&self.token_url)
            .basic_auth(&credentials.client_id, Some(credentials.client_secret.expose_secret()))
            .form(&[("grant_type", "client_credentials")])
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Spotify token request failed: {e}");
                CatalogError::from_transport("Spotify token request failed", &e)
            })?;

        let status = response.status();

        if !status.is_success() {
            let message = error_excerpt(response).await;
            tracing::error!("Spotify token error ({status}): {message}");

            return Err(CatalogError::TokenRejected {
                status: status.as_u16(),
                message,
            });
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| CatalogError::from_transport("Spotify token response", &e))?;

        Ok(AccessToken(SecretString::from(token.access_token)))
    }

    async fn track(&self, id: &TrackId, token: &AccessToken) -> crate::error::Result<Track> {
        let response = self.get(&format!("tracks/{id}"), token).await?;
        let status = response.status();

        if !status.is_success() {
            let message = error_excerpt(response).await;
            tracing::error!("Spotify tracks error ({status}) for {id}: {message}");

            return Err(CatalogError::TrackRejected {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json()
            .await
            .map_err(|e| CatalogError::from_transport("Spotify tracks response", &e))
    }

    async fn audio_features(&self, id: &TrackId, token: &AccessToken) -> crate::error::Result<AudioFeatures> {
        let response = self.get(&format!("audio-features/{id}"), token).await?;
        let status = response.status();

        if !status.is_success() {
            let message = error_excerpt(response).await;

            return Err(CatalogError::FeaturesRejected {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json()
            .await
            .map_err(|e| CatalogError::from_transport("Spotify audio-features response", &e))
    }

    fn name(&self) -> &str {
        "spotify"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_require_both_halves() {
        let config = CatalogConfig {
            client_id: Some("id".into()),
            ..CatalogConfig::default()
        };
        assert!(!SpotifyProvider::from_config(&config).unwrap().has_credentials());

        let config = CatalogConfig {
            client_id: Some("id".into()),
            client_secret: Some(SecretString::from("secret")),
            ..CatalogConfig::default()
        };
        assert!(SpotifyProvider::from_config(&config).unwrap().has_credentials());
    }

    #[test]
    fn base_urls_default_and_override() {
        let provider = SpotifyProvider::from_config(&CatalogConfig::default()).unwrap();
        assert_eq!(provider.token_url, DEFAULT_TOKEN_URL);
        assert_eq!(provider.api_url, DEFAULT_API_URL);

        let config = CatalogConfig {
            api_url: Some("http://127.0.0.1:9999/v1/".parse().unwrap()),
            ..CatalogConfig::default()
        };
        let provider = SpotifyProvider::from_config(&config).unwrap();
        assert_eq!(provider.api_url, "http://127.0.0.1:9999/v1");
    }

    #[tokio::test]
    async fn token_without_credentials_fails_before_any_request() {
        let provider = SpotifyProvider::from_config(&CatalogConfig::default()).unwrap();
        let err = provider.access_token().await.unwrap_err();
        assert!(matches!(err, CatalogError::MissingCredentials));
    }
}
