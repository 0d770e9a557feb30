use std::time::Duration;

use secrecy::SecretString;
use serde::Deserialize;
use url::Url;

/// Music catalog (Spotify Web API) configuration
///
/// Credentials are used for the client-credentials grant. Leaving either
/// one unset keeps the server running; track endpoints then answer 500.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogConfig {
    #[serde(default, deserialize_with = "crate::de::optional_string")]
    pub client_id: Option<String>,
    #[serde(default, deserialize_with = "crate::de::optional_secret")]
    pub client_secret: Option<SecretString>,
    /// Token endpoint override
    #[serde(default)]
    pub token_url: Option<Url>,
    /// Web API base URL override
    #[serde(default)]
    pub api_url: Option<Url>,
    /// Timeout applied to each catalog call
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            client_id: None,
            client_secret: None,
            token_url: None,
            api_url: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl CatalogConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

const fn default_timeout_secs() -> u64 {
    20
}
