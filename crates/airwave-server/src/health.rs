use std::sync::Arc;

use airwave_config::Config;
use axum::{Json, extract::State};
use secrecy::ExposeSecret;
use serde::Serialize;

/// Configuration presence snapshot served by the health endpoint
///
/// Credentials are reported as flags and lengths only.
#[derive(Debug, Clone, Serialize)]
pub struct HealthSnapshot {
    #[serde(rename = "env_loaded")]
    pub speech_api_key_set: bool,
    pub has_default_voice: bool,
    pub model_id: String,
    pub output_format: String,
    pub similarity_boost: f64,
    /// Explicitly configured origins, empty when every origin is allowed
    pub allowed_origins: Vec<String>,
    #[serde(rename = "spotify_client_set")]
    pub catalog_client_set: bool,
    #[serde(rename = "spotify_client_id_len")]
    pub catalog_client_id_len: usize,
    #[serde(rename = "spotify_client_secret_len")]
    pub catalog_client_secret_len: usize,
}

impl HealthSnapshot {
    pub fn from_config(config: &Config) -> Self {
        let catalog_client_id_len = config.catalog.client_id.as_ref().map_or(0, |id| id.chars().count());
        let catalog_client_secret_len = config
            .catalog
            .client_secret
            .as_ref()
            .map_or(0, |secret| secret.expose_secret().chars().count());

        Self {
            speech_api_key_set: config.speech.api_key.is_some(),
            has_default_voice: config.speech.default_voice_id.is_some(),
            model_id: config.speech.model_id.clone(),
            output_format: config.speech.output_format.clone(),
            similarity_boost: config.speech.similarity_boost,
            allowed_origins: config.server.cors.origins.configured().to_vec(),
            catalog_client_set: catalog_client_id_len > 0 && catalog_client_secret_len > 0,
            catalog_client_id_len,
            catalog_client_secret_len,
        }
    }
}

/// Health check handler
pub async fn health_handler(State(snapshot): State<Arc<HealthSnapshot>>) -> Json<HealthSnapshot> {
    Json(snapshot.as_ref().clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_lengths_not_values() {
        let config: Config = toml::from_str(
            r#"
            [speech]
            api_key = "xi-secret"
            default_voice_id = "voice"

            [catalog]
            client_id = "abcd"
            client_secret = "s3cr3t"

            [server.cors]
            origins = ["http://localhost:5500"]
            "#,
        )
        .unwrap();

        let snapshot = HealthSnapshot::from_config(&config);
        let json = serde_json::to_value(&snapshot).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "env_loaded": true,
                "has_default_voice": true,
                "model_id": "eleven_flash_v2_5",
                "output_format": "mp3_44100_128",
                "similarity_boost": 0.34,
                "allowed_origins": ["http://localhost:5500"],
                "spotify_client_set": true,
                "spotify_client_id_len": 4,
                "spotify_client_secret_len": 6,
            })
        );
        assert!(!json.to_string().contains("s3cr3t"));
    }

    #[test]
    fn empty_config() {
        let snapshot = HealthSnapshot::from_config(&Config::default());

        assert!(!snapshot.speech_api_key_set);
        assert!(!snapshot.has_default_voice);
        assert!(!snapshot.catalog_client_set);
        assert_eq!(snapshot.catalog_client_id_len, 0);
        assert!(snapshot.allowed_origins.is_empty());
    }

    #[test]
    fn wildcard_origins_report_an_empty_list() {
        let config: Config = toml::from_str(
            r#"
            [server.cors]
            origins = "*"
            "#,
        )
        .unwrap();

        let json = serde_json::to_value(HealthSnapshot::from_config(&config)).unwrap();

        assert_eq!(json["allowed_origins"], serde_json::json!([]));
        assert!(json.get("speech_api_key_set").is_none());
        assert!(json.get("catalog_client_set").is_none());
    }
}
