use std::time::Duration;

use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

/// Free-form voice settings object, merged key by key
pub type VoiceSettings = serde_json::Map<String, serde_json::Value>;

/// Inbound `/api/tts` body
#[derive(Debug, Default, Deserialize)]
pub struct TtsRequest {
    /// Text to synthesize into speech
    #[serde(default)]
    pub text: String,
    /// Voice identifier; the configured default voice when absent
    #[serde(default, rename = "voiceId")]
    pub voice_id: Option<String>,
    /// Language hint for multilingual models
    #[serde(default)]
    pub language_code: Option<String>,
    /// Extra voice settings (stability, style, ...)
    #[serde(default)]
    pub voice_settings: Option<VoiceSettings>,
}

/// A fully resolved synthesis call for a provider
#[derive(Debug, Clone)]
pub struct SynthesisRequest {
    pub text: String,
    pub voice_id: String,
    pub model_id: String,
    pub language_code: String,
    pub voice_settings: VoiceSettings,
    pub output_format: String,
    pub timeout: Duration,
    /// Upstream error bodies are cut to this many characters
    pub error_excerpt_chars: usize,
}

/// `ElevenLabs` `text-to-speech` body
#[derive(Debug, Serialize)]
pub(crate) struct ElevenLabsRequest<'a> {
    pub text: &'a str,
    pub model_id: &'a str,
    pub language_code: &'a str,
    pub voice_settings: &'a VoiceSettings,
}

/// Merge caller settings with the forced similarity boost
///
/// Caller keys are preserved; `similarity_boost` is always overwritten.
pub fn merge_voice_settings(incoming: Option<VoiceSettings>, similarity_boost: f64) -> VoiceSettings {
    let mut settings = incoming.unwrap_or_default();
    settings.insert("similarity_boost".to_string(), serde_json::Value::from(similarity_boost));
    settings
}

/// Raw audio response from a speech provider
#[derive(Debug)]
pub struct SpeechResponse {
    /// Raw audio bytes
    pub audio: Vec<u8>,
    /// Content type of the audio (e.g. "audio/mpeg")
    pub content_type: String,
}

impl IntoResponse for SpeechResponse {
    fn into_response(self) -> axum::response::Response {
        ([(http::header::CONTENT_TYPE, self.content_type)], self.audio).into_response()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn merge_keeps_caller_keys_and_forces_boost() {
        let incoming = json!({"stability": 0.7, "similarity_boost": 0.9, "style": 0.1});
        let serde_json::Value::Object(incoming) = incoming else {
            unreachable!()
        };

        let merged = merge_voice_settings(Some(incoming), 0.34);

        assert_eq!(merged["stability"], json!(0.7));
        assert_eq!(merged["style"], json!(0.1));
        assert_eq!(merged["similarity_boost"], json!(0.34));
        assert_eq!(merged.len(), 3);
    }

    #[test]
    fn merge_without_settings() {
        let merged = merge_voice_settings(None, 0.34);
        assert_eq!(serde_json::Value::Object(merged), json!({"similarity_boost": 0.34}));
    }

    #[test]
    fn request_field_names() {
        let request: TtsRequest = serde_json::from_value(json!({
            "text": "Buonasera",
            "voiceId": "abc",
            "language_code": "it",
            "voice_settings": {"stability": 0.5}
        }))
        .unwrap();

        assert_eq!(request.text, "Buonasera");
        assert_eq!(request.voice_id.as_deref(), Some("abc"));
        assert_eq!(request.language_code.as_deref(), Some("it"));
        assert!(request.voice_settings.unwrap().contains_key("stability"));
    }

    #[test]
    fn request_fields_are_optional() {
        let request: TtsRequest = serde_json::from_value(json!({})).unwrap();
        assert!(request.text.is_empty());
        assert!(request.voice_id.is_none());
    }
}
