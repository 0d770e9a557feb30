use std::time::Duration;

use serde::Deserialize;

/// Track intro configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IntroConfig {
    /// Language the narration is spoken in
    #[serde(default = "default_language_code")]
    pub language_code: String,
    #[serde(default = "default_speech_timeout_secs")]
    pub speech_timeout_secs: u64,
}

impl Default for IntroConfig {
    fn default() -> Self {
        Self {
            language_code: default_language_code(),
            speech_timeout_secs: default_speech_timeout_secs(),
        }
    }
}

impl IntroConfig {
    pub fn speech_timeout(&self) -> Duration {
        Duration::from_secs(self.speech_timeout_secs)
    }
}

fn default_language_code() -> String {
    "en".to_string()
}

const fn default_speech_timeout_secs() -> u64 {
    60
}
