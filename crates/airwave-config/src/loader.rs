use std::path::Path;

use crate::Config;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, environment variable
    /// expansion fails, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        Self::parse(&raw)
    }

    /// Parse and validate configuration text
    ///
    /// # Errors
    ///
    /// Returns an error if expansion, parsing or validation fails
    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        let expanded =
            crate::env::expand_env(raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self = toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// Missing provider credentials are not an error here: the affected
    /// endpoints report them per request so `/health` stays reachable.
    ///
    /// # Errors
    ///
    /// Returns an error on out-of-range values
    pub fn validate(&self) -> anyhow::Result<()> {
        self.validate_server_config()?;
        self.validate_speech_config()?;
        self.validate_timeouts()?;
        Ok(())
    }

    fn validate_server_config(&self) -> anyhow::Result<()> {
        let health = &self.server.health;
        if health.enabled && !health.path.starts_with('/') {
            anyhow::bail!("server.health.path must start with '/': `{}`", health.path);
        }

        Ok(())
    }

    fn validate_speech_config(&self) -> anyhow::Result<()> {
        let boost = self.speech.similarity_boost;
        if !(0.0..=1.0).contains(&boost) {
            anyhow::bail!("speech.similarity_boost must be between 0 and 1, got {boost}");
        }

        if self.speech.language_code.trim().is_empty() {
            anyhow::bail!("speech.language_code must not be empty");
        }

        if self.intro.language_code.trim().is_empty() {
            anyhow::bail!("intro.language_code must not be empty");
        }

        Ok(())
    }

    fn validate_timeouts(&self) -> anyhow::Result<()> {
        let timeouts = [
            ("speech.timeout_secs", self.speech.timeout_secs),
            ("speech.voices_timeout_secs", self.speech.voices_timeout_secs),
            ("catalog.timeout_secs", self.catalog.timeout_secs),
            ("intro.speech_timeout_secs", self.intro.speech_timeout_secs),
        ];

        for (name, value) in timeouts {
            if value == 0 {
                anyhow::bail!("{name} must be greater than 0");
            }
        }

        Ok(())
    }
}
