use secrecy::SecretString;
use serde::{Deserialize, Deserializer};

/// Deserialize an optional string, treating `""` as unset
///
/// Env placeholders with `default("")` expand to empty strings, which should
/// behave exactly like an omitted key.
pub fn optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

/// Same as [`optional_string`], wrapping the value as a secret
pub fn optional_secret<'de, D>(deserializer: D) -> Result<Option<SecretString>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(optional_string(deserializer)?.map(SecretString::from))
}
