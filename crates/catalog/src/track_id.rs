use std::sync::LazyLock;

use regex::Regex;
use url::Url;

/// Host every web track link must carry
const WEB_HOST: &str = "open.spotify.com";

static URI_FORM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^spotify:track:([A-Za-z0-9]{22})$").expect("must be valid regex"));

static TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]{22}$").expect("must be valid regex"));

/// Canonical 22-character Spotify track identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TrackId(String);

impl TrackId {
    /// Accept `candidate` only if it is exactly 22 ASCII alphanumerics
    pub fn parse(candidate: &str) -> Option<Self> {
        TOKEN.is_match(candidate).then(|| Self(candidate.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TrackId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl serde::Serialize for TrackId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

/// Extract a track identifier from a user-supplied reference
///
/// Accepts `spotify:track:{id}` and `https://open.spotify.com[/intl-xx]/track/{id}`
/// with any query or fragment. Anything else yields `None`.
pub fn extract_track_id(reference: &str) -> Option<TrackId> {
    let reference = reference.trim();
    if reference.is_empty() {
        return None;
    }

    if let Some(caps) = URI_FORM.captures(reference) {
        return TrackId::parse(&caps[1]);
    }

    Url::parse(reference).ok()?;

    // `Url` normalizes host and path, so both are read from the text as typed
    let (authority, path) = raw_parts(reference)?;
    if !authority.contains(WEB_HOST) {
        return None;
    }

    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    match segments.as_slice() {
        [.., "track", candidate] => TrackId::parse(candidate),
        _ => None,
    }
}

/// Authority and path of an absolute URL, as written
///
/// Query and fragment are dropped. The authority ends at the first `/`, `?`
/// or `#`; the path runs from there up to the query or fragment.
fn raw_parts(url: &str) -> Option<(&str, &str)> {
    let (_, rest) = url.split_once("://")?;
    let rest = &rest[..rest.find(['?', '#']).unwrap_or(rest.len())];

    Some(match rest.find('/') {
        Some(slash) => rest.split_at(slash),
        None => (rest, ""),
    })
}
